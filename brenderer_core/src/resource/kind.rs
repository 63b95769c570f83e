/// Resource kinds and the construction dependency graph between them
///
/// Pipelines only call into kinds they depend on:
/// Shader, Texture ← Material ← Model (including sprites).
/// The graph is acyclic; `ConstructionStack` checks every nested call against it.

use std::fmt;

/// One of the nine resource categories the registry caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Shader,
    Texture,
    Material,
    Model,
    Camera,
    Light,
    MatrixStack,
    Framebuffer,
    Properties,
}

impl ResourceKind {
    /// All kinds, in the order `clear()` empties them
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Shader,
        ResourceKind::Texture,
        ResourceKind::Material,
        ResourceKind::Properties,
        ResourceKind::Model,
        ResourceKind::Camera,
        ResourceKind::MatrixStack,
        ResourceKind::Light,
        ResourceKind::Framebuffer,
    ];

    /// Kinds whose construction pipeline this kind's pipeline may invoke
    pub fn dependencies(self) -> &'static [ResourceKind] {
        match self {
            ResourceKind::Material => &[ResourceKind::Shader, ResourceKind::Texture],
            ResourceKind::Model => &[
                ResourceKind::Material,
                ResourceKind::Shader,
                ResourceKind::Texture,
            ],
            _ => &[],
        }
    }

    /// Whether constructing `self` may construct `other` on the same call stack
    pub fn depends_on(self, other: ResourceKind) -> bool {
        self.dependencies().contains(&other)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Shader => "Shader",
            ResourceKind::Texture => "Texture",
            ResourceKind::Material => "Material",
            ResourceKind::Model => "Model",
            ResourceKind::Camera => "Camera",
            ResourceKind::Light => "Light",
            ResourceKind::MatrixStack => "MatrixStack",
            ResourceKind::Framebuffer => "Framebuffer",
            ResourceKind::Properties => "Properties",
        };
        f.write_str(name)
    }
}

/// Kinds currently under construction, innermost last
#[derive(Debug, Default)]
pub(crate) struct ConstructionStack {
    kinds: Vec<ResourceKind>,
}

impl ConstructionStack {
    /// Whether `kind` may start constructing given what is already in progress
    pub(crate) fn allows(&self, kind: ResourceKind) -> bool {
        match self.kinds.last() {
            None => true,
            Some(outer) => outer.depends_on(kind),
        }
    }

    pub(crate) fn enter(&mut self, kind: ResourceKind) {
        debug_assert!(
            self.allows(kind),
            "{} construction invoked from {} construction (stack: {:?})",
            kind,
            self.kinds.last().map_or("nothing".to_string(), |k| k.to_string()),
            self.kinds
        );
        self.kinds.push(kind);
    }

    pub(crate) fn leave(&mut self, kind: ResourceKind) {
        let popped = self.kinds.pop();
        debug_assert_eq!(popped, Some(kind), "unbalanced construction stack");
    }

    pub(crate) fn depth(&self) -> usize {
        self.kinds.len()
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
