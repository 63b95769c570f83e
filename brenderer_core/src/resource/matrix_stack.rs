/// Stack of accumulated transforms for hierarchical drawing.

use glam::Mat4;

/// Matrix stack resource
///
/// The bottom entry is always present; `pop` never removes it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    matrices: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            matrices: vec![Mat4::IDENTITY],
        }
    }

    /// Push `top * matrix`
    pub fn push(&mut self, matrix: Mat4) {
        let combined = self.top() * matrix;
        self.matrices.push(combined);
    }

    /// Pop the top entry; `None` when only the bottom entry is left
    pub fn pop(&mut self) -> Option<Mat4> {
        if self.matrices.len() > 1 {
            self.matrices.pop()
        } else {
            None
        }
    }

    /// Accumulated transform
    pub fn top(&self) -> Mat4 {
        self.matrices.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Number of pushed entries (0 when only the bottom entry remains)
    pub fn depth(&self) -> usize {
        self.matrices.len() - 1
    }

    /// Back to a single identity entry
    pub fn clear(&mut self) {
        self.matrices.truncate(1);
        self.matrices[0] = Mat4::IDENTITY;
    }
}

#[cfg(test)]
#[path = "matrix_stack_tests.rs"]
mod tests;
