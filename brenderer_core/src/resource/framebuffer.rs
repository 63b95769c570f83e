/// Off-screen render target description.

/// Framebuffer creation descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FramebufferDesc {
    /// Fixed size in pixels; `None` follows the display surface
    pub size: Option<(u32, u32)>,
}

impl FramebufferDesc {
    pub fn sized(width: u32, height: u32) -> Self {
        Self { size: Some((width, height)) }
    }
}

/// Framebuffer resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    size: Option<(u32, u32)>,
}

impl Framebuffer {
    pub fn from_desc(desc: FramebufferDesc) -> Self {
        Self { size: desc.size }
    }

    /// Whether the framebuffer tracks the display surface size
    pub fn uses_screen_size(&self) -> bool {
        self.size.is_none()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Fix the size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    /// Follow the display surface again
    pub fn use_screen_size(&mut self) {
        self.size = None;
    }
}
