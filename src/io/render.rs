//! Rendering collaborator.
//!
//! The engine decides *what* is visible and *where*; the host decides how
//! to draw it. Items cross the seam as token-plus-position sprites; the
//! token is the `Display` form of the structured label.

/// One visible item.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Render token, e.g. `"red-square"` or `"box"`.
    pub token: String,
    /// Left edge, in pixels.
    pub x: f64,
    /// Top edge, in pixels.
    pub y: f64,
}

impl Sprite {
    /// Create a sprite from anything displayable.
    pub fn new(label: impl std::fmt::Display, x: f64, y: f64) -> Self {
        Self {
            token: label.to_string(),
            x,
            y,
        }
    }
}

/// Places and removes visible items.
pub trait Renderer {
    /// Replace the arena contents with `items`.
    fn render(&mut self, items: &[Sprite]);

    /// Remove everything from the arena.
    fn clear(&mut self);
}

/// In-memory renderer. Tests inspect it; headless hosts can ignore it.
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    /// Currently visible sprites.
    pub visible: Vec<Sprite>,
    /// Number of `clear` calls seen.
    pub clears: u32,
}

impl MemoryRenderer {
    /// Create an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MemoryRenderer {
    fn render(&mut self, items: &[Sprite]) {
        self.visible = items.to_vec();
    }

    fn clear(&mut self) {
        self.visible.clear();
        self.clears += 1;
    }
}
