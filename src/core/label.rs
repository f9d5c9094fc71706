//! Structured target labels.
//!
//! The engine identifies on-screen items by value, never by parsing strings.
//! The `"red-square"` text form exists only at the render boundary, via
//! `Display`, where hosts need a CSS-class-like token.

use serde::{Deserialize, Serialize};

/// Item color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Purple,
    Blue,
    Green,
}

impl Color {
    /// All colors, in pool order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Purple,
        Color::Blue,
        Color::Green,
    ];

    /// Lowercase token for rendering.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

/// Item shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Square,
    Circle,
    Star,
}

impl Shape {
    /// All shapes, in pool order.
    pub const ALL: [Shape; 3] = [Shape::Square, Shape::Circle, Shape::Star];

    /// Lowercase token for rendering.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Star => "star",
        }
    }
}

/// A color-shape combination: the identity of one clickable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeLabel {
    pub color: Color,
    pub shape: Shape,
}

impl ShapeLabel {
    /// Create a label.
    #[must_use]
    pub const fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// The full combinatorial pool (colors x shapes), in a fixed order.
    #[must_use]
    pub fn all() -> Vec<ShapeLabel> {
        let mut pool = Vec::with_capacity(Shape::ALL.len() * Color::ALL.len());
        for shape in Shape::ALL {
            for color in Color::ALL {
                pool.push(ShapeLabel::new(color, shape));
            }
        }
        pool
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.color.token(), self.shape.token())
    }
}

/// The single clickable box of the solo variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxTarget;

impl std::fmt::Display for BoxTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "box")
    }
}
