use serde::Serialize;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Moves diagonally by `step`, saturating at the `i32` bounds.
    pub fn advance(self, step: i32) -> Self {
        Self {
            x: self.x.saturating_add(step),
            y: self.y.saturating_add(step),
        }
    }
}
