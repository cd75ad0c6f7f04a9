// File: ./src/frame.rs
// Borderless window state: placement, dragging, click-vs-drag discrimination
use crate::geometry::{Point, Size, Vector};
use serde::{Deserialize, Serialize};

/// Where the window opens, relative to the screen it opens on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Placement {
    /// Bottom-right corner, pulled in by the given margins.
    EdgeOffset { right: f32, bottom: f32 },
    /// Top-left corner at a fraction of the screen size.
    Fraction { x: f32, y: f32 },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::EdgeOffset {
            right: 200.0,
            bottom: 200.0,
        }
    }
}

impl Placement {
    pub fn origin(&self, window: Size, screen: Size) -> Point {
        match *self {
            Placement::EdgeOffset { right, bottom } => Point::new(
                (screen.width - window.width - right).max(0.0),
                (screen.height - window.height - bottom).max(0.0),
            ),
            Placement::Fraction { x, y } => Point::new(
                (screen.width * x.clamp(0.0, 1.0)).floor(),
                (screen.height * y.clamp(0.0, 1.0)).floor(),
            ),
        }
    }
}

/// Screen-side state of the frameless window.
///
/// Pointer positions come in relative to the window; the window origin turns
/// them into screen positions so that a drag (which moves the window under a
/// still pointer) still counts as cursor movement.
#[derive(Debug, Clone, Default)]
pub struct FramelessWindow {
    origin: Point,
    size: Size,
    pointer: Point,
    click_pos: Point,
    anchor: Vector,
    dragging: bool,
}

impl FramelessWindow {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            ..Default::default()
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Last known pointer position, relative to the window.
    pub fn pointer_local(&self) -> Point {
        self.pointer
    }

    pub fn pointer_screen(&self) -> Point {
        self.origin + (self.pointer - Point::ORIGIN)
    }

    pub fn click_pos(&self) -> Point {
        self.click_pos
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Records the Click State and the drag anchor.
    pub fn press(&mut self) {
        self.click_pos = self.pointer_screen();
        self.anchor = self.pointer - Point::ORIGIN;
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Tracks the pointer. While dragging, returns the origin the window has to
    /// move to so that it keeps its offset from the pointer.
    ///
    /// The target is computed from the last confirmed origin (`set_origin`).
    /// Motion that arrives before the window system reports the previous move
    /// is measured against the old origin, which matches where the window
    /// still is at that point.
    pub fn pointer_moved(&mut self, local: Point) -> Option<Point> {
        self.pointer = local;
        if !self.dragging {
            return None;
        }
        let target = self.pointer_screen() - self.anchor;
        (target != self.origin).then_some(target)
    }

    pub fn has_cursor_moved(&self) -> bool {
        self.click_pos != self.pointer_screen()
    }
}
