// File: ./src/menu.rs
use crate::geometry::{Bounds, HitMode, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Save,
    Load,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Save, MenuItem::Load, MenuItem::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Save => "Save",
            MenuItem::Load => "Load",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Right-click menu drawn inside the window.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    size: Size,
    anchor: Option<Point>,
}

impl ContextMenu {
    pub fn new(item_width: f32, item_height: f32) -> Self {
        Self {
            size: Size::new(item_width, item_height * MenuItem::ALL.len() as f32),
            anchor: None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Opens at `at`, shifted left/up as needed to stay inside `window`.
    pub fn open(&mut self, at: Point, window: Size) {
        let x = at.x.min(window.width - self.size.width).max(0.0);
        let y = at.y.min(window.height - self.size.height).max(0.0);
        self.anchor = Some(Point::new(x, y));
    }

    pub fn close(&mut self) {
        self.anchor = None;
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.anchor
            .map(|a| Bounds::new(a.x, a.y, self.size.width, self.size.height))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds()
            .is_some_and(|b| b.contains(point, HitMode::Full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size::new(180.0, 240.0);

    #[test]
    fn opens_at_click_when_it_fits() {
        let mut menu = ContextMenu::new(80.0, 22.0);
        menu.open(Point::new(30.0, 50.0), WINDOW);
        assert_eq!(menu.anchor(), Some(Point::new(30.0, 50.0)));
        assert!(menu.contains(Point::new(100.0, 110.0)));
        assert!(!menu.contains(Point::new(10.0, 110.0)));
    }

    #[test]
    fn clamps_into_window() {
        let mut menu = ContextMenu::new(80.0, 22.0);
        menu.open(Point::new(170.0, 230.0), WINDOW);
        assert_eq!(menu.anchor(), Some(Point::new(100.0, 174.0)));
    }

    #[test]
    fn closed_menu_contains_nothing() {
        let mut menu = ContextMenu::new(80.0, 22.0);
        menu.open(Point::ORIGIN, WINDOW);
        menu.close();
        assert!(!menu.is_open());
        assert!(!menu.contains(Point::new(1.0, 1.0)));
    }
}
