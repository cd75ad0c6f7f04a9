// File: ./src/gui/message.rs
use crate::geometry::{Point, Size};
use crate::menu::MenuItem;
use iced::window;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // Entry
    InputChanged(String),
    Submit,

    // Pointer (window-relative positions)
    CursorMoved(Point),
    LeftPressed,
    LeftReleased,
    RightPressed,

    // Menu & dialogs
    MenuSelected(MenuItem),
    SavePathPicked(Option<PathBuf>),
    LoadPathPicked(Option<PathBuf>),

    // Timers
    Rearm(u64),

    // Window
    WindowFound(Option<window::Id>),
    WindowOpened {
        id: window::Id,
        position: Option<Point>,
        size: Size,
    },
    WindowMoved(Point),
    WindowResized(Size),
    EscapePressed,
}
