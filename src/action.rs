// File: ./src/action.rs
use crate::geometry::Point;
use std::time::Duration;

/// Side effects requested by the controller, carried out by the host window.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Window
    MoveWindow(Point),
    FocusInput,

    // Persistence
    PromptSave,
    PromptLoad,

    // Timers
    ScheduleRearm { generation: u64, delay: Duration },

    // Lifecycle
    Quit,
}
