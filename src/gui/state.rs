// File: ./src/gui/state.rs
use crate::config::Config;
use crate::controller::TaskListController;
use crate::gui::message::Message;
use crate::model::Task as TodoTask;
use crate::theme::Palette;
use iced::widget::text_input;
use iced::{Task, window};

pub struct GuiApp {
    pub controller: TaskListController,
    pub palette: Palette,

    // Window handles, filled in once the runtime reports them
    pub window_id: Option<window::Id>,
    pub input_id: text_input::Id,
}

impl GuiApp {
    pub fn new(config: &Config, palette: Palette, tasks: Vec<TodoTask>) -> (Self, Task<Message>) {
        let app = Self {
            controller: TaskListController::new(config).with_tasks(tasks),
            palette,
            window_id: None,
            input_id: text_input::Id::new("task-entry"),
        };

        // Focus on the entry so that typing works right away
        let boot = Task::batch([
            text_input::focus(app.input_id.clone()),
            window::get_latest().map(Message::WindowFound),
        ]);
        (app, boot)
    }
}
