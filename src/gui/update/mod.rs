// File: ./src/gui/update/mod.rs
pub mod common;

use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::storage;
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut GuiApp, message: Message) -> Task<Message> {
    let controller = &mut app.controller;

    let actions = match message {
        Message::InputChanged(value) => {
            controller.set_input(value);
            vec![]
        }
        Message::Submit => {
            controller.submit();
            vec![]
        }

        Message::CursorMoved(position) => controller.cursor_moved(position),
        Message::LeftPressed => controller.left_pressed(Instant::now()),
        Message::LeftReleased => controller.left_released(),
        Message::RightPressed => controller.right_pressed(),

        Message::MenuSelected(item) => controller.menu_selected(item),
        Message::SavePathPicked(Some(path)) => {
            controller.save_to(&storage::with_default_extension(path));
            vec![]
        }
        Message::LoadPathPicked(Some(path)) => {
            controller.load_from(&path);
            vec![]
        }
        // dialog cancelled
        Message::SavePathPicked(None) | Message::LoadPathPicked(None) => vec![],

        Message::Rearm(generation) => {
            controller.rearm(generation);
            vec![]
        }

        Message::WindowFound(id) => {
            if app.window_id.is_none() {
                app.window_id = id;
            }
            vec![]
        }
        Message::WindowOpened { id, position, size } => {
            app.window_id = Some(id);
            controller.window_opened(position, size);
            vec![]
        }
        Message::WindowMoved(origin) => {
            controller.window_moved(origin);
            vec![]
        }
        Message::WindowResized(size) => {
            controller.window_resized(size);
            vec![]
        }
        Message::EscapePressed => controller.close(),
    };

    common::run_actions(app, actions)
}
