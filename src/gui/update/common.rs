// File: ./src/gui/update/common.rs
use crate::action::Action;
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::paths::AppPaths;
use crate::storage::{DEFAULT_TASK_FILE_NAME, TASK_FILE_EXTENSION};
use iced::widget::text_input;
use iced::{Task, window};
use std::path::PathBuf;

// Helper: Turn controller actions into runtime tasks
pub fn run_actions(app: &GuiApp, actions: Vec<Action>) -> Task<Message> {
    Task::batch(actions.into_iter().map(|action| run_action(app, action)))
}

fn run_action(app: &GuiApp, action: Action) -> Task<Message> {
    match action {
        Action::MoveWindow(origin) => match app.window_id {
            Some(id) => window::move_to(id, iced::Point::new(origin.x, origin.y)),
            None => {
                log::warn!("window id unknown, cannot move");
                Task::none()
            }
        },
        Action::FocusInput => text_input::focus(app.input_id.clone()),
        Action::PromptSave => Task::perform(pick_save_path(), Message::SavePathPicked),
        Action::PromptLoad => Task::perform(pick_load_path(), Message::LoadPathPicked),
        Action::ScheduleRearm { generation, delay } => {
            Task::perform(tokio::time::sleep(delay), move |_| Message::Rearm(generation))
        }
        Action::Quit => iced::exit(),
    }
}

type Filter = (&'static str, &'static [&'static str]);

const TEXT_FILES: Filter = ("Text Files", &[TASK_FILE_EXTENSION]);
const ALL_FILES: Filter = ("All Files", &["*"]);

/// Save only offers text files; load also lets any file be picked.
fn dialog_filters(for_load: bool) -> Vec<Filter> {
    if for_load {
        vec![TEXT_FILES, ALL_FILES]
    } else {
        vec![TEXT_FILES]
    }
}

fn file_dialog(for_load: bool) -> rfd::AsyncFileDialog {
    let dialog = dialog_filters(for_load)
        .into_iter()
        .fold(rfd::AsyncFileDialog::new(), |dialog, (name, extensions)| {
            dialog.add_filter(name, extensions)
        });
    match AppPaths::dialog_dir() {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

async fn pick_save_path() -> Option<PathBuf> {
    file_dialog(false)
        .set_file_name(DEFAULT_TASK_FILE_NAME)
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

async fn pick_load_path() -> Option<PathBuf> {
    file_dialog(true)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_dialog_offers_text_files_only() {
        assert_eq!(dialog_filters(false), vec![("Text Files", &["txt"][..])]);
    }

    #[test]
    fn load_dialog_adds_all_files_after_text_files() {
        let filters = dialog_filters(true);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0], TEXT_FILES);
        assert_eq!(filters[1], ("All Files", &["*"][..]));
    }
}
