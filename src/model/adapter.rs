// File: ./src/model/adapter.rs
// Handles plain-text serialization/deserialization (one task per line)
use crate::model::item::Task;

impl Task {
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.as_str().len() + 1);
        line.push_str(self.as_str());
        line.push('\n');
        line
    }

    /// Builds a task from one line of a task file. Trailing whitespace (line
    /// endings included) is dropped; the done marker is kept as-is.
    pub fn from_line(line: &str) -> Self {
        Task::new(line.trim_end())
    }
}

pub fn to_text(tasks: &[Task]) -> String {
    tasks.iter().map(Task::to_line).collect()
}

pub fn from_text(contents: &str) -> Vec<Task> {
    contents.lines().map(Task::from_line).collect()
}
