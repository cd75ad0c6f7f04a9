// File: ./src/model/item.rs
use std::fmt;

/// Prefix carried by a finished task: a checkmark followed by a space.
pub const DONE_MARKER: &str = "✓ ";

/// A single line of the to-do list.
///
/// The done state is not a separate flag: a task is done exactly when its text
/// starts with [`DONE_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Task {
    text: String,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.text.starts_with(DONE_MARKER)
    }

    /// Adds the marker when missing, otherwise strips it.
    pub fn toggle(&mut self) {
        match self.text.strip_prefix(DONE_MARKER) {
            Some(rest) => self.text = rest.to_string(),
            None => self.text.insert_str(0, DONE_MARKER),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_prepends_marker() {
        let mut task = Task::new("buy milk");
        assert!(!task.is_done());
        task.toggle();
        assert_eq!(task.as_str(), "✓ buy milk");
        assert!(task.is_done());
    }

    #[test]
    fn toggle_is_an_involution() {
        for text in ["buy milk", "", " leading space", "✓", "✓x", "multi ✓ inside"] {
            let mut task = Task::new(text);
            task.toggle();
            task.toggle();
            assert_eq!(task.as_str(), text);
        }
    }

    #[test]
    fn toggle_strips_only_the_marker() {
        let mut task = Task::new("✓ ✓ twice");
        task.toggle();
        assert_eq!(task.as_str(), "✓ twice");
        assert!(task.is_done());
    }

    #[test]
    fn checkmark_without_space_is_not_done() {
        assert!(!Task::new("✓done").is_done());
    }
}
