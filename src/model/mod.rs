// File: ./src/model/mod.rs
pub mod adapter;
pub mod item;
pub mod list;

pub use item::{DONE_MARKER, Task};
pub use list::TaskList;
