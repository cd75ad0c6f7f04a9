// File: ./src/lib.rs
pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod menu;
pub mod model;
pub mod paths;
pub mod storage;
pub mod theme;

#[cfg(feature = "gui")]
pub mod gui;
