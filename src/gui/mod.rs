// File: ./src/gui/mod.rs
pub mod message;
pub mod state;
pub mod subscription;
pub mod update;
pub mod view;

use crate::config::{Config, WindowConfig};
use crate::frame::Placement;
use crate::geometry::Size;
use crate::model::Task as TodoTask;
use anyhow::{Context, Result};
use iced::window;
use state::GuiApp;
use std::sync::OnceLock;

// `Position::SpecificWith` takes a plain fn, so the configured placement is
// parked here before the window opens.
static PLACEMENT: OnceLock<Placement> = OnceLock::new();

pub fn run(config: Config, tasks: Vec<TodoTask>) -> Result<()> {
    let palette = config
        .theme
        .palette()
        .map_err(anyhow::Error::msg)
        .context("resolving theme")?;
    park_placement(config.window.placement);
    let settings = window_settings(&config.window);

    iced::application("", update::update, view::view)
        .subscription(subscription::subscription)
        .window(settings)
        .run_with(move || GuiApp::new(&config, palette, tasks))
        .context("running window")?;
    Ok(())
}

/// Returns false when a placement was already parked; the first one stays.
fn park_placement(placement: Placement) -> bool {
    match PLACEMENT.set(placement) {
        Ok(()) => true,
        Err(ignored) => {
            log::warn!(
                "initial placement already set, ignoring {:?} (keeping {:?})",
                ignored,
                PLACEMENT.get()
            );
            false
        }
    }
}

fn window_settings(config: &WindowConfig) -> window::Settings {
    window::Settings {
        size: iced::Size::new(config.width, config.height),
        position: window::Position::SpecificWith(initial_position),
        resizable: false,
        decorations: false,
        level: if config.always_on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        },
        ..window::Settings::default()
    }
}

fn initial_position(window: iced::Size, monitor: iced::Size) -> iced::Point {
    let placement = PLACEMENT.get().copied().unwrap_or_default();
    let origin = placement.origin(
        Size::new(window.width, window.height),
        Size::new(monitor.width, monitor.height),
    );
    iced::Point::new(origin.x, origin.y)
}
