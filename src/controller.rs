// File: ./src/controller.rs
// Event handlers for the task list. Each handler mutates state synchronously
// and returns the actions the host window has to carry out.
use crate::action::Action;
use crate::config::{Behavior, Config, LayoutConfig};
use crate::frame::FramelessWindow;
use crate::geometry::{HitMode, Point, RowLayout, Size};
use crate::gesture::{ClickTracker, ToggleGate};
use crate::menu::{ContextMenu, MenuItem};
use crate::model::{Task, TaskList};
use crate::storage;
use std::path::Path;
use std::time::Instant;

/// Part of the window a primary press started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Entry,
    List,
    Menu,
}

pub struct TaskListController {
    tasks: TaskList,
    input: String,
    window: FramelessWindow,
    layout: LayoutConfig,
    behavior: Behavior,
    gate: ToggleGate,
    clicks: ClickTracker,
    menu: ContextMenu,
    press_region: Option<Region>,
}

impl TaskListController {
    pub fn new(config: &Config) -> Self {
        let layout = config.layout.clone();
        let behavior = config.behavior.clone();
        Self {
            tasks: TaskList::new(),
            input: String::new(),
            window: FramelessWindow::new(
                Point::ORIGIN,
                Size::new(config.window.width, config.window.height),
            ),
            clicks: ClickTracker::new(
                behavior.double_click_interval(),
                behavior.double_click_distance,
            ),
            menu: ContextMenu::new(layout.menu_width, layout.menu_item_height),
            gate: ToggleGate::default(),
            press_region: None,
            layout,
            behavior,
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks.replace(tasks);
        self
    }

    // --- QUERIES ---

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn window(&self) -> &FramelessWindow {
        &self.window
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn menu_anchor(&self) -> Option<Point> {
        self.menu.anchor()
    }

    pub fn is_toggle_armed(&self) -> bool {
        self.gate.is_armed()
    }

    pub fn row_layout(&self) -> RowLayout {
        RowLayout {
            top: self.layout.entry_height,
            row_height: self.layout.row_height,
            width: self.window.size().width,
        }
    }

    // --- WINDOW SYSTEM ---

    pub fn window_opened(&mut self, origin: Option<Point>, size: Size) {
        if let Some(origin) = origin {
            self.window.set_origin(origin);
        }
        self.window.set_size(size);
    }

    pub fn window_moved(&mut self, origin: Point) {
        self.window.set_origin(origin);
    }

    pub fn window_resized(&mut self, size: Size) {
        self.window.set_size(size);
    }

    // --- ENTRY ---

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Enter in the entry: prepends the typed text and clears the entry.
    pub fn submit(&mut self) -> bool {
        if !self.tasks.add(&self.input) {
            return false;
        }
        log::debug!("added task '{}'", self.input);
        self.input.clear();
        true
    }

    // --- POINTER ---

    /// `local` is relative to the window.
    pub fn cursor_moved(&mut self, local: Point) -> Vec<Action> {
        match self.window.pointer_moved(local) {
            Some(origin) => vec![Action::MoveWindow(origin)],
            None => vec![],
        }
    }

    pub fn left_pressed(&mut self, now: Instant) -> Vec<Action> {
        let at = self.window.pointer_local();

        if self.menu.is_open() {
            if self.menu.contains(at) {
                // the menu button handles it
                self.press_region = Some(Region::Menu);
                return vec![];
            }
            self.menu.close();
        }

        self.window.press();
        let region = self.region_at(at);
        self.press_region = Some(region);

        if region != Region::List {
            self.clicks.reset();
            return vec![];
        }
        if self.clicks.press(at, now) {
            return self.delete_at(at);
        }
        vec![]
    }

    pub fn left_released(&mut self) -> Vec<Action> {
        let region = self.press_region.take();
        self.window.release();

        // releases are only handled for presses that began over the list
        if region != Some(Region::List) || !self.gate.is_armed() {
            return vec![];
        }
        self.toggle_at(self.window.pointer_local());
        vec![Action::FocusInput]
    }

    pub fn right_pressed(&mut self) -> Vec<Action> {
        let at = self.window.pointer_local();
        if self.region_at(at) == Region::List {
            self.menu.open(at, self.window.size());
        }
        vec![]
    }

    // --- MENU ---

    pub fn menu_selected(&mut self, item: MenuItem) -> Vec<Action> {
        self.menu.close();
        match item {
            MenuItem::Save => vec![Action::PromptSave],
            MenuItem::Load => vec![Action::PromptLoad],
            MenuItem::Exit => self.close(),
        }
    }

    pub fn close(&mut self) -> Vec<Action> {
        log::info!("shutting down");
        vec![Action::Quit]
    }

    // --- TIMERS ---

    pub fn rearm(&mut self, generation: u64) {
        if self.gate.rearm(generation) {
            log::debug!("toggle handling re-armed (generation {})", generation);
        }
    }

    // --- PERSISTENCE ---

    /// Failures are logged; nothing is rolled back.
    pub fn save_to(&self, path: &Path) {
        match storage::save(path, self.tasks.as_slice()) {
            Ok(()) => log::info!("saved {} tasks to {}", self.tasks.len(), path.display()),
            Err(e) => log::error!("Error saving tasks: {}", e),
        }
    }

    /// The list is only replaced after the whole file was read.
    pub fn load_from(&mut self, path: &Path) {
        match storage::load(path) {
            Ok(tasks) => {
                log::info!("loaded {} tasks from {}", tasks.len(), path.display());
                self.tasks.replace(tasks);
            }
            Err(e) => log::error!("Error loading tasks: {}", e),
        }
    }

    // --- HELPERS ---

    fn region_at(&self, at: Point) -> Region {
        if self.menu.contains(at) {
            Region::Menu
        } else if at.y >= self.layout.entry_height {
            Region::List
        } else {
            Region::Entry
        }
    }

    fn toggle_at(&mut self, at: Point) -> bool {
        let layout = self.row_layout();
        let Some(index) = layout.nearest(at.y, self.tasks.len()) else {
            return false;
        };
        if !layout.bbox(index).contains(at, HitMode::VerticalOnly) {
            return false;
        }
        // the tail of a drag is not a click
        if self.window.has_cursor_moved() {
            return false;
        }
        self.tasks.toggle(index)
    }

    fn delete_at(&mut self, at: Point) -> Vec<Action> {
        let layout = self.row_layout();
        let Some(index) = layout.nearest(at.y, self.tasks.len()) else {
            return vec![];
        };
        if layout.bbox(index).is_degenerate() {
            return vec![];
        }
        let Some(task) = self.tasks.remove(index) else {
            return vec![];
        };
        log::debug!("deleted task {} '{}'", index, task);

        let generation = self.gate.suspend();
        vec![Action::ScheduleRearm {
            generation,
            delay: self.behavior.rearm_delay(),
        }]
    }
}
