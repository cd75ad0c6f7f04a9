use std::fs;
use std::time::{Duration, Instant};
use tasklet::action::Action;
use tasklet::config::Config;
use tasklet::controller::TaskListController;
use tasklet::geometry::Point;
use tasklet::menu::MenuItem;
use tasklet::model::Task;

fn controller(tasks: &[&str]) -> TaskListController {
    TaskListController::new(&Config::default())
        .with_tasks(tasks.iter().map(|t| Task::new(*t)).collect())
}

fn texts(c: &TaskListController) -> Vec<String> {
    c.tasks().iter().map(|t| t.as_str().to_string()).collect()
}

fn row_center(c: &TaskListController, index: usize) -> Point {
    let bbox = c.row_layout().bbox(index);
    Point::new(bbox.width / 2.0, bbox.y + bbox.height / 2.0)
}

fn click(c: &mut TaskListController, at: Point, now: Instant) -> Vec<Action> {
    c.cursor_moved(at);
    let mut actions = c.left_pressed(now);
    actions.extend(c.left_released());
    actions
}

#[test]
fn add_buy_milk() {
    let mut c = controller(&[]);
    c.set_input("buy milk".to_string());
    assert!(c.submit());
    assert_eq!(texts(&c), ["buy milk"]);
    assert_eq!(c.tasks().get(0).map(Task::as_str), Some("buy milk"));
    assert_eq!(c.input(), "");
}

#[test]
fn add_empty_leaves_list_alone() {
    let mut c = controller(&["x"]);
    c.set_input(String::new());
    assert!(!c.submit());
    assert_eq!(texts(&c), ["x"]);
}

#[test]
fn toggle_buy_milk_twice() {
    let mut c = controller(&["buy milk"]);
    let at = row_center(&c, 0);
    let t0 = Instant::now();

    click(&mut c, at, t0);
    assert_eq!(texts(&c), ["✓ buy milk"]);

    // far enough apart not to count as a double click
    click(&mut c, at, t0 + Duration::from_secs(1));
    assert_eq!(texts(&c), ["buy milk"]);
}

#[test]
fn delete_middle_row_and_ignore_trailing_release() {
    let mut c = controller(&["a", "b", "c"]);
    let at = row_center(&c, 1);
    let t0 = Instant::now();

    // first click of the double click toggles "b", the second deletes it
    click(&mut c, at, t0);
    let actions = c.left_pressed(t0 + Duration::from_millis(120));
    assert_eq!(texts(&c), ["a", "c"]);
    assert!(matches!(
        actions.as_slice(),
        [Action::ScheduleRearm { delay, .. }] if *delay == Duration::from_millis(100)
    ));

    // release and a quick single click within the debounce window: no toggle
    assert!(c.left_released().is_empty());
    assert!(click(&mut c, at, t0 + Duration::from_millis(150)).is_empty());
    assert_eq!(texts(&c), ["a", "c"]);
}

#[test]
fn delete_on_empty_list_is_noop() {
    let mut c = controller(&[]);
    let at = Point::new(10.0, 40.0);
    let t0 = Instant::now();
    click(&mut c, at, t0);
    assert!(c.left_pressed(t0 + Duration::from_millis(50)).is_empty());
    assert!(c.tasks().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");

    let saver = controller(&["a", "✓ b"]);
    saver.save_to(&path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n✓ b\n");

    let mut loader = controller(&["something else"]);
    loader.load_from(&path);
    assert_eq!(texts(&loader), ["a", "✓ b"]);
}

#[test]
fn failed_save_is_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.txt");
    let c = controller(&["a"]);
    c.save_to(&path);
    assert!(!path.exists());
    assert_eq!(texts(&c), ["a"]);
}

#[test]
fn failed_load_leaves_list_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.txt");
    fs::write(&path, [b'o', b'k', b'\n', 0xc3, 0x28]).unwrap();

    let mut c = controller(&["keep", "these"]);
    c.load_from(&path);
    assert_eq!(texts(&c), ["keep", "these"]);
}

#[test]
fn menu_drives_prompts_and_exit() {
    let mut c = controller(&["a"]);
    c.cursor_moved(row_center(&c, 0));
    c.right_pressed();
    assert!(c.menu_anchor().is_some());
    assert_eq!(c.menu_selected(MenuItem::Load), vec![Action::PromptLoad]);

    c.right_pressed();
    assert_eq!(c.menu_selected(MenuItem::Exit), vec![Action::Quit]);
    assert!(c.menu_anchor().is_none());
}
