//! Integration tests for the view registry and its overlays (no host engine required).

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use vista_test_utils::fixture::{self, names};
use vista_test_utils::{RecordingTarget, TargetCall};
use vista_ui::style;
use vista_ui::{
    ClickBinder, DialogCallback, DialogMode, ElementId, ElementTree, FloatingTextState,
    HandleStatus, RenderTarget, TransitionStyle, UiEvent, ViewDescriptor, ViewManager, Viewable,
};

const VIEWS: &[&str] = &["MainMenu", "Settings", "Hud"];

fn setup() -> (ElementTree, ViewManager) {
    let mut tree = fixture::ui_tree(VIEWS);
    let root = tree.root();
    let mut ui = ViewManager::default();
    ui.setup_views(
        &mut tree,
        root,
        [
            ViewDescriptor::new("MainMenu"),
            ViewDescriptor::new("Settings").transition(TransitionStyle::Fade),
            ViewDescriptor::new("Hud"),
        ],
    )
    .unwrap();
    (tree, ui)
}

fn find(tree: &ElementTree, name: &str) -> ElementId {
    tree.find_descendant(tree.root(), name).unwrap()
}

fn counter() -> (Rc<Cell<u32>>, DialogCallback) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, Box::new(move || c.set(c.get() + 1)))
}

#[test]
fn test_show_then_hide() {
    let (mut tree, mut ui) = setup();

    for name in VIEWS {
        assert!(ui.show_view(&mut tree, name));
        let view = ui.view(name).unwrap();
        assert!(view.is_showing(&tree));
        assert!(!view.is_hidden(&tree));

        assert!(ui.hide_view(&mut tree, name));
        let view = ui.view(name).unwrap();
        assert!(!view.is_showing(&tree));
        assert!(view.is_hidden(&tree));
    }
}

#[test]
fn test_show_twice_stays_shown_and_reruns_hooks() {
    struct Counting(Rc<Cell<u32>>);
    impl Viewable for Counting {
        fn on_shown(&mut self, _: &mut dyn RenderTarget, _: ElementId) {
            self.0.set(self.0.get() + 1);
        }
    }

    let mut tree = fixture::ui_tree(&["Inventory"]);
    let root = tree.root();
    let shown = Rc::new(Cell::new(0));
    let mut ui = ViewManager::default();
    ui.setup_views(
        &mut tree,
        root,
        [ViewDescriptor::new("Inventory").behavior(Counting(shown.clone()))],
    )
    .unwrap();

    ui.show_view(&mut tree, "Inventory");
    ui.show_view(&mut tree, "Inventory");

    assert!(ui.is_view_showing(&tree, "Inventory"));
    assert_eq!(shown.get(), 2);
}

#[test]
fn test_repeated_fade_show_restarts_fade() {
    let (tree, mut ui) = setup();
    let settings = find(&tree, "Settings");
    let mut target = RecordingTarget::new(tree);

    ui.show_view(&mut target, "Settings");
    ui.update(&mut target, Duration::from_millis(100));
    target.clear_calls();

    ui.show_view(&mut target, "Settings");
    assert!(
        target
            .calls()
            .contains(&TargetCall::SetOpacity { element: settings, opacity: 0.0 })
    );
}

#[test]
fn test_show_order_displays_before_fade_class() {
    let (tree, mut ui) = setup();
    let settings = find(&tree, "Settings");
    let mut target = RecordingTarget::new(tree);

    ui.show_view(&mut target, "Settings");

    let calls = target.calls_for(settings);
    let displayed = calls
        .iter()
        .position(|c| matches!(c, TargetCall::SetDisplayed { displayed: true, .. }))
        .unwrap();
    let faded = calls
        .iter()
        .position(|c| matches!(c, TargetCall::AddClass { class, .. } if class == style::FADE_IN))
        .unwrap();
    assert!(displayed < faded);
}

#[test]
fn test_missing_view_is_noop() {
    let (mut tree, mut ui) = setup();
    ui.show_view(&mut tree, "Hud");
    let before: Vec<bool> = VIEWS.iter().map(|v| ui.is_view_showing(&tree, v)).collect();

    assert!(!ui.show_view(&mut tree, "missing"));
    assert!(!ui.hide_view(&mut tree, "missing"));

    let after: Vec<bool> = VIEWS.iter().map(|v| ui.is_view_showing(&tree, v)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_show_view_before_setup_is_noop() {
    let mut tree = fixture::ui_tree(VIEWS);
    let mut ui = ViewManager::default();

    assert!(!ui.show_view(&mut tree, "MainMenu"));
    assert!(!tree.is_displayed(find(&tree, "MainMenu")));
}

#[test]
fn test_views_keep_registration_order() {
    let (_, ui) = setup();
    assert_eq!(ui.view_names().collect::<Vec<_>>(), VIEWS.to_vec());
}

#[test]
fn test_floating_text_second_request_dropped() {
    let (tree, mut ui) = setup();
    let container = find(&tree, names::FLOATING_TEXT);
    let label = find(&tree, names::FLOATING_TEXT_LABEL);
    let mut target = RecordingTarget::new(tree);

    assert!(ui.show_floating_text(&mut target, "a"));
    assert!(!ui.show_floating_text(&mut target, "b"));
    assert_eq!(target.inner().text(label), Some("a"));
    assert_eq!(ui.floating_text_message(), Some("a"));

    ui.update(&mut target, Duration::from_secs(3));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Idle));

    // One show and one hide of the container: a single auto-hide sequence.
    assert_eq!(target.count_display_changes(container), 2);
}

#[test]
fn test_floating_text_timing() {
    let (mut tree, mut ui) = setup();
    let container = find(&tree, names::FLOATING_TEXT);

    ui.show_floating_text(&mut tree, "Saved");
    assert!(tree.is_displayed(container));
    assert!(tree.has_class(container, style::VISIBLE));

    ui.update(&mut tree, Duration::from_millis(999));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Showing));

    ui.update(&mut tree, Duration::from_millis(1));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::FadingOut));
    assert!(tree.has_class(container, style::FADE_OUT));
    assert!(!tree.has_class(container, style::VISIBLE));
    assert!(tree.is_displayed(container));

    // Still busy during the fade.
    assert!(!ui.show_floating_text(&mut tree, "Ignored"));

    ui.update(&mut tree, Duration::from_millis(499));
    assert!(tree.is_displayed(container));

    ui.update(&mut tree, Duration::from_millis(1));
    assert!(!tree.is_displayed(container));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Idle));
    assert_eq!(ui.pending_timers(), 0);

    // Idle again, so a new toast goes through.
    assert!(ui.show_floating_text(&mut tree, "Loaded"));
}

#[test]
fn test_floating_text_single_long_frame() {
    let (mut tree, mut ui) = setup();
    let container = find(&tree, names::FLOATING_TEXT);

    ui.show_floating_text(&mut tree, "Saved");
    ui.update(&mut tree, Duration::from_millis(1500));

    assert!(!tree.is_displayed(container));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Idle));
}

#[test]
fn test_dialog_ok_fires_once() {
    let (mut tree, mut ui) = setup();
    let ok = find(&tree, names::OK_BUTTON);
    let (count, cb) = counter();

    assert!(ui.show_dialog_box(&mut tree, DialogMode::Ok, "T", "M", Some(cb), None));
    assert!(ui.is_dialog_visible(&tree));
    assert_eq!(ui.dialog_mode(), Some(DialogMode::Ok));

    assert_eq!(ui.handle_event(&mut tree, UiEvent::Click(ok)), HandleStatus::Consumed);
    assert_eq!(count.get(), 1);
    assert!(!ui.is_dialog_visible(&tree));

    assert_eq!(ui.handle_event(&mut tree, UiEvent::Click(ok)), HandleStatus::Ignored);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_dialog_no_fires_negative_only() {
    let (mut tree, mut ui) = setup();
    let yes = find(&tree, names::YES_BUTTON);
    let no = find(&tree, names::NO_BUTTON);
    let ok = find(&tree, names::OK_BUTTON);
    let (positive, pos_cb) = counter();
    let (negative, neg_cb) = counter();

    ui.show_dialog_box(
        &mut tree,
        DialogMode::YesNo,
        "Quit?",
        "Unsaved progress",
        Some(pos_cb),
        Some(neg_cb),
    );
    assert!(tree.is_displayed(yes));
    assert!(tree.is_displayed(no));
    assert!(!tree.is_displayed(ok));

    ui.handle_event(&mut tree, UiEvent::Click(no));
    ui.handle_event(&mut tree, UiEvent::Click(yes));

    assert_eq!(negative.get(), 1);
    assert_eq!(positive.get(), 0);
}

#[test]
fn test_dialog_yes_fires_positive_once() {
    let (mut tree, mut ui) = setup();
    let yes = find(&tree, names::YES_BUTTON);
    let (positive, pos_cb) = counter();
    let (negative, neg_cb) = counter();

    ui.show_dialog_box(
        &mut tree,
        DialogMode::YesNo,
        "Save?",
        "Keep changes",
        Some(pos_cb),
        Some(neg_cb),
    );

    assert!(ui.handle_event(&mut tree, UiEvent::Click(yes)).is_consumed());
    assert!(!ui.is_dialog_visible(&tree));
    assert_eq!(ui.dialog_mode(), None);

    assert_eq!(ui.handle_event(&mut tree, UiEvent::Click(yes)), HandleStatus::Ignored);
    assert_eq!(positive.get(), 1);
    assert_eq!(negative.get(), 0);
}

#[test]
fn test_dialog_reshow_discards_pending_callbacks() {
    let (mut tree, mut ui) = setup();
    let ok = find(&tree, names::OK_BUTTON);
    let (first, first_cb) = counter();
    let (second, second_cb) = counter();

    ui.show_dialog_box(&mut tree, DialogMode::Ok, "One", "M", Some(first_cb), None);
    ui.show_dialog_box(&mut tree, DialogMode::Ok, "Two", "M", Some(second_cb), None);
    assert_eq!(tree.text(find(&tree, names::DIALOG_TITLE)), Some("Two"));

    ui.handle_event(&mut tree, UiEvent::Click(ok));
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[test]
fn test_dialog_callback_dropped_when_replaced() {
    struct DropFlag(Rc<Cell<bool>>);
    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    let (mut tree, mut ui) = setup();
    let dropped = Rc::new(Cell::new(false));
    let flag = DropFlag(dropped.clone());

    ui.show_dialog_box(
        &mut tree,
        DialogMode::Ok,
        "T",
        "M",
        Some(Box::new(move || drop(flag))),
        None,
    );
    assert!(!dropped.get());

    ui.show_dialog_box(&mut tree, DialogMode::YesNo, "T", "M", None, None);
    assert!(dropped.get());
}

#[test]
fn test_dialog_press_feedback_in_any_mode() {
    let (mut tree, mut ui) = setup();
    let yes = find(&tree, names::YES_BUTTON);

    // Dialog is hidden and in no mode at all; feedback still applies.
    assert!(ui.handle_event(&mut tree, UiEvent::PointerDown(yes)).is_consumed());
    assert!(tree.has_class(yes, style::PRESSED));

    ui.handle_event(&mut tree, UiEvent::PointerUp(yes));
    assert!(!tree.has_class(yes, style::PRESSED));
    assert!(tree.has_class(yes, style::RELEASED));
}

#[test]
fn test_circle_loader_toggle() {
    let (mut tree, mut ui) = setup();
    let loader = find(&tree, names::CIRCLE_LOADER);

    assert!(!ui.is_circle_loader_showing());
    ui.show_circle_loader(&mut tree);
    assert!(ui.is_circle_loader_showing());
    assert!(tree.is_displayed(loader));

    ui.hide_circle_loader(&mut tree);
    assert!(!ui.is_circle_loader_showing());
    assert!(!tree.is_displayed(loader));
}

struct PauseMenu {
    resumed: Rc<Cell<u32>>,
    unregistered: Rc<Cell<u32>>,
    close_button: Option<ElementId>,
    log: Rc<RefCell<Vec<String>>>,
}

impl Viewable for PauseMenu {
    fn set_visual_elements(&mut self, target: &dyn RenderTarget, root: ElementId) {
        self.close_button = target.find_descendant(root, "ResumeButton");
    }

    fn register_button_callbacks(&mut self, binder: &mut ClickBinder<'_>) {
        if let Some(button) = self.close_button {
            let resumed = self.resumed.clone();
            binder.on_click(button, move || resumed.set(resumed.get() + 1));
        }
    }

    fn unregister_button_callbacks(&mut self) {
        self.unregistered.set(self.unregistered.get() + 1);
    }

    fn on_showing(&mut self, _: &mut dyn RenderTarget, _: ElementId) {
        self.log.borrow_mut().push("showing".into());
    }

    fn on_hidden(&mut self, _: &mut dyn RenderTarget, _: ElementId) {
        self.log.borrow_mut().push("hidden".into());
    }
}

fn pause_menu_setup() -> (ElementTree, ViewManager, Rc<Cell<u32>>, Rc<Cell<u32>>, ElementId) {
    let mut tree = fixture::ui_tree(&["PauseMenu"]);
    let root = tree.root();
    let menu = find(&tree, "PauseMenu");
    let resume = tree.add_child(menu, "ResumeButton").unwrap();

    let resumed = Rc::new(Cell::new(0));
    let unregistered = Rc::new(Cell::new(0));
    let mut ui = ViewManager::default();
    ui.setup_views(
        &mut tree,
        root,
        [ViewDescriptor::new("PauseMenu").behavior(PauseMenu {
            resumed: resumed.clone(),
            unregistered: unregistered.clone(),
            close_button: None,
            log: Rc::new(RefCell::new(Vec::new())),
        })],
    )
    .unwrap();
    (tree, ui, resumed, unregistered, resume)
}

#[test]
fn test_view_button_callbacks() {
    let (mut tree, mut ui, resumed, _, resume) = pause_menu_setup();

    assert_eq!(ui.click_subscription_count(), 1);
    assert!(ui.handle_event(&mut tree, UiEvent::Click(resume)).is_consumed());
    assert!(ui.handle_event(&mut tree, UiEvent::Click(resume)).is_consumed());
    assert_eq!(resumed.get(), 2);
}

#[test]
fn test_dispose_all_views() {
    let (mut tree, mut ui, resumed, unregistered, resume) = pause_menu_setup();

    ui.dispose_all_views();
    assert!(ui.view("PauseMenu").is_none());
    assert!(!ui.contains_view("PauseMenu"));
    assert_eq!(ui.view_count(), 0);
    assert_eq!(ui.click_subscription_count(), 0);

    assert_eq!(ui.handle_event(&mut tree, UiEvent::Click(resume)), HandleStatus::Ignored);
    assert_eq!(resumed.get(), 0);

    ui.dispose_all_views();
    assert_eq!(unregistered.get(), 1);
}

#[test]
fn test_teardown_then_setup_again() {
    let (mut tree, mut ui) = setup();
    let root = tree.root();

    ui.show_floating_text(&mut tree, "Bye");
    ui.teardown(&mut tree);
    assert!(!ui.is_initialized());
    assert!(!ui.show_floating_text(&mut tree, "Nobody home"));

    ui.update(&mut tree, Duration::from_secs(2));

    ui.setup_views(&mut tree, root, [ViewDescriptor::new("Hud")]).unwrap();
    assert!(ui.show_view(&mut tree, "Hud"));
    assert!(!ui.contains_view("MainMenu"));
    // The fresh floating text starts hidden and idle.
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Idle));
    assert!(!tree.is_displayed(find(&tree, names::FLOATING_TEXT)));
}

#[test]
fn test_overlays_optional() {
    let mut tree = fixture::bare_tree(&["Hud"]);
    let root = tree.root();
    let mut ui = ViewManager::default();
    ui.setup_views(&mut tree, root, [ViewDescriptor::new("Hud")]).unwrap();

    assert!(!ui.show_floating_text(&mut tree, "x"));
    assert!(!ui.show_dialog_box(&mut tree, DialogMode::Ok, "T", "M", None, None));
    ui.show_circle_loader(&mut tree);
    assert!(!ui.is_circle_loader_showing());
    assert_eq!(ui.floating_text_state(), None);
}

#[test]
fn test_setup_again_after_dispose_all_views() {
    let (mut tree, mut ui) = setup();
    let root = tree.root();

    ui.show_floating_text(&mut tree, "Leaving");
    ui.dispose_all_views();
    assert!(!ui.is_initialized());

    ui.setup_views(&mut tree, root, [ViewDescriptor::new("Hud")]).unwrap();
    assert!(ui.is_initialized());
    assert_eq!(ui.view_names().collect::<Vec<_>>(), vec!["Hud"]);
    assert_eq!(ui.pending_timers(), 0);

    // Rebinding leaves the toast idle, so a new one is accepted and runs its own schedule.
    assert!(ui.show_floating_text(&mut tree, "Back"));
    ui.update(&mut tree, Duration::from_millis(1500));
    assert_eq!(ui.floating_text_state(), Some(FloatingTextState::Idle));
}

#[test]
fn test_teardown_hides_overlays() {
    let (mut tree, mut ui) = setup();
    let toast = find(&tree, names::FLOATING_TEXT);
    let dialog = find(&tree, names::DIALOG_BOX);
    let loader = find(&tree, names::CIRCLE_LOADER);
    let (count, cb) = counter();

    ui.show_floating_text(&mut tree, "Saving");
    ui.show_dialog_box(&mut tree, DialogMode::Ok, "T", "M", Some(cb), None);
    ui.show_circle_loader(&mut tree);
    ui.teardown(&mut tree);

    assert!(!tree.is_displayed(toast));
    assert!(!tree.is_displayed(dialog));
    assert!(!tree.is_displayed(loader));
    assert_eq!(count.get(), 0);
}
