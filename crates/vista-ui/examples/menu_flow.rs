//! Menu flow example - a scripted session driving the view manager headlessly.
//!
//! Builds a small element tree, registers a main menu and a settings screen, then plays
//! through a few frames of clicks, a toast and a confirmation dialog.
//!
//! Run with `RUST_LOG=trace cargo run -p vista-ui --example menu_flow` for every step.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use vista_core::logging;
use vista_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use vista_ui::{
    ClickBinder, DialogMode, ElementId, ElementTree, RenderTarget, TabGroup, TransitionStyle,
    UiEvent, ViewDescriptor, ViewError, ViewManager, Viewable,
};

const FRAME: Duration = Duration::from_millis(16);

/// Main menu with a play button that counts presses.
struct MainMenu {
    plays: Rc<Cell<u32>>,
}

impl Viewable for MainMenu {
    fn register_button_callbacks(&mut self, binder: &mut ClickBinder<'_>) {
        let plays = self.plays.clone();
        binder.on_named_click("PlayButton", move || {
            plays.set(plays.get() + 1);
            tracing::info!("Play pressed ({} times)", plays.get());
        });
    }

    fn on_shown(&mut self, _: &mut dyn RenderTarget, _: ElementId) {
        tracing::info!("Main menu up");
    }
}

fn build_tree() -> Result<ElementTree, ViewError> {
    let mut tree = ElementTree::new("Root");
    let root = tree.root();

    let menu = tree.add_child(root, "MainMenu")?;
    tree.add_child(menu, "PlayButton")?;

    let settings = tree.add_child(root, "Settings")?;
    for name in ["AudioTab", "VideoTab", "AudioPage", "VideoPage"] {
        tree.add_child(settings, name)?;
    }

    let toast = tree.add_child(root, "FloatingText")?;
    tree.add_child(toast, "FloatingTextLabel")?;

    let dialog = tree.add_child(root, "DialogBox")?;
    for name in ["DialogTitle", "DialogMessage", "OkButton", "YesButton", "NoButton"] {
        tree.add_child(dialog, name)?;
    }
    tree.add_child(root, "CircleLoader")?;
    Ok(tree)
}

fn run_frames(ui: &mut ViewManager, tree: &mut ElementTree, frames: u32) {
    for _ in 0..frames {
        new_frame();
        ui.update(tree, FRAME);
    }
}

fn main() -> Result<(), ViewError> {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let mut tree = build_tree()?;
    let root = tree.root();
    let plays = Rc::new(Cell::new(0));

    let mut ui = ViewManager::default();
    ui.setup_views(
        &mut tree,
        root,
        [
            ViewDescriptor::new("MainMenu").behavior(MainMenu {
                plays: plays.clone(),
            }),
            ViewDescriptor::new("Settings").transition(TransitionStyle::Fade),
        ],
    )?;

    let settings = ui.view("Settings").map(|v| v.element()).unwrap_or(root);
    let mut tabs = TabGroup::bind(
        &mut tree,
        settings,
        &[("AudioTab", "AudioPage"), ("VideoTab", "VideoPage")],
    )?;

    ui.show_view(&mut tree, "MainMenu");
    let play = tree.find_descendant(root, "PlayButton");
    if let Some(play) = play {
        ui.handle_event(&mut tree, UiEvent::Click(play));
    }

    ui.show_circle_loader(&mut tree);
    run_frames(&mut ui, &mut tree, 10);
    ui.hide_circle_loader(&mut tree);

    ui.hide_view(&mut tree, "MainMenu");
    ui.show_view(&mut tree, "Settings");
    if let Some(video) = tree.find_descendant(settings, "VideoTab") {
        tabs.handle_event(&mut tree, UiEvent::Click(video));
    }
    tracing::info!("Settings tab {:?} selected", tabs.selected());

    ui.show_floating_text(&mut tree, "Settings saved");
    // Dropped: the first toast is still on screen.
    ui.show_floating_text(&mut tree, "Settings saved twice");
    run_frames(&mut ui, &mut tree, 100);
    tracing::info!("Toast state after 1.6s: {:?}", ui.floating_text_state());

    let quit = Rc::new(Cell::new(false));
    let on_yes = quit.clone();
    ui.show_dialog_box(
        &mut tree,
        DialogMode::YesNo,
        "Quit",
        "Return to desktop?",
        Some(Box::new(move || on_yes.set(true))),
        None,
    );
    if let Some(yes) = tree.find_descendant(root, "YesButton") {
        ui.handle_event(&mut tree, UiEvent::PointerDown(yes));
        ui.handle_event(&mut tree, UiEvent::PointerUp(yes));
        ui.handle_event(&mut tree, UiEvent::Click(yes));
    }

    tracing::info!(
        "Session over: {} plays, quit confirmed: {}",
        plays.get(),
        quit.get()
    );
    ui.teardown(&mut tree);
    Ok(())
}
