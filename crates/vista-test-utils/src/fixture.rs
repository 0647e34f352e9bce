//! Element tree fixtures.

use vista_ui::ElementTree;

/// Element names used by [`ui_tree`], matching the default `OverlayNames`.
pub mod names {
    pub const ROOT: &str = "Root";
    pub const FLOATING_TEXT: &str = "FloatingText";
    pub const FLOATING_TEXT_LABEL: &str = "FloatingTextLabel";
    pub const DIALOG_BOX: &str = "DialogBox";
    pub const DIALOG_TITLE: &str = "DialogTitle";
    pub const DIALOG_MESSAGE: &str = "DialogMessage";
    pub const OK_BUTTON: &str = "OkButton";
    pub const YES_BUTTON: &str = "YesButton";
    pub const NO_BUTTON: &str = "NoButton";
    pub const CIRCLE_LOADER: &str = "CircleLoader";
}

/// Build a tree with one hidden region per view name plus all overlay elements.
///
/// ```text
/// Root
/// ├── <view>...          (hidden)
/// ├── FloatingText
/// │   └── FloatingTextLabel
/// ├── DialogBox
/// │   ├── DialogTitle
/// │   ├── DialogMessage
/// │   └── Buttons
/// │       ├── OkButton
/// │       ├── YesButton
/// │       └── NoButton
/// └── CircleLoader
/// ```
pub fn ui_tree(views: &[&str]) -> ElementTree {
    let mut tree = bare_tree(views);
    let root = tree.root();

    let toast = add(&mut tree, root, names::FLOATING_TEXT);
    add(&mut tree, toast, names::FLOATING_TEXT_LABEL);

    let dialog = add(&mut tree, root, names::DIALOG_BOX);
    add(&mut tree, dialog, names::DIALOG_TITLE);
    add(&mut tree, dialog, names::DIALOG_MESSAGE);
    let buttons = add(&mut tree, dialog, "Buttons");
    add(&mut tree, buttons, names::OK_BUTTON);
    add(&mut tree, buttons, names::YES_BUTTON);
    add(&mut tree, buttons, names::NO_BUTTON);

    add(&mut tree, root, names::CIRCLE_LOADER);
    tree
}

/// Build a tree with only the view regions, no overlays.
pub fn bare_tree(views: &[&str]) -> ElementTree {
    use vista_ui::RenderTarget;

    let mut tree = ElementTree::new(names::ROOT);
    let root = tree.root();
    for view in views {
        let element = add(&mut tree, root, view);
        tree.set_displayed(element, false);
    }
    tree
}

fn add(tree: &mut ElementTree, parent: vista_ui::ElementId, name: &str) -> vista_ui::ElementId {
    match tree.add_child(parent, name) {
        Ok(id) => id,
        Err(e) => panic!("fixture parent must exist: {e}"),
    }
}
