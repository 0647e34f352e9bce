use crate::element::{ElementId, RenderTarget};
use crate::overlay::OverlayNames;

#[derive(Debug)]
pub(crate) struct CircleLoader {
    element: ElementId,
    is_showing: bool,
}

impl CircleLoader {
    pub(crate) fn bind(
        target: &mut dyn RenderTarget,
        root: ElementId,
        names: &OverlayNames,
    ) -> Option<Self> {
        let element = target.find_descendant(root, &names.circle_loader)?;
        target.set_displayed(element, false);
        Some(Self {
            element,
            is_showing: false,
        })
    }

    #[cfg(test)]
    pub(crate) fn element(&self) -> ElementId {
        self.element
    }

    pub(crate) fn is_showing(&self) -> bool {
        self.is_showing
    }

    pub(crate) fn set_shown(&mut self, target: &mut dyn RenderTarget, shown: bool) {
        target.set_displayed(self.element, shown);
        self.is_showing = shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementTree;

    #[test]
    fn test_toggle() {
        let mut tree = ElementTree::new("Root");
        tree.add_child(tree.root(), "CircleLoader").unwrap();
        let root = tree.root();
        let mut loader = CircleLoader::bind(&mut tree, root, &OverlayNames::default()).unwrap();

        assert!(!loader.is_showing());
        assert!(!tree.is_displayed(loader.element()));

        loader.set_shown(&mut tree, true);
        assert!(loader.is_showing());
        assert!(tree.is_displayed(loader.element()));

        loader.set_shown(&mut tree, false);
        assert!(!loader.is_showing());
        assert!(!tree.is_displayed(loader.element()));
    }
}
