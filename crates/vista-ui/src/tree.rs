//! In-memory element tree.
//!
//! [`ElementTree`] is a minimal retained-mode tree implementing [`RenderTarget`]. Hosts with
//! their own widget tree implement the trait directly; this one is used for tooling, headless
//! runs and tests.

use std::collections::VecDeque;

use indexmap::IndexMap;
use vista_core::alloc::HashSet;

use crate::element::{ElementId, RenderTarget};
use crate::error::ViewError;

/// A node in the element tree.
#[derive(Debug, Clone)]
struct ElementNode {
    name: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    displayed: bool,
    classes: HashSet<String>,
    text: String,
    opacity: f32,
}

impl ElementNode {
    fn new(name: &str, parent: Option<ElementId>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            displayed: true,
            classes: HashSet::new(),
            text: String::new(),
            opacity: 1.0,
        }
    }
}

/// Element tree with named nodes, display flags, style classes, text and opacity.
#[derive(Debug, Clone)]
pub struct ElementTree {
    nodes: IndexMap<ElementId, ElementNode>,
    root: ElementId,
    next_id: usize,
}

impl ElementTree {
    /// Create a tree containing only a root element.
    pub fn new(root_name: &str) -> Self {
        let root = ElementId(0);
        let mut nodes = IndexMap::new();
        nodes.insert(root, ElementNode::new(root_name, None));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Append a named child element. New elements start displayed.
    pub fn add_child(&mut self, parent: ElementId, name: &str) -> Result<ElementId, ViewError> {
        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            return Err(ViewError::UnknownElement { element: parent });
        };

        let id = ElementId(self.next_id);
        self.next_id += 1;
        parent_node.children.push(id);
        self.nodes.insert(id, ElementNode::new(name, Some(parent)));
        Ok(id)
    }

    /// Remove an element and its whole subtree. The root cannot be removed.
    pub fn remove(&mut self, element: ElementId) -> bool {
        if element == self.root || !self.nodes.contains_key(&element) {
            return false;
        }

        if let Some(parent) = self.nodes.get(&element).and_then(|n| n.parent)
            && let Some(parent_node) = self.nodes.get_mut(&parent)
        {
            parent_node.children.retain(|c| *c != element);
        }

        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&id) {
                stack.extend(node.children);
            }
        }
        true
    }

    /// Number of elements, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of an element.
    pub fn name(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element).map(|n| n.name.as_str())
    }

    /// Parent of an element.
    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|n| n.parent)
    }

    /// Children of an element in insertion order.
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(&element)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Text content of an element.
    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element).map(|n| n.text.as_str())
    }

    /// Opacity of an element.
    pub fn opacity(&self, element: ElementId) -> Option<f32> {
        self.nodes.get(&element).map(|n| n.opacity)
    }

    /// Style classes of an element, sorted for stable output.
    pub fn classes(&self, element: ElementId) -> Vec<&str> {
        let mut classes: Vec<&str> = self
            .nodes
            .get(&element)
            .map(|n| n.classes.iter().map(String::as_str).collect())
            .unwrap_or_default();
        classes.sort_unstable();
        classes
    }
}

impl RenderTarget for ElementTree {
    fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    fn find_descendant(&self, parent: ElementId, name: &str) -> Option<ElementId> {
        let mut queue: VecDeque<ElementId> = self.children(parent).iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            let node = self.nodes.get(&id)?;
            if node.name == name {
                return Some(id);
            }
            queue.extend(node.children.iter().copied());
        }
        None
    }

    fn set_displayed(&mut self, element: ElementId, displayed: bool) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.displayed = displayed;
        }
    }

    fn is_displayed(&self, element: ElementId) -> bool {
        self.nodes.get(&element).is_some_and(|n| n.displayed)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.classes.remove(class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes
            .get(&element)
            .is_some_and(|n| n.classes.contains(class))
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.text.clear();
            node.text.push_str(text);
        }
    }

    fn set_opacity(&mut self, element: ElementId, opacity: f32) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.opacity = opacity.clamp(0.0, 1.0);
        }
    }
}
