//! In-memory document tree.

use super::Dom;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handle to an element of a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemoryNode(usize);

const BODY: usize = 0;

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    removals: usize,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<NodeData>,
    pending_frame: Vec<(usize, String, String)>,
}

/// A document kept in memory, with a `<body>` root.
///
/// Clones share the same tree.
#[derive(Clone, Debug)]
pub struct MemoryDom {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..NodeData::default()
        };
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![body],
                pending_frame: Vec::new(),
            })),
        }
    }

    pub fn body(&self) -> MemoryNode {
        MemoryNode(BODY)
    }

    /// Applies styles queued by [`Dom::set_style_next_frame`].
    pub fn flush_frame(&self) {
        let mut tree = self.tree.borrow_mut();
        let pending = std::mem::take(&mut tree.pending_frame);
        for (index, property, value) in pending {
            tree.nodes[index].styles.insert(property, value);
        }
    }

    pub fn tag(&self, node: &MemoryNode) -> String {
        self.tree.borrow().nodes[node.0].tag.clone()
    }

    pub fn id(&self, node: &MemoryNode) -> String {
        self.tree.borrow().nodes[node.0].id.clone()
    }

    pub fn class_name(&self, node: &MemoryNode) -> String {
        self.tree.borrow().nodes[node.0].classes.join(" ")
    }

    pub fn attribute(&self, node: &MemoryNode, name: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    pub fn style(&self, node: &MemoryNode, property: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub fn text(&self, node: &MemoryNode) -> String {
        self.tree.borrow().nodes[node.0].text.clone()
    }

    /// Text of `node` and all its descendants, in document order.
    pub fn text_content(&self, node: &MemoryNode) -> String {
        let tree = self.tree.borrow();
        let mut out = String::new();
        collect_text(&tree, node.0, &mut out);
        out
    }

    pub fn children(&self, node: &MemoryNode) -> Vec<MemoryNode> {
        self.tree.borrow().nodes[node.0]
            .children
            .iter()
            .map(|&i| MemoryNode(i))
            .collect()
    }

    pub fn parent(&self, node: &MemoryNode) -> Option<MemoryNode> {
        self.tree.borrow().nodes[node.0].parent.map(MemoryNode)
    }

    /// Connected element with the given id.
    pub fn element_by_id(&self, id: &str) -> Option<MemoryNode> {
        let tree = self.tree.borrow();
        (0..tree.nodes.len())
            .find(|&i| tree.nodes[i].id == id && connected(&tree, i))
            .map(MemoryNode)
    }

    /// How many times [`Dom::remove`] actually detached `node`.
    pub fn removal_count(&self, node: &MemoryNode) -> usize {
        self.tree.borrow().nodes[node.0].removals
    }
}

fn connected(tree: &Tree, mut index: usize) -> bool {
    loop {
        if index == BODY {
            return true;
        }
        match tree.nodes[index].parent {
            Some(parent) => index = parent,
            None => return false,
        }
    }
}

fn collect_text(tree: &Tree, index: usize, out: &mut String) {
    out.push_str(&tree.nodes[index].text);
    for &child in &tree.nodes[index].children {
        collect_text(tree, child, out);
    }
}

fn collect_by_class(tree: &Tree, index: usize, class: &str, out: &mut Vec<MemoryNode>) {
    for &child in &tree.nodes[index].children {
        if tree.nodes[child].classes.iter().any(|c| c == class) {
            out.push(MemoryNode(child));
        }
        collect_by_class(tree, child, class, out);
    }
}

impl Dom for MemoryDom {
    type Node = MemoryNode;

    fn create_element(&self, tag: &str) -> MemoryNode {
        let mut tree = self.tree.borrow_mut();
        tree.nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        MemoryNode(tree.nodes.len() - 1)
    }

    fn append_to_body(&self, node: &MemoryNode) {
        self.append_child(&self.body(), node);
    }

    fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) {
        self.remove(child);
        let mut tree = self.tree.borrow_mut();
        tree.nodes[parent.0].children.push(child.0);
        tree.nodes[child.0].parent = Some(parent.0);
    }

    fn remove(&self, node: &MemoryNode) {
        let mut tree = self.tree.borrow_mut();
        let Some(parent) = tree.nodes[node.0].parent.take() else {
            return;
        };
        tree.nodes[parent].children.retain(|&c| c != node.0);
        tree.nodes[node.0].removals += 1;
    }

    fn is_connected(&self, node: &MemoryNode) -> bool {
        connected(&self.tree.borrow(), node.0)
    }

    fn has_parent(&self, node: &MemoryNode) -> bool {
        self.tree.borrow().nodes[node.0].parent.is_some()
    }

    fn child_count(&self, node: &MemoryNode) -> usize {
        self.tree.borrow().nodes[node.0].children.len()
    }

    fn set_id(&self, node: &MemoryNode, id: &str) {
        self.tree.borrow_mut().nodes[node.0].id = id.to_string();
    }

    fn set_class_name(&self, node: &MemoryNode, class_name: &str) {
        self.tree.borrow_mut().nodes[node.0].classes =
            class_name.split_whitespace().map(str::to_string).collect();
    }

    fn add_class(&self, node: &MemoryNode, class: &str) {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &MemoryNode, class: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, node: &MemoryNode, class: &str) -> bool {
        self.tree.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn class_names(&self, node: &MemoryNode) -> Vec<String> {
        self.tree.borrow().nodes[node.0].classes.clone()
    }

    fn set_attribute(&self, node: &MemoryNode, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_text(&self, node: &MemoryNode, text: &str) {
        self.tree.borrow_mut().nodes[node.0].text = text.to_string();
    }

    fn set_style(&self, node: &MemoryNode, property: &str, value: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_style_next_frame(&self, node: &MemoryNode, property: &str, value: &str) {
        self.tree
            .borrow_mut()
            .pending_frame
            .push((node.0, property.to_string(), value.to_string()));
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryNode> {
        let tree = self.tree.borrow();
        let mut out = Vec::new();
        collect_by_class(&tree, BODY, class, &mut out);
        out
    }
}
