//! Document surface used by the notification center and the page switcher.
//!
//! Only the handful of operations those components need are exposed. The browser
//! implementation ([`WebDom`], wasm32 only) forwards to `web-sys`; [`MemoryDom`]
//! keeps an in-memory tree for tests and headless hosts.

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{MemoryDom, MemoryNode};
#[cfg(target_arch = "wasm32")]
pub use web::WebDom;

/// Minimal DOM operations.
///
/// Handles are cheap to clone and compare by identity. Every method takes
/// `&self`; implementations use the document's own interior mutability.
pub trait Dom: Clone {
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// Creates a detached element.
    fn create_element(&self, tag: &str) -> Self::Node;

    /// Appends `node` to the document body.
    fn append_to_body(&self, node: &Self::Node);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Detaches `node` from its parent. No-op when already detached.
    fn remove(&self, node: &Self::Node);

    /// Returns true when `node` is part of the live document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Returns true when `node` has a parent element.
    fn has_parent(&self, node: &Self::Node) -> bool;

    /// Number of element children of `node`.
    fn child_count(&self, node: &Self::Node) -> usize;

    fn set_id(&self, node: &Self::Node, id: &str);
    fn set_class_name(&self, node: &Self::Node, class_name: &str);
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn class_names(&self, node: &Self::Node) -> Vec<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Applies a style on the next animation frame, so a transition starts from
    /// the values set in the current frame.
    fn set_style_next_frame(&self, node: &Self::Node, property: &str, value: &str);

    /// All connected elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
}

/// Logs a mutation the document rejected and hands back the success value.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn warn_on_error<T, E: std::fmt::Debug>(result: Result<T, E>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Failed to {}: {:?}", action, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_on_error_passes_success_through() {
        assert_eq!(warn_on_error(Ok::<_, String>(3), "count"), Some(3));
    }

    #[test]
    fn test_warn_on_error_swallows_rejection() {
        let rejected: Result<(), String> = Err("SyntaxError: invalid token".to_string());
        assert_eq!(warn_on_error(rejected, "add class"), None);
    }
}
