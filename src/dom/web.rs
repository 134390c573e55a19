//! Browser document backed by `web-sys`.

use super::{Dom, warn_on_error};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement};

/// The page's live `document`.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Returns the current window's document, if running in a page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn create_element(&self, tag: &str) -> Element {
        match self.document.create_element(tag) {
            Ok(element) => element,
            Err(_) => {
                // Only invalid tag names fail; fall back to a plain div.
                tracing::warn!("Failed to create <{}> element", tag);
                self.document
                    .create_element("div")
                    .unwrap_or_else(|_| unreachable!("div is a valid tag name"))
            }
        }
    }

    fn append_to_body(&self, node: &Element) {
        match self.document.body() {
            Some(body) => {
                if body.append_child(node).is_err() {
                    tracing::warn!("Failed to append element to body");
                }
            }
            None => tracing::warn!("Document has no body"),
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if parent.append_child(child).is_err() {
            tracing::warn!("Failed to append child element");
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn has_parent(&self, node: &Element) -> bool {
        node.parent_element().is_some()
    }

    fn child_count(&self, node: &Element) -> usize {
        node.child_element_count() as usize
    }

    fn set_id(&self, node: &Element, id: &str) {
        node.set_id(id);
    }

    fn set_class_name(&self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_error(node.class_list().add_1(class), "add class");
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_error(node.class_list().remove_1(class), "remove class");
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn class_names(&self, node: &Element) -> Vec<String> {
        let list = node.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        warn_on_error(node.set_attribute(name, value), "set attribute");
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            warn_on_error(element.style().set_property(property, value), "set style");
        }
    }

    fn set_style_next_frame(&self, node: &Element, property: &str, value: &str) {
        let Some(window) = web_sys::window() else {
            self.set_style(node, property, value);
            return;
        };

        let dom = self.clone();
        let node = node.clone();
        let property = property.to_string();
        let value = value.to_string();
        let callback = Closure::once_into_js(move || {
            dom.set_style(&node, &property, &value);
        });
        if window
            .request_animation_frame(callback.unchecked_ref())
            .is_err()
        {
            tracing::warn!("requestAnimationFrame unavailable");
        }
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }
}
