//! Single-page navigation: exactly one `.page` section carries `active`.

use crate::dom::Dom;

/// Class shared by every page section.
pub const PAGE_CLASS: &str = "page";

/// Class marking the visible section.
pub const ACTIVE_CLASS: &str = "active";

/// Page shown on startup.
pub const INITIAL_PAGE: &str = "landing";

/// Toggles which page section is visible.
#[derive(Clone, Debug)]
pub struct PageSwitcher<D: Dom> {
    dom: D,
}

impl<D: Dom> PageSwitcher<D> {
    pub fn new(dom: D) -> Self {
        Self { dom }
    }

    /// Deactivates every section, then activates the first one whose class
    /// list contains `name`.
    ///
    /// Returns false when no section matched; every section is then inactive.
    pub fn activate(&self, name: &str) -> bool {
        let sections = self.dom.elements_by_class(PAGE_CLASS);
        for section in &sections {
            self.dom.remove_class(section, ACTIVE_CLASS);
        }

        match sections.iter().find(|s| self.dom.has_class(s, name)) {
            Some(section) => {
                self.dom.add_class(section, ACTIVE_CLASS);
                tracing::trace!("Activated page {}", name);
                true
            }
            None => {
                tracing::trace!("No page section named {}", name);
                false
            }
        }
    }

    /// Shows the landing page.
    pub fn activate_initial(&self) -> bool {
        self.activate(INITIAL_PAGE)
    }

    /// Name of the active section: its first class other than `page` and
    /// `active`.
    pub fn active_page(&self) -> Option<String> {
        let active = self
            .dom
            .elements_by_class(PAGE_CLASS)
            .into_iter()
            .find(|s| self.dom.has_class(s, ACTIVE_CLASS))?;
        self.dom
            .class_names(&active)
            .into_iter()
            .find(|c| c != PAGE_CLASS && c != ACTIVE_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, MemoryNode};

    fn section(dom: &MemoryDom, class_name: &str) -> MemoryNode {
        let node = dom.create_element("section");
        dom.set_class_name(&node, class_name);
        dom.append_to_body(&node);
        node
    }

    fn page() -> (PageSwitcher<MemoryDom>, MemoryDom, [MemoryNode; 3]) {
        let dom = MemoryDom::new();
        let sections = [
            section(&dom, "page landing"),
            section(&dom, "page login"),
            section(&dom, "page dashboard active"),
        ];
        (PageSwitcher::new(dom.clone()), dom, sections)
    }

    fn active(dom: &MemoryDom, sections: &[MemoryNode]) -> Vec<bool> {
        sections.iter().map(|s| dom.has_class(s, ACTIVE_CLASS)).collect()
    }

    #[test]
    fn test_activate_exactly_one() {
        let (pages, dom, sections) = page();
        assert!(pages.activate("login"));
        assert_eq!(active(&dom, &sections), vec![false, true, false]);
        assert_eq!(pages.active_page().as_deref(), Some("login"));
    }

    #[test]
    fn test_initial_page_is_landing() {
        let (pages, dom, sections) = page();
        assert!(pages.activate_initial());
        assert_eq!(active(&dom, &sections), vec![true, false, false]);
        assert_eq!(pages.active_page().as_deref(), Some(INITIAL_PAGE));
    }

    #[test]
    fn test_unknown_page_leaves_all_inactive() {
        let (pages, dom, sections) = page();
        assert!(!pages.activate("settings"));
        assert_eq!(active(&dom, &sections), vec![false, false, false]);
        assert_eq!(pages.active_page(), None);
    }

    #[test]
    fn test_non_page_elements_are_untouched() {
        let (pages, dom, _) = page();
        let banner = section(&dom, "login active");
        pages.activate("landing");
        assert!(dom.has_class(&banner, ACTIVE_CLASS));
        assert_eq!(pages.active_page().as_deref(), Some("landing"));
    }

    #[test]
    fn test_reactivating_is_idempotent() {
        let (pages, dom, sections) = page();
        pages.activate("dashboard");
        pages.activate("dashboard");
        assert_eq!(active(&dom, &sections), vec![false, false, true]);
        assert_eq!(dom.class_name(&sections[2]), "page dashboard active");
    }
}
