//! Tabs: exclusive `active` label/panel per `.tabs` container.

use tracing::debug;

use crate::core::markers::{
    ACTIVE_CLASS, TAB_CLASS, TAB_PANEL_ATTR, TAB_PANEL_CLASS, TAB_TRIGGER_ATTR, TABS_CLASS,
};
use crate::core::selector::Selector;
use crate::host::{Document, ElementId};

/// Elements activated by a tab switch. Either half may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabSelection {
    /// Activated panel.
    pub panel: Option<ElementId>,
    /// Activated label.
    pub label: Option<ElementId>,
}

/// Switches tabs within a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabController;

impl TabController {
    /// Deactivate every panel and label in `container`, then activate those for `tab_id`.
    pub fn show<D: Document>(self, document: &mut D, container: ElementId, tab_id: &str) -> TabSelection {
        for panel in document.query_all(container, &Selector::Class(TAB_PANEL_CLASS)) {
            document.remove_class(panel, ACTIVE_CLASS);
        }
        for label in document.query_all(container, &Selector::Class(TAB_CLASS)) {
            document.remove_class(label, ACTIVE_CLASS);
        }

        let panel = document.query_first(container, &Selector::AttrEq(TAB_PANEL_ATTR, tab_id));
        if let Some(panel) = panel {
            document.add_class(panel, ACTIVE_CLASS);
        }
        let label = document.query_first(container, &Selector::AttrEq(TAB_TRIGGER_ATTR, tab_id));
        if let Some(label) = label {
            document.add_class(label, ACTIVE_CLASS);
        }
        debug!(
            tab_id,
            panel = panel.is_some(),
            label = label.is_some(),
            "tab selected"
        );
        TabSelection { panel, label }
    }

    /// Handle a click on a `[data-tab]` label inside a `.tabs` container.
    pub fn select_from<D: Document>(self, document: &mut D, trigger: ElementId) -> Option<TabSelection> {
        let tab_id = document.attribute(trigger, TAB_TRIGGER_ATTR)?;
        let container = document.closest(trigger, &Selector::Class(TABS_CLASS))?;
        Some(self.show(document, container, &tab_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{ElementSpec, MemoryDocument, element};

    fn tabs(prefix: &str) -> ElementSpec {
        element("div").class("tabs").id(prefix).children([
            element("button")
                .class("tab")
                .class("active")
                .id(&format!("{prefix}-label-a"))
                .attr("data-tab", "a"),
            element("button")
                .class("tab")
                .id(&format!("{prefix}-label-b"))
                .attr("data-tab", "b"),
            element("section")
                .class("tab-content")
                .class("active")
                .id(&format!("{prefix}-panel-a"))
                .attr("data-tab-content", "a"),
            element("section")
                .class("tab-content")
                .id(&format!("{prefix}-panel-b"))
                .attr("data-tab-content", "b"),
        ])
    }

    fn active_in(document: &MemoryDocument, container: ElementId) -> Vec<String> {
        document
            .query_all(container, &Selector::Class("active"))
            .into_iter()
            .filter_map(|id| document.attribute(id, "id"))
            .collect()
    }

    #[test]
    fn switching_activates_exactly_one_label_and_panel() {
        let mut document = MemoryDocument::new();
        let container = document.mount_in_body(tabs("one"));
        let selection = TabController.show(&mut document, container, "b");
        assert!(selection.panel.is_some() && selection.label.is_some());
        assert_eq!(active_in(&document, container), vec!["one-label-b", "one-panel-b"]);
    }

    #[test]
    fn containers_are_independent() {
        let mut document = MemoryDocument::new();
        let one = document.mount_in_body(tabs("one"));
        let two = document.mount_in_body(tabs("two"));
        TabController.show(&mut document, one, "b");
        assert_eq!(active_in(&document, two), vec!["two-label-a", "two-panel-a"]);
    }

    #[test]
    fn label_without_panel_is_partially_activated() {
        let mut document = MemoryDocument::new();
        let container = document.mount_in_body(
            tabs("one").child(element("button").class("tab").id("orphan").attr("data-tab", "c")),
        );
        let orphan = document.element_by_id("orphan").expect("orphan");
        let selection = TabController.select_from(&mut document, orphan).expect("selection");
        assert_eq!(selection.panel, None);
        assert_eq!(selection.label, Some(orphan));
        assert_eq!(active_in(&document, container), vec!["orphan"]);
    }

    #[test]
    fn label_outside_container_is_ignored() {
        let mut document = MemoryDocument::new();
        let stray = document.mount_in_body(element("button").attr("data-tab", "a"));
        assert_eq!(TabController.select_from(&mut document, stray), None);
    }
}
