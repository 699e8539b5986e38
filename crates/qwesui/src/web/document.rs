//! [`Document`] over the live DOM.
//!
//! # Design
//! - Elements get handles lazily. A `WeakMap` keyed by the element stores its handle so
//!   the same node always resolves to the same [`ElementId`].
//! - The reverse table holds strong references. Each library removal (toasts, tooltips)
//!   prunes every entry whose element has left the document: the removed subtree, plus
//!   anything the page detached on its own. A pruned element seen again gets a new handle.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::WeakMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::core::geometry::Rect;
use crate::core::selector::Selector;
use crate::host::{Document, ElementId};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug)]
struct Registry {
    handles: WeakMap,
    elements: HashMap<ElementId, Element>,
    next: u64,
}

/// The browser document behind element handles.
#[derive(Debug)]
pub struct WebDocument {
    document: web_sys::Document,
    registry: RefCell<Registry>,
}

impl WebDocument {
    /// Wrap a DOM document.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            registry: RefCell::new(Registry {
                handles: WeakMap::new(),
                elements: HashMap::new(),
                next: 1,
            }),
        }
    }

    /// Handle for `element`, assigning one on first sight.
    pub fn handle(&self, element: &Element) -> ElementId {
        let mut registry = self.registry.borrow_mut();
        let key: &js_sys::Object = element.as_ref();
        if let Some(id) = registry
            .handles
            .get(key)
            .as_string()
            .and_then(|raw| raw.parse().ok())
        {
            return ElementId::from_raw(id);
        }
        let id = ElementId::from_raw(registry.next);
        registry.next += 1;
        registry
            .handles
            .set(key, &JsValue::from_str(&id.raw().to_string()));
        registry.elements.insert(id, element.clone());
        id
    }

    /// Element behind `id`, if the handle is still known.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.registry.borrow().elements.get(&id).cloned()
    }

    /// Number of elements currently holding a handle.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.registry.borrow().elements.len()
    }

    fn prune_detached(&self) {
        let mut registry = self.registry.borrow_mut();
        let Registry {
            handles, elements, ..
        } = &mut *registry;
        elements.retain(|_, element| {
            let connected = element.is_connected();
            if !connected {
                handles.delete(element.as_ref());
            }
            connected
        });
    }

    fn html(&self, id: ElementId) -> Option<HtmlElement> {
        self.element(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn collect(&self, list: &web_sys::NodeList) -> Vec<ElementId> {
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.handle(&element))
            .collect()
    }
}

impl Document for WebDocument {
    fn root(&self) -> Option<ElementId> {
        self.document
            .document_element()
            .map(|element| self.handle(&element))
    }

    fn body(&self) -> Option<ElementId> {
        self.document
            .body()
            .map(|body| self.handle(&Element::from(body)))
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.handle(&element))
    }

    fn matches(&self, element: ElementId, selector: &Selector<'_>) -> bool {
        self.element(element)
            .is_some_and(|element| element.matches(&selector.to_css()).unwrap_or(false))
    }

    fn closest(&self, element: ElementId, selector: &Selector<'_>) -> Option<ElementId> {
        let found = self
            .element(element)?
            .closest(&selector.to_css())
            .ok()
            .flatten()?;
        Some(self.handle(&found))
    }

    fn query_all(&self, scope: ElementId, selector: &Selector<'_>) -> Vec<ElementId> {
        self.element(scope)
            .and_then(|scope| scope.query_selector_all(&selector.to_css()).ok())
            .map(|list| self.collect(&list))
            .unwrap_or_default()
    }

    fn query_first(&self, scope: ElementId, selector: &Selector<'_>) -> Option<ElementId> {
        let found = self
            .element(scope)?
            .query_selector(&selector.to_css())
            .ok()
            .flatten()?;
        Some(self.handle(&found))
    }

    fn query_document(&self, selector: &Selector<'_>) -> Vec<ElementId> {
        self.document
            .query_selector_all(&selector.to_css())
            .map(|list| self.collect(&list))
            .unwrap_or_default()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(element) = self.element(element) {
            element.set_attribute(name, value).ok();
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.element(element)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            element.class_list().add_1(class).ok();
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(element) = self.element(element) {
            element.class_list().remove_1(class).ok();
        }
    }

    fn text_content(&self, element: ElementId) -> String {
        self.element(element)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(element) = self.element(element) {
            element.set_text_content(Some(text));
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(element) = self.html(element) {
            element.style().set_property(property, value).ok();
        }
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        let Some(element) = self.element(element) else {
            return;
        };
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if disabled {
            element.set_attribute("disabled", "").ok();
        } else {
            element.remove_attribute("disabled").ok();
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<ElementId> {
        let element = self.document.create_element(tag).ok()?;
        Some(self.handle(&element))
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if let (Some(parent), Some(child)) = (self.element(parent), self.element(child)) {
            parent.append_child(&child).ok();
        }
    }

    fn remove(&mut self, element: ElementId) {
        if let Some(node) = self.element(element) {
            node.remove();
            self.prune_detached();
        }
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.element(element)
            .is_some_and(|element| element.is_connected())
    }

    fn focus(&mut self, element: ElementId) {
        if let Some(element) = self.html(element) {
            element.focus().ok();
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.element(element).map_or_else(Rect::default, |element| {
            let rect = element.get_bounding_client_rect();
            Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
        })
    }

    fn flush_layout(&mut self, element: ElementId) {
        // Reading a layout property forces style recalculation.
        if let Some(element) = self.html(element) {
            let _ = element.offset_height();
        }
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.document
            .default_view()
            .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }
}
