//! In-memory host: document tree, preference store and virtual clock.
//!
//! Used by the test suites and by headless hosts that drive the controllers without a
//! browser. Geometry is explicit: elements carry the rectangle they were built with, and
//! anything without one is measured from its text using [`TextMetrics`].

use std::collections::{BTreeMap, HashMap};

use crate::core::geometry::Rect;
use crate::core::selector::{FOCUSABLE_TAGS, Selector};
use crate::host::{Document, ElementId, PreferenceStore, Scheduler, StorageError, TimerId, TimerTask};
use crate::ui::QwesUi;

/// Instance wired to the in-memory host.
pub type MemoryUi = QwesUi<MemoryDocument, MemoryStorage, ManualScheduler>;

/// Fallback measurement for elements without an explicit rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Width of one character.
    pub char_width: f64,
    /// Height of one line.
    pub line_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 18.0,
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    style: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    rect: Option<Rect>,
    disabled: bool,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            style: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
            rect: None,
            disabled: false,
        }
    }

    fn set_class_list(&mut self, value: &str) {
        self.classes.clear();
        for class in value.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == class) {
                self.classes.push(class.to_string());
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            return (!self.classes.is_empty()).then(|| self.classes.join(" "));
        }
        self.attributes.get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Class(class) => self.has_class(class),
            Selector::AllClasses(classes) => classes.iter().all(|class| self.has_class(class)),
            Selector::Attr(name) => self.attribute(name).is_some(),
            Selector::AttrEq(name, value) => self.attribute(name).as_deref() == Some(*value),
            Selector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            Selector::Focusable => {
                FOCUSABLE_TAGS.contains(&self.tag.as_str())
                    || self.attributes.contains_key("href")
                    || self
                        .attributes
                        .get("tabindex")
                        .is_some_and(|value| value != "-1")
            }
        }
    }
}

/// Declarative element description mounted with [`MemoryDocument::mount`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    rect: Option<Rect>,
    children: Vec<ElementSpec>,
}

/// Start describing an element with the given tag.
#[must_use]
pub fn element(tag: &str) -> ElementSpec {
    ElementSpec {
        tag: tag.to_string(),
        ..ElementSpec::default()
    }
}

impl ElementSpec {
    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Give the element fixed viewport bounds.
    #[must_use]
    pub const fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Arena-backed document tree with `<html>` and `<body>` pre-created.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: ElementId,
    body: ElementId,
    focused: Option<ElementId>,
    prefers_dark: bool,
    metrics: TextMetrics,
    layout_flushes: usize,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Empty document: `<html><body></body></html>`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            root: ElementId::from_raw(0),
            body: ElementId::from_raw(0),
            focused: None,
            prefers_dark: false,
            metrics: TextMetrics::default(),
            layout_flushes: 0,
        };
        let root = document.alloc("html");
        let body = document.alloc("body");
        document.link(root, body);
        document.root = root;
        document.body = body;
        document
    }

    /// Report the given ambient colour-scheme preference.
    #[must_use]
    pub const fn with_dark_preference(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// Override the fallback text measurement.
    #[must_use]
    pub const fn with_text_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build `spec` under `parent` and return the new element.
    pub fn mount(&mut self, parent: ElementId, spec: ElementSpec) -> ElementId {
        let id = self.alloc(&spec.tag);
        if let Some(node) = self.node_mut(id) {
            for class in &spec.classes {
                if !node.has_class(class) {
                    node.classes.push(class.clone());
                }
            }
            for (name, value) in &spec.attributes {
                if name == "class" {
                    node.set_class_list(value);
                } else {
                    node.attributes.insert(name.clone(), value.clone());
                }
            }
            if let Some(text) = &spec.text {
                node.text.clone_from(text);
            }
            node.rect = spec.rect;
        }
        self.link(parent, id);
        for child in spec.children {
            self.mount(id, child);
        }
        id
    }

    /// Build `spec` as the last child of the body.
    pub fn mount_in_body(&mut self, spec: ElementSpec) -> ElementId {
        let body = self.body;
        self.mount(body, spec)
    }

    /// Give an existing element fixed bounds.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(node) = self.node_mut(element) {
            node.rect = Some(rect);
        }
    }

    /// Element currently holding focus.
    #[must_use]
    pub const fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Whether a control has been disabled.
    #[must_use]
    pub fn is_disabled(&self, element: ElementId) -> bool {
        self.node(element).is_some_and(|node| node.disabled)
    }

    /// Inline style value.
    #[must_use]
    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.node(element)
            .and_then(|node| node.style.get(property))
            .map(String::as_str)
    }

    /// Number of forced layout flushes so far.
    #[must_use]
    pub const fn layout_flushes(&self) -> usize {
        self.layout_flushes
    }

    /// Direct children of `element`.
    #[must_use]
    pub fn children_of(&self, element: ElementId) -> Vec<ElementId> {
        self.node(element)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Lower-case tag name.
    #[must_use]
    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.node(element).map(|node| node.tag.as_str())
    }

    /// Class list in insertion order.
    #[must_use]
    pub fn classes(&self, element: ElementId) -> Vec<String> {
        self.node(element)
            .map(|node| node.classes.clone())
            .unwrap_or_default()
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|index| self.nodes.get(index))
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|index| self.nodes.get_mut(index))
    }

    fn alloc(&mut self, tag: &str) -> ElementId {
        let id = ElementId::from_raw(self.nodes.len() as u64);
        self.nodes.push(Node::new(tag));
        id
    }

    fn detach(&mut self, element: ElementId) {
        let parent = self.node_mut(element).and_then(|node| node.parent.take());
        if let Some(parent) = parent.and_then(|parent| self.node_mut(parent)) {
            parent.children.retain(|child| *child != element);
        }
    }

    fn is_ancestor_or_self(&self, candidate: ElementId, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.node(id).and_then(|node| node.parent);
        }
        false
    }

    fn link(&mut self, parent: ElementId, child: ElementId) {
        if self.node(parent).is_none()
            || self.node(child).is_none()
            || self.is_ancestor_or_self(child, parent)
        {
            return;
        }
        self.detach(child);
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    fn descendants(&self, scope: ElementId) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self
            .node(scope)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            found.push(id);
            if let Some(node) = self.node(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        found
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> Option<ElementId> {
        Some(self.root)
    }

    fn body(&self) -> Option<ElementId> {
        Some(self.body)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|candidate| {
                self.node(*candidate)
                    .is_some_and(|node| node.attributes.get("id").is_some_and(|value| value == id))
            })
    }

    fn matches(&self, element: ElementId, selector: &Selector<'_>) -> bool {
        self.node(element).is_some_and(|node| node.matches(selector))
    }

    fn closest(&self, element: ElementId, selector: &Selector<'_>) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(id) = current {
            let node = self.node(id)?;
            if node.matches(selector) {
                return Some(id);
            }
            current = node.parent;
        }
        None
    }

    fn query_all(&self, scope: ElementId, selector: &Selector<'_>) -> Vec<ElementId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.node(element).and_then(|node| node.attribute(name))
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(element) {
            if name == "class" {
                node.set_class_list(value);
            } else {
                node.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.node(element).is_some_and(|node| node.has_class(class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element) {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.node_mut(element) {
            node.classes.retain(|existing| existing != class);
        }
    }

    fn text_content(&self, element: ElementId) -> String {
        let Some(node) = self.node(element) else {
            return String::new();
        };
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        let children = self.children_of(element);
        for child in children {
            self.detach(child);
        }
        if let Some(node) = self.node_mut(element) {
            node.text = text.to_string();
        }
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(element) {
            node.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_disabled(&mut self, element: ElementId, disabled: bool) {
        if let Some(node) = self.node_mut(element) {
            node.disabled = disabled;
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<ElementId> {
        Some(self.alloc(tag))
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.link(parent, child);
    }

    fn remove(&mut self, element: ElementId) {
        if element == self.root {
            return;
        }
        self.detach(element);
        if self
            .focused
            .is_some_and(|focused| self.is_ancestor_or_self(element, focused))
        {
            self.focused = None;
        }
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.node(element).is_some() && self.is_ancestor_or_self(self.root, element)
    }

    fn focus(&mut self, element: ElementId) {
        if self.is_attached(element) {
            self.focused = Some(element);
        }
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        if let Some(rect) = self.node(element).and_then(|node| node.rect) {
            return rect;
        }
        let chars = u32::try_from(self.text_content(element).chars().count()).unwrap_or(u32::MAX);
        Rect::new(
            0.0,
            0.0,
            f64::from(chars) * self.metrics.char_width,
            self.metrics.line_height,
        )
    }

    fn flush_layout(&mut self, _element: ElementId) {
        self.layout_flushes += 1;
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }
}

/// Hash-map preference store with switchable failure modes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    reject_writes: bool,
    unavailable: bool,
}

impl MemoryStorage {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Reject every write with [`StorageError::WriteRejected`].
    #[must_use]
    pub const fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    /// Fail every operation with [`StorageError::Unavailable`].
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Stored value, bypassing failure modes.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        if self.reject_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                detail: "writes disabled".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    id: TimerId,
    due_ms: u64,
    seq: u64,
    period_ms: Option<u64>,
    task: TimerTask,
}

/// Virtual clock. Timers fire only when the owner pops them.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    /// Clock at zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of scheduled timers (repeating timers count once).
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Due time of the earliest timer.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|timer| timer.due_ms).min()
    }

    /// Remove and return the earliest timer due at or before `until_ms`, advancing the
    /// clock to its due time. Repeating timers are re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerTask> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(index, _)| index)?;
        let timer = self.pending.swap_remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        if let Some(period) = timer.period_ms {
            self.push(timer.id, timer.due_ms + period, Some(period), timer.task);
        }
        Some(timer.task)
    }

    /// Move the clock forward to `now_ms` (never backwards).
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn push(&mut self, id: TimerId, due_ms: u64, period_ms: Option<u64>, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingTimer {
            id,
            due_ms,
            seq,
            period_ms,
            task,
        });
    }

    fn allocate(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay_ms: u32, task: TimerTask) -> TimerId {
        let id = self.allocate();
        self.push(id, self.now_ms + u64::from(delay_ms), None, task);
        id
    }

    fn schedule_repeating(&mut self, period_ms: u32, task: TimerTask) -> TimerId {
        let id = self.allocate();
        let period = u64::from(period_ms.max(1));
        self.push(id, self.now_ms + period, Some(period), task);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDocument, ElementId) {
        let mut document = MemoryDocument::new();
        let container = document.mount_in_body(
            element("div").id("outer").class("tabs").children([
                element("button").id("first").class("tab").attr("data-tab", "a"),
                element("div").id("inner").child(
                    element("a").id("link").attr("href", "#").text("go"),
                ),
                element("span").id("skip").attr("tabindex", "-1"),
                element("span").id("focusable").attr("tabindex", "0"),
            ]),
        );
        (document, container)
    }

    #[test]
    fn query_all_walks_descendants_in_document_order() {
        let (document, container) = sample();
        let focusable = document.query_all(container, &Selector::Focusable);
        let ids: Vec<_> = focusable
            .iter()
            .filter_map(|id| document.attribute(*id, "id"))
            .collect();
        assert_eq!(ids, vec!["first", "link", "focusable"]);
        assert!(!document.matches(container, &Selector::Focusable));
    }

    #[test]
    fn closest_includes_the_element_itself() {
        let (document, container) = sample();
        let link = document.element_by_id("link").expect("link");
        assert_eq!(
            document.closest(link, &Selector::Class("tabs")),
            Some(container)
        );
        assert_eq!(
            document.closest(container, &Selector::Class("tabs")),
            Some(container)
        );
        assert_eq!(document.closest(link, &Selector::Class("modal")), None);
    }

    #[test]
    fn class_attribute_and_class_list_stay_in_sync() {
        let mut document = MemoryDocument::new();
        let el = document.create_element("div").expect("element");
        document.set_attribute(el, "class", "tooltip  tooltip-top tooltip");
        assert_eq!(document.classes(el), vec!["tooltip", "tooltip-top"]);
        document.add_class(el, "show");
        assert_eq!(
            document.attribute(el, "class").as_deref(),
            Some("tooltip tooltip-top show")
        );
        assert!(document.matches(el, &Selector::AllClasses(&["tooltip", "show"])));
    }

    #[test]
    fn detached_elements_are_not_found_by_id() {
        let (mut document, _) = sample();
        let inner = document.element_by_id("inner").expect("inner");
        let link = document.element_by_id("link").expect("link");
        document.remove(inner);
        assert!(!document.is_attached(inner));
        assert!(!document.is_attached(link));
        assert_eq!(document.element_by_id("link"), None);
        assert_eq!(document.text_content(inner), "go");
    }

    #[test]
    fn append_child_refuses_cycles() {
        let (mut document, container) = sample();
        let inner = document.element_by_id("inner").expect("inner");
        document.append_child(inner, container);
        assert!(document.is_attached(container));
        assert_eq!(document.closest(inner, &Selector::Class("tabs")), Some(container));
    }

    #[test]
    fn set_text_replaces_children() {
        let (mut document, _) = sample();
        let inner = document.element_by_id("inner").expect("inner");
        document.set_text(inner, "plain");
        assert!(document.children_of(inner).is_empty());
        assert_eq!(document.text_content(inner), "plain");
    }

    #[test]
    fn bounding_rect_falls_back_to_text_metrics() {
        let mut document = MemoryDocument::new().with_text_metrics(TextMetrics {
            char_width: 5.0,
            line_height: 10.0,
        });
        let el = document.mount_in_body(element("div").text("abcd"));
        assert_eq!(document.bounding_rect(el), Rect::new(0.0, 0.0, 20.0, 10.0));
        document.set_rect(el, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(document.bounding_rect(el), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn focus_requires_attachment_and_clears_on_removal() {
        let (mut document, _) = sample();
        let first = document.element_by_id("first").expect("first");
        document.focus(first);
        assert_eq!(document.focused(), Some(first));
        document.remove(first);
        assert_eq!(document.focused(), None);
        document.focus(first);
        assert_eq!(document.focused(), None);
    }

    #[test]
    fn storage_failure_modes_surface_errors() {
        let mut store = MemoryStorage::new().with_entry("k", "v");
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        assert_eq!(store.get("missing"), Ok(None));

        let mut rejecting = MemoryStorage::new().rejecting_writes();
        assert!(matches!(
            rejecting.set("k", "v"),
            Err(StorageError::WriteRejected { .. })
        ));
        assert_eq!(MemoryStorage::new().unavailable().get("k"), Err(StorageError::Unavailable));
        assert!(store.set("k", "w").is_ok());
        assert_eq!(store.value("k"), Some("w"));
    }

    #[test]
    fn scheduler_pops_in_due_then_schedule_order() {
        let mut scheduler = ManualScheduler::new();
        let a = ElementId::from_raw(1);
        let b = ElementId::from_raw(2);
        scheduler.schedule_once(300, TimerTask::ToastDetach(a));
        scheduler.schedule_once(100, TimerTask::ToastAutoHide(a));
        scheduler.schedule_once(100, TimerTask::ToastAutoHide(b));

        assert_eq!(scheduler.pop_due(50), None);
        assert_eq!(scheduler.pop_due(1_000), Some(TimerTask::ToastAutoHide(a)));
        assert_eq!(scheduler.now_ms(), 100);
        assert_eq!(scheduler.pop_due(1_000), Some(TimerTask::ToastAutoHide(b)));
        assert_eq!(scheduler.pop_due(1_000), Some(TimerTask::ToastDetach(a)));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeating_timers_rearm_after_each_pop() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule_repeating(5_000, TimerTask::ToastSweep);
        assert_eq!(scheduler.pop_due(4_999), None);
        assert_eq!(scheduler.pop_due(12_000), Some(TimerTask::ToastSweep));
        assert_eq!(scheduler.pop_due(12_000), Some(TimerTask::ToastSweep));
        assert_eq!(scheduler.pop_due(12_000), None);
        assert_eq!(scheduler.next_due_ms(), Some(15_000));
        assert_eq!(scheduler.pending(), 1);
    }
}
