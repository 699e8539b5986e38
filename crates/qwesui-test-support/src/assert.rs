//! Assertions over document state that report element ids on failure.

use anyhow::{Result, bail};
use qwesui::host::memory::MemoryDocument;
use qwesui::{Document, ElementId, Selector};

fn describe(document: &MemoryDocument, element: ElementId) -> String {
    document
        .attribute(element, "id")
        .unwrap_or_else(|| format!("#{}", element.raw()))
}

/// Fail unless `element` carries `class`.
///
/// # Errors
///
/// Returns an error naming the element and its classes.
pub fn has_class(document: &MemoryDocument, element: ElementId, class: &str) -> Result<()> {
    if !document.has_class(element, class) {
        bail!(
            "`{}` lacks class `{class}` (has {:?})",
            describe(document, element),
            document.classes(element)
        );
    }
    Ok(())
}

/// Fail if `element` carries `class`.
///
/// # Errors
///
/// Returns an error naming the element.
pub fn lacks_class(document: &MemoryDocument, element: ElementId, class: &str) -> Result<()> {
    if document.has_class(element, class) {
        bail!("`{}` unexpectedly has class `{class}`", describe(document, element));
    }
    Ok(())
}

/// Ids of the descendants of `scope` carrying `class`, in document order.
#[must_use]
pub fn ids_with_class(document: &MemoryDocument, scope: ElementId, class: &str) -> Vec<String> {
    document
        .query_all(scope, &Selector::Class(class))
        .into_iter()
        .map(|element| describe(document, element))
        .collect()
}

/// Elements anywhere in the document carrying every class in `classes`.
#[must_use]
pub fn all_with_classes(document: &MemoryDocument, classes: &[&str]) -> Vec<ElementId> {
    document.query_document(&Selector::AllClasses(classes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qwesui::host::memory::element;

    #[test]
    fn class_assertions_name_the_element() {
        let mut document = MemoryDocument::new();
        let box_ = document.mount_in_body(element("div").id("box").class("show"));
        assert!(has_class(&document, box_, "show").is_ok());
        let err = has_class(&document, box_, "active").expect_err("missing class");
        assert!(err.to_string().contains("`box`"));
        assert!(lacks_class(&document, box_, "show").is_err());
    }

    #[test]
    fn ids_with_class_walks_in_document_order() {
        let mut document = MemoryDocument::new();
        let list = document.mount_in_body(element("ul").children([
            element("li").id("one").class("hit"),
            element("li").id("two"),
            element("li").id("three").class("hit"),
        ]));
        assert_eq!(ids_with_class(&document, list, "hit"), vec!["one", "three"]);
    }
}
