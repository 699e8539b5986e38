#![cfg(target_arch = "wasm32")]

use qwesui::host::memory::{ManualScheduler, MemoryStorage};
use qwesui::web::{WebDocument, install};
use qwesui::{Document, QwesUi, ToastKind, UiConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(markup: &str) -> web_sys::Document {
    let document = gloo::utils::document();
    gloo::utils::body().set_inner_html(markup);
    document
}

fn click(document: &web_sys::Document, id: &str) {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .expect("clickable element")
        .click();
}

#[wasm_bindgen_test]
fn handles_are_stable_per_element() {
    let document = mount(r#"<p id="a"></p><p id="b"></p>"#);
    let web = WebDocument::new(document);
    let a = web.element_by_id("a").expect("a");
    assert_eq!(web.element_by_id("a"), Some(a));
    assert_ne!(web.element_by_id("b"), Some(a));
}

#[wasm_bindgen_test]
fn detached_toasts_release_their_handles() {
    let document = mount("");
    let mut ui = QwesUi::new(
        WebDocument::new(document),
        MemoryStorage::new(),
        ManualScheduler::new(),
    );
    ui.document().body().expect("body");
    let baseline = ui.document().tracked();

    let toast = ui
        .toast("Saved", ToastKind::Success, Some(1_000))
        .show()
        .expect("toast")
        .element();
    assert_eq!(ui.document().tracked(), baseline + 4);

    ui.advance(1_300);
    assert!(!ui.document().is_attached(toast));
    assert_eq!(ui.document().tracked(), baseline);
}

#[wasm_bindgen_test]
fn elements_removed_by_the_page_are_pruned() {
    let document = mount(r#"<p id="gone"></p>"#);
    let mut ui = QwesUi::new(
        WebDocument::new(document.clone()),
        MemoryStorage::new(),
        ManualScheduler::new(),
    );
    let gone = ui.document().element_by_id("gone").expect("gone");
    ui.document().body().expect("body");
    let baseline = ui.document().tracked();
    document.get_element_by_id("gone").expect("gone").remove();

    let toast = ui
        .toast("Bye", ToastKind::Info, Some(0))
        .show()
        .expect("toast")
        .element();
    ui.document_mut().remove(toast);
    assert_eq!(ui.document().tracked(), baseline - 1);
    assert!(!ui.document().is_attached(gone));
}

#[wasm_bindgen_test]
fn delegated_clicks_drive_modal_and_dropdown() {
    let document = mount(
        r#"
        <button id="open" data-modal="dialog">Open</button>
        <div class="modal" id="dialog"><button class="modal-close" id="close">x</button></div>
        <div class="dropdown" id="menu"><button id="toggle" data-dropdown>Menu</button></div>
        "#,
    );
    let installation = install(UiConfig::default()).expect("install");

    click(&document, "open");
    let modal = document.get_element_by_id("dialog").expect("modal");
    assert!(modal.class_list().contains("show"));
    click(&document, "close");
    assert!(!modal.class_list().contains("show"));

    click(&document, "toggle");
    let menu = document.get_element_by_id("menu").expect("menu");
    assert!(menu.class_list().contains("show"));

    drop(installation);
    click(&document, "toggle");
    assert!(menu.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn theme_toggle_writes_plain_string_to_local_storage() {
    let document = mount(r#"<button id="theme" data-theme-toggle>Theme</button>"#);
    let storage = gloo::utils::window()
        .local_storage()
        .expect("storage access")
        .expect("storage");
    storage.remove_item("qwesui-theme").expect("clear");
    let installation = install(UiConfig::default()).expect("install");

    click(&document, "theme");
    let applied = document
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"));
    let stored = storage.get_item("qwesui-theme").expect("read");
    assert_eq!(applied, stored);
    drop(installation);
}
