//! Demo pages and instance builders.
//!
//! Element ids used by [`demo_page`]:
//! - theme: `theme-toggle`
//! - modal: `open-settings`, `settings`, `settings-backdrop`, `settings-name`, `settings-close`
//! - dropdowns: `menu-a`, `menu-a-trigger`, `menu-a-item`, `menu-b`, `menu-b-trigger`
//! - tabs: `profile-tabs`, `profile-tab-<id>`, `profile-panel-<id>` for `info`/`posts`,
//!   and the same under `billing-` for `plan`/`invoices`
//! - tooltips: `tip-default`, `tip-left`, `tip-bottom`, `tip-right`
//! - form: `signup`, `signup-email`, `signup-submit`
//! - plain content: `content`

use anyhow::{Result, anyhow};
use qwesui::host::memory::{
    ElementSpec, ManualScheduler, MemoryDocument, MemoryStorage, MemoryUi, element,
};
use qwesui::{Document, ElementId, QwesUi, Rect, UiConfig};

/// Bounds given to every tooltip trigger in the demo page.
pub const TRIGGER_RECT: Rect = Rect::new(200.0, 100.0, 80.0, 20.0);

/// A theme toggle button.
#[must_use]
pub fn theme_toggle() -> ElementSpec {
    element("button")
        .id("theme-toggle")
        .attr("data-theme-toggle", "")
        .text("Toggle theme")
}

/// A modal trigger plus the `settings` modal with a backdrop, an input and a close button.
#[must_use]
pub fn settings_modal() -> [ElementSpec; 2] {
    [
        element("button")
            .id("open-settings")
            .attr("data-modal", "settings")
            .text("Settings"),
        element("div").class("modal").id("settings").children([
            element("div").class("modal-backdrop").id("settings-backdrop"),
            element("div").class("modal-dialog").children([
                element("h2").text("Settings"),
                element("input").id("settings-name").attr("type", "text"),
                element("button")
                    .class("modal-close")
                    .id("settings-close")
                    .text("Close"),
            ]),
        ]),
    ]
}

/// A `.dropdown` with a trigger and one menu item, ids prefixed by `prefix`.
#[must_use]
pub fn dropdown(prefix: &str) -> ElementSpec {
    element("div").class("dropdown").id(prefix).children([
        element("button")
            .id(&format!("{prefix}-trigger"))
            .attr("data-dropdown", "")
            .text("Menu"),
        element("ul").class("dropdown-menu").child(
            element("li")
                .id(&format!("{prefix}-item"))
                .text("Item"),
        ),
    ])
}

/// A `.tabs` container with one label and panel per id; the first is active.
#[must_use]
pub fn tabs(prefix: &str, ids: &[&str]) -> ElementSpec {
    let mut container = element("div").class("tabs").id(&format!("{prefix}-tabs"));
    for (index, id) in ids.iter().enumerate() {
        let mut label = element("button")
            .class("tab")
            .id(&format!("{prefix}-tab-{id}"))
            .attr("data-tab", id)
            .text(id);
        if index == 0 {
            label = label.class("active");
        }
        container = container.child(label);
    }
    for (index, id) in ids.iter().enumerate() {
        let mut panel = element("section")
            .class("tab-content")
            .id(&format!("{prefix}-panel-{id}"))
            .attr("data-tab-content", id);
        if index == 0 {
            panel = panel.class("active");
        }
        container = container.child(panel);
    }
    container
}

/// A tooltip trigger at [`TRIGGER_RECT`].
#[must_use]
pub fn tooltip_trigger(id: &str, text: &str, position: Option<&str>) -> ElementSpec {
    let mut trigger = element("span")
        .id(id)
        .attr("data-tooltip", text)
        .rect(TRIGGER_RECT)
        .text("?");
    if let Some(position) = position {
        trigger = trigger.attr("data-tooltip-position", position);
    }
    trigger
}

/// The `signup` form with an email field and a submit button.
#[must_use]
pub fn signup_form() -> ElementSpec {
    element("form").class("form").id("signup").children([
        element("input")
            .id("signup-email")
            .attr("type", "email")
            .attr("name", "email"),
        element("button")
            .id("signup-submit")
            .attr("type", "submit")
            .text("Sign up"),
    ])
}

/// A document exercising every widget; see the module docs for element ids.
#[must_use]
pub fn demo_page() -> MemoryDocument {
    let mut document = MemoryDocument::new();
    document.mount_in_body(theme_toggle());
    for spec in settings_modal() {
        document.mount_in_body(spec);
    }
    document.mount_in_body(dropdown("menu-a"));
    document.mount_in_body(dropdown("menu-b"));
    document.mount_in_body(tabs("profile", &["info", "posts"]));
    document.mount_in_body(tabs("billing", &["plan", "invoices"]));
    document.mount_in_body(tooltip_trigger("tip-default", "Help", None));
    document.mount_in_body(tooltip_trigger("tip-left", "Left", Some("left")));
    document.mount_in_body(tooltip_trigger("tip-bottom", "Below", Some("bottom")));
    document.mount_in_body(tooltip_trigger("tip-right", "Right", Some("right")));
    document.mount_in_body(signup_form());
    document.mount_in_body(element("p").id("content").text("Body copy"));
    document
}

/// Instance over `document` with empty storage and a clock at zero.
#[must_use]
pub fn ui_for(document: MemoryDocument) -> MemoryUi {
    QwesUi::new(document, MemoryStorage::new(), ManualScheduler::new())
}

/// Instance over [`demo_page`].
#[must_use]
pub fn demo_ui() -> MemoryUi {
    ui_for(demo_page())
}

/// Instance over [`demo_page`] with `storage` and `config`.
///
/// # Errors
///
/// Returns an error when `config` fails validation.
pub fn demo_ui_with(storage: MemoryStorage, config: UiConfig) -> Result<MemoryUi> {
    Ok(QwesUi::with_config(
        demo_page(),
        storage,
        ManualScheduler::new(),
        config,
    )?)
}

/// Element with `id`, or an error naming it.
///
/// # Errors
///
/// Returns an error when no attached element carries `id`.
pub fn by_id(ui: &MemoryUi, id: &str) -> Result<ElementId> {
    ui.document()
        .element_by_id(id)
        .ok_or_else(|| anyhow!("no element with id `{id}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_exposes_documented_ids() -> Result<()> {
        let ui = demo_ui();
        for id in [
            "theme-toggle",
            "settings",
            "settings-name",
            "menu-a-trigger",
            "menu-b-item",
            "profile-panel-posts",
            "billing-tab-invoices",
            "tip-left",
            "signup-submit",
            "content",
        ] {
            by_id(&ui, id)?;
        }
        Ok(())
    }

    #[test]
    fn by_id_reports_missing_elements() {
        let ui = demo_ui();
        let err = by_id(&ui, "nope").expect_err("missing id");
        assert!(err.to_string().contains("nope"));
    }
}
