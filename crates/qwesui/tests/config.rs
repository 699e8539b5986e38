use anyhow::{Context, Result};
use qwesui::host::memory::MemoryStorage;
use qwesui::{ConfigError, Document, ToastKind, UiConfig, UiEvent};
use qwesui_test_support::fixtures::{by_id, demo_ui_with};

#[test]
fn json_config_overrides_theme_key_and_attribute() -> Result<()> {
    let config = UiConfig::from_json(
        r#"{ "theme": { "storage_key": "site-theme", "attribute": "data-mode" } }"#,
    )?;
    let mut ui = demo_ui_with(MemoryStorage::new(), config)?;
    let toggle = by_id(&ui, "theme-toggle")?;
    ui.dispatch(UiEvent::Click { target: toggle });

    let root = ui.document().root().context("root")?;
    assert_eq!(ui.document().attribute(root, "data-mode").as_deref(), Some("dark"));
    assert_eq!(ui.document().attribute(root, "data-theme"), None);
    assert_eq!(ui.storage().value("site-theme"), Some("dark"));
    assert_eq!(ui.storage().value("qwesui-theme"), None);
    Ok(())
}

#[test]
fn json_config_changes_toast_and_form_timings() -> Result<()> {
    let config = UiConfig::from_json(
        r#"{
            "toast": { "default_duration_ms": 800, "exit_delay_ms": 100 },
            "form": { "simulated_delay_ms": 50, "success_message": "Thanks!" }
        }"#,
    )?;
    let mut ui = demo_ui_with(MemoryStorage::new(), config)?;
    let toast = ui
        .show_toast("Quick", ToastKind::Info, None)
        .context("toast")?
        .element();
    ui.advance(800);
    assert!(!ui.document().has_class(toast, "show"));
    ui.advance(100);
    assert!(!ui.document().is_attached(toast));

    let form = by_id(&ui, "signup")?;
    ui.dispatch(UiEvent::Submit { target: form });
    ui.advance(50);
    let success = ui
        .document()
        .query_document(&qwesui::Selector::Class("toast-message"))
        .into_iter()
        .next()
        .context("success toast")?;
    assert_eq!(ui.document().text_content(success), "Thanks!");
    Ok(())
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        UiConfig::from_json(r#"{ "toast": { "sweep_interval_ms": 0 } }"#),
        Err(ConfigError::InvalidField {
            field: "sweep_interval_ms",
            ..
        })
    ));
    assert!(matches!(
        UiConfig::from_json(r#"{ "tooltip": { "gap_px": -1.0 } }"#),
        Err(ConfigError::InvalidField { field: "gap_px", .. })
    ));
    assert!(matches!(
        UiConfig::from_json(r#"{ "theme": { "colour": "red" } }"#),
        Err(ConfigError::Parse { .. })
    ));

    let mut config = UiConfig::default();
    config.theme.storage_key = "  ".to_string();
    assert!(demo_ui_with(MemoryStorage::new(), config).is_err());
}
