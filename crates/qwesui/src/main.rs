#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! QwesUI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), qwesui::web::WebError> {
    qwesui::web::install(qwesui::UiConfig::default())?.persist();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use qwesui::telemetry::{LoggingConfig, init_logging};

    init_logging(&LoggingConfig::default())?;
    tracing::warn!(
        version = qwesui::VERSION,
        "the qwesui binary drives a browser document; build with `cargo build --target wasm32-unknown-unknown`"
    );
    Ok(())
}
