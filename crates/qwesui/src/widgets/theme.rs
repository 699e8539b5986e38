//! Theme preference: persisted flag applied as a document-level attribute.

use tracing::{debug, warn};

use crate::core::config::ThemeSettings;
use crate::core::theme::ThemeMode;
use crate::host::{Document, PreferenceStore};

/// Reads, flips and persists the `data-theme` preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeController {
    storage_key: String,
    attribute: String,
}

impl ThemeController {
    /// Controller using the configured key and attribute.
    #[must_use]
    pub fn new(settings: &ThemeSettings) -> Self {
        Self {
            storage_key: settings.storage_key.clone(),
            attribute: settings.attribute.clone(),
        }
    }

    /// Apply the stored preference, else the ambient dark signal, else leave the default.
    pub fn initialize<D: Document, S: PreferenceStore>(
        &self,
        document: &mut D,
        store: &S,
    ) -> Option<ThemeMode> {
        let stored = match store.get(&self.storage_key) {
            Ok(value) => value.as_deref().and_then(ThemeMode::parse),
            Err(err) => {
                warn!(error = %err, key = %self.storage_key, "theme preference unreadable");
                None
            }
        };
        let mode = stored.or_else(|| document.prefers_dark_scheme().then_some(ThemeMode::Dark))?;
        self.apply(document, mode);
        debug!(theme = mode.as_str(), from_storage = stored.is_some(), "theme initialised");
        Some(mode)
    }

    /// Mode currently applied to the document, if any.
    #[must_use]
    pub fn current<D: Document>(&self, document: &D) -> Option<ThemeMode> {
        document
            .root()
            .and_then(|root| document.attribute(root, &self.attribute))
            .as_deref()
            .and_then(ThemeMode::parse)
    }

    /// Flip between light and dark (unset counts as light), apply and persist.
    pub fn toggle<D: Document, S: PreferenceStore>(
        &self,
        document: &mut D,
        store: &mut S,
    ) -> ThemeMode {
        let next = self
            .current(document)
            .unwrap_or(ThemeMode::Light)
            .flipped();
        self.apply(document, next);
        if let Err(err) = store.set(&self.storage_key, next.as_str()) {
            warn!(error = %err, key = %self.storage_key, "theme preference not persisted");
        }
        debug!(theme = next.as_str(), "theme toggled");
        next
    }

    fn apply<D: Document>(&self, document: &mut D, mode: ThemeMode) {
        if let Some(root) = document.root() {
            document.set_attribute(root, &self.attribute, mode.as_str());
        }
    }
}
