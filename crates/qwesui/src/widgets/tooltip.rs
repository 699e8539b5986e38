//! Hover tooltips: a floating element created on enter and removed on leave.
//!
//! # Design
//! - The controller owns every tooltip it creates; triggers are only map keys.
//! - Unrecognised positions keep their `tooltip-<position>` class but get no coordinates.

use std::collections::HashMap;

use tracing::debug;

use crate::core::config::TooltipSettings;
use crate::core::geometry::{TooltipPlacement, px};
use crate::core::markers::{SHOWN_CLASS, TOOLTIP_CLASS, TOOLTIP_POSITION_ATTR, TOOLTIP_TEXT_ATTR};
use crate::host::{Document, ElementId};

/// Creates, positions and removes tooltips for `[data-tooltip]` triggers.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipController {
    gap: f64,
    open: HashMap<ElementId, ElementId>,
}

impl TooltipController {
    /// Controller using the configured gap.
    #[must_use]
    pub fn new(settings: &TooltipSettings) -> Self {
        Self {
            gap: settings.gap_px,
            open: HashMap::new(),
        }
    }

    /// Tooltip currently shown for `trigger`.
    #[must_use]
    pub fn tooltip_for(&self, trigger: ElementId) -> Option<ElementId> {
        self.open.get(&trigger).copied()
    }

    /// Number of live tooltips.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Create and position a tooltip for `trigger`.
    pub fn show<D: Document>(&mut self, document: &mut D, trigger: ElementId) -> Option<ElementId> {
        let text = document.attribute(trigger, TOOLTIP_TEXT_ATTR)?;
        let position = document
            .attribute(trigger, TOOLTIP_POSITION_ATTR)
            .unwrap_or_else(|| TooltipPlacement::default().as_str().to_string());
        let body = document.body()?;

        if let Some(stale) = self.open.remove(&trigger) {
            document.remove(stale);
        }

        let tooltip = document.create_element("div")?;
        document.set_attribute(
            tooltip,
            "class",
            &format!("{TOOLTIP_CLASS} {TOOLTIP_CLASS}-{position}"),
        );
        document.set_text(tooltip, &text);
        document.append_child(body, tooltip);

        if let Some(placement) = TooltipPlacement::parse(&position) {
            let anchor = document.bounding_rect(trigger);
            let size = document.bounding_rect(tooltip);
            let offset = placement.place(anchor, size, self.gap);
            document.set_style(tooltip, "top", &px(offset.top));
            document.set_style(tooltip, "left", &px(offset.left));
        } else {
            debug!(position = %position, "tooltip position unrecognised; left unpositioned");
        }
        document.add_class(tooltip, SHOWN_CLASS);

        self.open.insert(trigger, tooltip);
        debug!(trigger = trigger.raw(), tooltip = tooltip.raw(), "tooltip shown");
        Some(tooltip)
    }

    /// Remove the tooltip created for `trigger`, if any.
    pub fn hide<D: Document>(&mut self, document: &mut D, trigger: ElementId) -> bool {
        let Some(tooltip) = self.open.remove(&trigger) else {
            return false;
        };
        document.remove(tooltip);
        debug!(trigger = trigger.raw(), "tooltip removed");
        true
    }
}
