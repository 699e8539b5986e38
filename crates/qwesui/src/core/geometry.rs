//! Viewport geometry and tooltip placement.

/// Viewport-relative rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Build a rectangle from its origin and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Absolute coordinates applied to a floating element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    /// Value for the `top` style, in pixels.
    pub top: f64,
    /// Value for the `left` style, in pixels.
    pub left: f64,
}

/// Side of the trigger a tooltip is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipPlacement {
    /// Above the trigger (default).
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl TooltipPlacement {
    /// Parse a `data-tooltip-position` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Attribute value for this placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Compute where a tooltip of size `tip` goes relative to `trigger`.
    ///
    /// Top/bottom centre horizontally on the trigger, left/right centre vertically;
    /// `gap` separates the tooltip from the trigger edge.
    #[must_use]
    pub const fn place(self, trigger: Rect, tip: Rect, gap: f64) -> Offset {
        let centred_left = trigger.left + trigger.width / 2.0 - tip.width / 2.0;
        let centred_top = trigger.top + trigger.height / 2.0 - tip.height / 2.0;
        match self {
            Self::Top => Offset {
                top: trigger.top - tip.height - gap,
                left: centred_left,
            },
            Self::Bottom => Offset {
                top: trigger.bottom() + gap,
                left: centred_left,
            },
            Self::Left => Offset {
                top: centred_top,
                left: trigger.left - tip.width - gap,
            },
            Self::Right => Offset {
                top: centred_top,
                left: trigger.right() + gap,
            },
        }
    }
}

/// Format a pixel length the way CSS expects it.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: Rect = Rect::new(200.0, 100.0, 80.0, 20.0);
    const TIP: Rect = Rect::new(0.0, 0.0, 40.0, 18.0);

    #[test]
    fn top_and_bottom_centre_horizontally() {
        let top = TooltipPlacement::Top.place(TRIGGER, TIP, 8.0);
        assert_eq!(top, Offset { top: 74.0, left: 220.0 });

        let bottom = TooltipPlacement::Bottom.place(TRIGGER, TIP, 8.0);
        assert_eq!(bottom, Offset { top: 128.0, left: 220.0 });
    }

    #[test]
    fn left_and_right_centre_vertically() {
        let left = TooltipPlacement::Left.place(TRIGGER, TIP, 8.0);
        assert_eq!(left, Offset { top: 101.0, left: 152.0 });
        assert!(left.left < TRIGGER.left - TIP.width);

        let right = TooltipPlacement::Right.place(TRIGGER, TIP, 8.0);
        assert_eq!(right, Offset { top: 101.0, left: 288.0 });
    }

    #[test]
    fn placement_evaluates_in_const_context() {
        const BELOW: Offset = TooltipPlacement::Bottom.place(TRIGGER, TIP, 8.0);
        const EDGE: f64 = TRIGGER.bottom();
        assert_eq!(BELOW, Offset { top: EDGE + 8.0, left: 220.0 });
        assert!((TRIGGER.right() - 280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_position_does_not_parse() {
        assert_eq!(TooltipPlacement::parse("diagonal"), None);
        assert_eq!(TooltipPlacement::parse("left"), Some(TooltipPlacement::Left));
        assert_eq!(TooltipPlacement::default().as_str(), "top");
    }

    #[test]
    fn px_drops_trailing_zero_fraction() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(92.5), "92.5px");
        assert_eq!(px(-4.0), "-4px");
    }
}
