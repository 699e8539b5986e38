//! Toast categories.

/// Category tag carried by a toast as a `toast-<kind>` class.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Neutral information (default).
    #[default]
    Info,
    /// Successful completion.
    Success,
    /// Something needs attention.
    Warning,
    /// Failure.
    Error,
    /// Any other host-defined category; rendered verbatim.
    Custom(String),
}

impl ToastKind {
    /// Category name as used in the `toast-<kind>` class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Custom(name) => name,
        }
    }

    /// Class applied to the toast root element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("toast-{}", self.as_str())
    }
}

impl From<&str> for ToastKind {
    fn from(value: &str) -> Self {
        match value {
            "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToastKind;

    #[test]
    fn known_kinds_round_trip_through_str() {
        for kind in [
            ToastKind::Info,
            ToastKind::Success,
            ToastKind::Warning,
            ToastKind::Error,
        ] {
            assert_eq!(ToastKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn custom_kind_is_rendered_verbatim() {
        let kind = ToastKind::from("sync");
        assert_eq!(kind, ToastKind::Custom("sync".to_string()));
        assert_eq!(kind.class_name(), "toast-sync");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(ToastKind::default().class_name(), "toast-info");
    }
}
