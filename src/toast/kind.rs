//! Toast kinds and their presentation.

use std::fmt;

/// The closed set of toast kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    #[default]
    Info,
    Error,
    Warning,
}

/// Border class and icon of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastStyle {
    pub border: &'static str,
    pub icon: &'static str,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Info,
        ToastKind::Error,
        ToastKind::Warning,
    ];

    /// Parses a kind name, falling back to [`ToastKind::Info`] for anything
    /// unrecognized.
    ///
    /// # Example
    ///
    /// ```
    /// # use dxhealth::toast::ToastKind;
    /// assert_eq!(ToastKind::from_name("error"), ToastKind::Error);
    /// assert_eq!(ToastKind::from_name("celebration"), ToastKind::Info);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "info" => ToastKind::Info,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        }
    }

    pub fn style(&self) -> ToastStyle {
        match self {
            ToastKind::Success => ToastStyle {
                border: "border-blue-500",
                icon: "✅",
            },
            ToastKind::Info => ToastStyle {
                border: "border-blue-500",
                icon: "ℹ️",
            },
            ToastKind::Error => ToastStyle {
                border: "border-red-500",
                icon: "⛔",
            },
            ToastKind::Warning => ToastStyle {
                border: "border-amber-400",
                icon: "⚠️",
            },
        }
    }
}

impl From<&str> for ToastKind {
    fn from(name: &str) -> Self {
        ToastKind::from_name(name)
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ToastKind::ALL {
            assert_eq!(ToastKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_info() {
        assert_eq!(ToastKind::from("danger"), ToastKind::Info);
        assert_eq!(ToastKind::from(""), ToastKind::Info);
        assert_eq!(ToastKind::from("ERROR"), ToastKind::Info);
    }

    #[test]
    fn test_styles() {
        assert_eq!(ToastKind::Error.style().border, "border-red-500");
        assert_eq!(ToastKind::Warning.style().border, "border-amber-400");
        assert_eq!(ToastKind::Success.style().icon, "✅");
        assert_eq!(ToastKind::Info.style().icon, "ℹ️");
    }
}
