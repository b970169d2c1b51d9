#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "!",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The single toast on the page. Each `show` carries a fresh generation and
/// a dismissal only applies to the generation it was scheduled for, so a
/// late timer from an earlier toast cannot hide a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub severity: Severity,
    pub visibility: ToastVisibility,
    pub generation: u64,
}

impl ToastState {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, generation: u64) {
        self.message = message.into();
        self.severity = severity;
        self.visibility = ToastVisibility::Visible;
        self.generation = generation;
    }

    /// Returns whether the toast was hidden.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_visible() {
            return false;
        }
        self.visibility = ToastVisibility::Hidden;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == ToastVisibility::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_dismiss() {
        let mut toast = ToastState::default();
        toast.show("Saved", Severity::Success, 1);
        assert!(toast.is_visible());
        assert!(toast.dismiss(1));
        assert!(!toast.is_visible());
        assert_eq!(toast.message, "Saved");
    }

    #[test]
    fn stale_dismissal_does_not_hide_newer_toast() {
        let mut toast = ToastState::default();
        toast.show("first", Severity::Success, 1);
        toast.show("second", Severity::Error, 2);
        assert!(!toast.dismiss(1));
        assert!(toast.is_visible());
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Error);
        assert!(toast.dismiss(2));
    }

    #[test]
    fn severity_rendering() {
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Error.icon(), "!");
        assert_eq!(Severity::Error.class(), "error");
    }
}
