use super::action::ButtonKind;

/// Optional button labels for a dialog.
///
/// A slot without a label is not shown at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buttons {
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub neutral: Option<String>,
}

impl Buttons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positive(mut self, label: impl Into<String>) -> Self {
        self.positive = Some(label.into());
        self
    }

    pub fn negative(mut self, label: impl Into<String>) -> Self {
        self.negative = Some(label.into());
        self
    }

    pub fn neutral(mut self, label: impl Into<String>) -> Self {
        self.neutral = Some(label.into());
        self
    }

    /// Label for a slot, if that button is shown.
    pub fn label(&self, kind: ButtonKind) -> Option<&str> {
        match kind {
            ButtonKind::Positive => self.positive.as_deref(),
            ButtonKind::Negative => self.negative.as_deref(),
            ButtonKind::Neutral => self.neutral.as_deref(),
        }
    }

    /// Shown buttons in positive, negative, neutral order.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonKind, &str)> + '_ {
        ButtonKind::ALL
            .into_iter()
            .filter_map(move |kind| self.label(kind).map(|label| (kind, label)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_labels_are_not_shown() {
        let buttons = Buttons::new().positive("Save").neutral("Later");
        let shown: Vec<_> = buttons.iter().collect();
        assert_eq!(
            shown,
            vec![(ButtonKind::Positive, "Save"), (ButtonKind::Neutral, "Later")]
        );
        assert_eq!(buttons.label(ButtonKind::Negative), None);
    }

    #[test]
    fn empty_by_default() {
        assert!(Buttons::default().is_empty());
        assert!(!Buttons::new().negative("Cancel").is_empty());
    }
}
