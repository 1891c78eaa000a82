use thiserror::Error;

/// Errors raised when choice inputs violate their invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemsError {
    #[error("selected index {index} is out of range for {len} items")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("{items} items but {checked} checked states")]
    LengthMismatch { items: usize, checked: usize },
}

/// Options for a single choice dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChoiceItems {
    items: Vec<String>,
    selected_index: usize,
}

impl SingleChoiceItems {
    /// Build the options with `selected_index` pre-selected.
    ///
    /// # Errors
    /// Returns [`ItemsError::SelectionOutOfRange`] if the list is non-empty
    /// and the index does not point into it.
    pub fn new<I, S>(items: I, selected_index: usize) -> Result<Self, ItemsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if !items.is_empty() && selected_index >= items.len() {
            return Err(ItemsError::SelectionOutOfRange {
                index: selected_index,
                len: items.len(),
            });
        }
        Ok(Self {
            items,
            selected_index,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Default selection, `None` for an empty list.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected_index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Options for a multi choice dialog, each with its default checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiChoiceItems {
    items: Vec<String>,
    checked: Vec<bool>,
}

impl MultiChoiceItems {
    /// # Errors
    /// Returns [`ItemsError::LengthMismatch`] unless `checked` has exactly
    /// one entry per item.
    pub fn new<I, S>(items: I, checked: Vec<bool>) -> Result<Self, ItemsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.len() != checked.len() {
            return Err(ItemsError::LengthMismatch {
                items: items.len(),
                checked: checked.len(),
            });
        }
        Ok(Self { items, checked })
    }

    /// All options start unchecked.
    pub fn unchecked<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let checked = vec![false; items.len()];
        Self { items, checked }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn checked(&self) -> &[bool] {
        &self.checked
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
