//! Dialog operations called on an already configured descriptor.
//!
//! ```ignore
//! let action = host.builder().title("Title").message("Message")
//!     .confirm(Buttons::new().positive("Save").negative("Cancel"))
//!     .await?;
//! ```

use std::future::Future;

use crate::dialog::{
    Buttons, DialogAction, MultiChoiceItems, MultiChoiceResult, SingleChoiceItems,
    SingleChoiceResult,
};
use crate::error::DialogError;
use crate::host::DialogBuilder;
use crate::suspend;

/// The free dialog operations as methods on any [`DialogBuilder`].
pub trait DialogBuilderExt: DialogBuilder + Sized {
    fn alert(
        self,
        button_label: impl Into<String>,
    ) -> impl Future<Output = Result<(), DialogError>> {
        suspend::alert(button_label, move || self)
    }

    fn confirm(self, buttons: Buttons) -> impl Future<Output = Result<DialogAction, DialogError>> {
        suspend::confirm(buttons, move || self)
    }

    fn single_choice_items(
        self,
        buttons: Buttons,
        items: SingleChoiceItems,
    ) -> impl Future<Output = Result<SingleChoiceResult, DialogError>> {
        suspend::single_choice_items(buttons, items, move || self)
    }

    fn multi_choice_items(
        self,
        buttons: Buttons,
        items: MultiChoiceItems,
    ) -> impl Future<Output = Result<MultiChoiceResult, DialogError>> {
        suspend::multi_choice_items(buttons, items, move || self)
    }
}

impl<B: DialogBuilder> DialogBuilderExt for B {}
