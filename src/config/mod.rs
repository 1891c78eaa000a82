//! Configuration for the dialog facade.
//!
//! Loaded from TOML:
//!
//! ```toml
//! alert_button_label = "Got it"
//! selection_on_dismiss = "reset"   # or "keep-last"
//! ```

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{DialogConfig, SelectionPolicy};
