//! View state: the selected mode, sort key and time unit.

pub mod state;

pub use state::{ViewSettings, ViewState};
