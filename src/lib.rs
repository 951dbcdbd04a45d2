//! mentio: terminal comment composer with live `@mention` autocomplete.
//!
//! The interesting machinery lives in [`mention`]: trigger detection for an
//! in-progress `@name` token, a debounced search dispatcher that tolerates
//! out-of-order responses via request ids, a dropdown state machine with
//! wrap-around keyboard navigation, and the insertion engine that splices
//! the chosen username back into the text. [`search`] owns the worker thread
//! that talks to the user-search HTTP endpoint; [`app`] is the TUI shell
//! hosting two independent mention-enabled composers.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod mention;
pub mod search;
pub mod widgets;
