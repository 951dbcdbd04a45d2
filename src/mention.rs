pub mod controller;
pub mod debouncer;
pub mod dropdown_state;
pub mod insertion;
pub mod render;
pub mod rows;
pub mod selection;
pub mod trigger;

// Re-export public types
pub use controller::{KeyOutcome, MentionConfig, MentionController};
pub use dropdown_state::{DropdownPhase, DropdownState};
pub use render::{DropdownArea, render_dropdown};
pub use rows::{MentionRow, mention_rows, visible_window};
pub use trigger::ActiveTrigger;
