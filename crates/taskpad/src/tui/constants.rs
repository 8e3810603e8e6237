//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside selected list entries.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Width percentage allocated to the task list; the rest shows output.
pub const TASK_LIST_WIDTH_PERCENT: u16 = 60;
/// Width percentage for the confirmation popup before clamping.
pub const CONFIRM_POPUP_WIDTH_PERCENT: u16 = 50;
/// Minimum width for the confirmation popup.
pub const CONFIRM_POPUP_MIN_WIDTH: u16 = 36;
/// Fixed height of the confirmation popup.
pub const CONFIRM_POPUP_HEIGHT: u16 = 5;
/// Columns reserved in a task row for marker, badge and padding.
pub const TASK_ROW_RESERVED_WIDTH: u16 = 16;
