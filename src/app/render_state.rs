use crate::app::mode::AppMode;

/// One-off message shown above the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// A line of the cleaned result and whether it passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub token: String,
    pub is_valid: bool,
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    /// (row, column) of the cursor inside the input box
    pub cursor: (u16, u16),
    pub output: Vec<OutputLine>,
    /// Requested first visible output line; the view clamps it to the panel
    pub output_scroll: u16,
    pub warning: Option<String>,
    /// Preformatted `line N: token (reason)` entries
    pub invalid_lines: Vec<String>,
    pub copied: bool,
    pub can_copy: bool,
    pub can_clear: bool,
    pub validation: bool,
    pub status: Option<Status>,
}

impl RenderState {
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}
