/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Insert(char),
    Newline,
    /// Bracketed paste from the terminal
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    LineStart,
    LineEnd,
    ScrollOutputUp,
    ScrollOutputDown,
    /// Insert the system clipboard text at the cursor
    PasteClipboard,
    CopyResult,
    Clear,
    ToggleValidation,
    ToggleHelp,
    /// Esc: leave the help overlay, or quit from the editor
    Cancel,
    Quit,
    None,
}
