use super::InputError;
use tracing::debug;

/// Source and sink for clipboard text.
pub trait ClipboardBackend {
    fn get_text(&mut self) -> Result<String, InputError>;
    fn set_text(&mut self, text: &str) -> Result<(), InputError>;
}

/// System clipboard through `arboard`.
///
/// The handle is opened lazily and then kept alive: on X11 and Wayland the
/// copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, InputError> {
        if self.handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| InputError::Clipboard(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| InputError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String, InputError> {
        let text = self.handle()?.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => InputError::EmptyClipboard,
            other => InputError::Clipboard(other.to_string()),
        })?;
        debug!(bytes = text.len(), "read clipboard");
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<(), InputError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| InputError::Clipboard(e.to_string()))?;
        debug!(bytes = text.len(), "wrote clipboard");
        Ok(())
    }
}

/// In-process clipboard, used when no system clipboard is wanted.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every operation fails with this message.
    pub failure: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            contents: None,
            failure: Some(message.to_string()),
        }
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, InputError> {
        if let Some(message) = &self.failure {
            return Err(InputError::Clipboard(message.clone()));
        }
        self.contents.clone().ok_or(InputError::EmptyClipboard)
    }

    fn set_text(&mut self, text: &str) -> Result<(), InputError> {
        if let Some(message) = &self.failure {
            return Err(InputError::Clipboard(message.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
