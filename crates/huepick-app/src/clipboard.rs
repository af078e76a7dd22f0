//! Platform clipboard backends.

use huepick_core::{Clipboard, ShareError};

/// The system clipboard, opened on first use.
#[cfg(feature = "native")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "native")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "native")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ShareError::ClipboardUnavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ShareError::ClipboardUnavailable("not initialized".to_string()));
        };

        clipboard
            .set_text(text)
            .map_err(|e| ShareError::ClipboardWrite(e.to_string()))?;
        log::info!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

/// Stand-in used when no clipboard backend is compiled in.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::ClipboardUnavailable(
            "built without the `native` feature".to_string(),
        ))
    }
}

/// Create the clipboard for this build.
pub fn create_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "native")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "native"))]
    {
        Box::new(NoClipboard)
    }
}
