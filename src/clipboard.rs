//! System clipboard access for copying component markup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard, opened on first use.
///
/// The handle is kept for the lifetime of the value: on X11 the copied
/// contents disappear as soon as the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// In-memory clipboard that records writes, or rejects them.
    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Vec<String>,
        pub reject: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.reject {
                return Err(ClipboardError::Write("permission denied".into()));
            }
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_memory_clipboard_records_and_rejects() {
        let mut clip = MemoryClipboard::default();
        clip.set_text("<b>hi</b>").unwrap();
        assert_eq!(clip.contents, vec!["<b>hi</b>".to_string()]);

        clip.reject = true;
        let err = clip.set_text("x").unwrap_err();
        assert_eq!(err.to_string(), "clipboard write failed: permission denied");
        assert_eq!(clip.contents.len(), 1);
    }
}
