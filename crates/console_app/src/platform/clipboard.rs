use engine_logging::{engine_debug, engine_warn};

/// Writes text to the system clipboard, falling back to egui's own output.
///
/// The `arboard` handle is kept alive because on X11 the clipboard contents
/// are served by the owning process.
#[derive(Default)]
pub struct ClipboardWriter {
    system: Option<arboard::Clipboard>,
}

impl ClipboardWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` only when both the system clipboard and the fallback
    /// are unusable.
    pub fn copy(&mut self, ctx: &egui::Context, text: &str) -> bool {
        match self.write_system(text) {
            Ok(()) => true,
            Err(err) => {
                engine_warn!("System clipboard unavailable, using fallback: {}", err);
                self.copy_fallback(ctx, text)
            }
        }
    }

    fn write_system(&mut self, text: &str) -> Result<(), arboard::Error> {
        let mut clipboard = match self.system.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        clipboard.set_text(text.to_owned())?;
        // A handle that failed is dropped so the next copy reconnects.
        self.system = Some(clipboard);
        Ok(())
    }

    fn copy_fallback(&self, ctx: &egui::Context, text: &str) -> bool {
        if text.is_empty() {
            engine_warn!("Refusing to copy empty text");
            return false;
        }
        engine_debug!("Copying {} bytes through egui output", text.len());
        ctx.copy_text(text.to_owned());
        true
    }
}
