use anyhow::{Context, Result};
use arboard::Clipboard;

/// Publish the rendered comment to the system clipboard. Failure is fatal;
/// nothing else persists the comment.
pub fn copy(text: &str) -> Result<()> {
  let mut clipboard = Clipboard::new().context("opening system clipboard")?;
  clipboard.set_text(text).context("writing comment to clipboard")?;
  Ok(())
}
