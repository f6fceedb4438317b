use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::prompt::Prompter;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
  editor: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|d| d.join("jirac").join("config.toml"))
}

/// The editor command used for interactive commit selection.
///
/// Resolution order: `JIRAC_EDITOR`, `VISUAL`, `EDITOR`, the persisted
/// config file, and finally a first-run prompt whose answer is written back
/// so later runs skip it.
pub fn editor_command(prompter: &mut dyn Prompter) -> Result<String> {
  for var in ["JIRAC_EDITOR", "VISUAL", "EDITOR"] {
    if let Ok(value) = std::env::var(var) {
      if !value.trim().is_empty() {
        return Ok(value);
      }
    }
  }

  let path = config_path().context("no config directory on this platform")?;
  if let Ok(text) = std::fs::read_to_string(&path) {
    let cfg: ConfigFile =
      toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    if let Some(editor) = cfg.editor.filter(|e| !e.trim().is_empty()) {
      return Ok(editor);
    }
  }

  let editor = prompter.ask_editor()?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
  }
  let cfg = ConfigFile { editor: Some(editor.clone()) };
  std::fs::write(&path, toml::to_string_pretty(&cfg)?)
    .with_context(|| format!("writing {}", path.display()))?;
  log::info!("saved editor preference to {}", path.display());

  Ok(editor)
}
