use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use clap::CommandFactory;

pub fn run_git(repo: &Path, args: &[String]) -> Result<String> {
  let out = Command::new("git")
    .args(args)
    .current_dir(repo)
    .output()
    .with_context(|| format!("spawning git {:?}", args))?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::bail!("git {:?} failed: {}", args, stderr.trim())
  }
}

/// Resolve a bare command name against PATH. Names containing a path
/// separator are checked directly.
pub fn find_on_path(tool: &str) -> Option<PathBuf> {
  let as_path = Path::new(tool);
  if as_path.components().count() > 1 {
    return as_path.is_file().then(|| as_path.to_path_buf());
  }

  let path = std::env::var_os("PATH")?;
  for dir in std::env::split_paths(&path) {
    let candidate = dir.join(tool);
    if candidate.is_file() {
      return Some(candidate);
    }
  }
  None
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[test]
  fn run_git_failure_is_error() {
    let err = run_git(Path::new("."), &["definitely-not-a-real-subcommand".into()]).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("git"));
  }

  #[test]
  fn find_on_path_locates_sh() {
    assert!(find_on_path("sh").is_some());
  }

  #[test]
  fn find_on_path_misses_nonsense() {
    assert!(find_on_path("definitely-not-a-real-tool-xyz").is_none());
  }

  #[derive(Parser, Debug)]
  #[command(name = "dummy", version, about = "Dummy CLI", long_about = None)]
  struct DummyCli;

  #[test]
  fn render_man_page_produces_troff_text() {
    let page = render_man_page::<DummyCli>().expect("render manpage");
    assert!(page.contains(".TH"));
    assert!(page.to_lowercase().contains("dummy"));
  }
}
