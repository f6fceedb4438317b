use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::cli::RunConfig;
use crate::error::Fatal;
use crate::gitio;

/// Lines in the selection file must start with this marker to be picked.
const PICK_MARKER: &str = "x ";
/// How many recent commits the selection file offers.
const PICK_LIST_LEN: u32 = 10;

/// Resolve the short hashes to describe, most recent first.
///
/// With `--number`/`--grep` the log query answers directly; otherwise the
/// user marks lines in an editor round-trip. Either way the run fails first
/// when the committer has no commits on the branch at all.
pub fn select_commits(
  cfg: &RunConfig,
  repo: &Path,
  branch: &str,
  author: &str,
  editor: &str,
) -> Result<Vec<String>> {
  if gitio::log_hashes(repo, branch, author, Some(1), None)?.is_empty() {
    return Err(
      Fatal::NoPushedCommits { author: author.to_string(), branch: branch.to_string() }.into(),
    );
  }

  if !cfg.interactive() {
    let hashes = gitio::log_hashes(repo, branch, author, cfg.number, cfg.grep.as_deref())?;
    if hashes.is_empty() {
      if let Some(pattern) = &cfg.grep {
        return Err(Fatal::NoMatchingCommits(pattern.clone()).into());
      }
    }
    return Ok(hashes);
  }

  interactive(repo, branch, author, editor)
}

fn interactive(repo: &Path, branch: &str, author: &str, editor: &str) -> Result<Vec<String>> {
  let recent = gitio::log_hashes(repo, branch, author, Some(PICK_LIST_LEN), None)?;

  let mut listing =
    String::from("# Mark the commits to include by putting 'x ' at the start of the line.\n");
  for hash in &recent {
    let subject = gitio::subject(repo, hash)?;
    listing.push_str(&format!("{} {}\n", hash, subject));
  }

  // NamedTempFile is created owner-only and removed on drop.
  loop {
    let file = tempfile::Builder::new()
      .prefix("jirac-pick-")
      .suffix(".txt")
      .tempfile()
      .context("creating selection file")?;
    std::fs::write(file.path(), &listing)
      .with_context(|| format!("writing {}", file.path().display()))?;

    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or("vi");
    let status = Command::new(program)
      .args(words)
      .arg(file.path())
      .status()
      .with_context(|| format!("launching editor '{}'", editor))?;
    if !status.success() {
      bail!("editor '{}' exited with an error", editor);
    }

    let edited = std::fs::read_to_string(file.path())
      .with_context(|| format!("rereading {}", file.path().display()))?;
    let picked = parse_marked(&edited);
    if !picked.is_empty() {
      return Ok(picked);
    }
    log::info!("no commits marked; reopening the selection file");
  }
}

/// Hashes from lines marked `x <hash> ...`, in file order.
fn parse_marked(text: &str) -> Vec<String> {
  text
    .lines()
    .filter_map(|line| line.strip_prefix(PICK_MARKER))
    .filter_map(|rest| rest.split_whitespace().next())
    .map(str::to_string)
    .collect()
}
