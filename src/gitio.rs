use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::error::Fatal;
use crate::util::run_git;

/// Working-tree root containing `cwd`, or `NotAGitRepository`.
pub fn toplevel(cwd: &Path) -> Result<PathBuf> {
  let out = Command::new("git")
    .args(["rev-parse", "--show-toplevel"])
    .current_dir(cwd)
    .output()
    .context("spawning git rev-parse")?;

  if !out.status.success() {
    return Err(Fatal::NotAGitRepository.into());
  }
  let root = String::from_utf8_lossy(&out.stdout).trim().to_string();
  if root.is_empty() {
    return Err(Fatal::NotAGitRepository.into());
  }
  Ok(PathBuf::from(root))
}

/// Upstream tracking branch of HEAD, e.g. `origin/main`. `None` when HEAD
/// has no upstream configured (the caller then prompts for a branch).
pub fn upstream_branch(repo: &Path) -> Result<Option<String>> {
  let out = Command::new("git")
    .args(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{upstream}"])
    .current_dir(repo)
    .output()
    .context("spawning git rev-parse @{upstream}")?;

  if !out.status.success() {
    return Ok(None);
  }
  let name = String::from_utf8_lossy(&out.stdout).trim().to_string();
  Ok((!name.is_empty()).then_some(name))
}

/// All remote branch names, minus the symbolic `<remote>/HEAD` entries.
pub fn remote_branches(repo: &Path) -> Result<Vec<String>> {
  let out = run_git(
    repo,
    &["for-each-ref".into(), "refs/remotes".into(), "--format=%(refname:short)".into()],
  )?;
  Ok(
    out
      .lines()
      .map(str::trim)
      .filter(|l| !l.is_empty() && l.contains('/') && !l.ends_with("/HEAD"))
      .map(str::to_string)
      .collect(),
  )
}

/// The local git identity used for all committer filtering.
pub fn user_name(repo: &Path) -> Result<String> {
  let out = run_git(repo, &["config".into(), "user.name".into()])
    .context("git user.name is not configured")?;
  let name = out.trim().to_string();
  if name.is_empty() {
    bail!("git user.name is not configured");
  }
  Ok(name)
}

/// Short hashes on `branch` committed by `committer`, most recent first,
/// optionally capped and filtered by a case-sensitive message pattern.
pub fn log_hashes(
  repo: &Path,
  branch: &str,
  committer: &str,
  max: Option<u32>,
  grep: Option<&str>,
) -> Result<Vec<String>> {
  let mut args: Vec<String> = vec![
    "log".into(),
    "--pretty=%h".into(),
    format!("--committer={}", committer),
  ];
  if let Some(n) = max {
    args.push(format!("-n{}", n));
  }
  if let Some(pattern) = grep {
    args.push(format!("--grep={}", pattern));
  }
  args.push(branch.into());

  let out = run_git(repo, &args)?;
  Ok(out.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
}

/// Short hash to full 40-character hash.
pub fn full_hash(repo: &Path, short: &str) -> Result<String> {
  let out = run_git(
    repo,
    &["rev-parse".into(), "--verify".into(), format!("{}^{{commit}}", short)],
  )
  .with_context(|| format!("resolving commit '{}'", short))?;
  Ok(out.trim().to_string())
}

pub fn subject(repo: &Path, hash: &str) -> Result<String> {
  show_format(repo, hash, "%s").map(|s| s.trim().to_string())
}

/// Everything after the first blank line of the message.
pub fn body(repo: &Path, hash: &str) -> Result<String> {
  show_format(repo, hash, "%b").map(|s| s.trim_end().to_string())
}

/// Subject and body combined.
pub fn full_message(repo: &Path, hash: &str) -> Result<String> {
  show_format(repo, hash, "%B").map(|s| s.trim_end().to_string())
}

fn show_format(repo: &Path, hash: &str, fmt: &str) -> Result<String> {
  run_git(
    repo,
    &["show".into(), "-s".into(), format!("--format={}", fmt), hash.into()],
  )
}
