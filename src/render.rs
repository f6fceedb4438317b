use std::path::Path;

use anyhow::Result;

use crate::cli::PrintMode;
use crate::gitio;
use crate::model::{CommitRef, ProjectInfo};
use crate::prompt::{DescriptionChoice, Prompter};

/// Resolve each selected short hash into a full `CommitRef`, preserving the
/// incoming (most-recent-first) order.
pub fn resolve_commits(repo: &Path, short_hashes: &[String]) -> Result<Vec<CommitRef>> {
  short_hashes
    .iter()
    .map(|short| {
      let full = gitio::full_hash(repo, short)?;
      Ok(CommitRef {
        short_hash: short.clone(),
        subject: gitio::subject(repo, &full)?,
        body: gitio::body(repo, &full)?,
        full_message: gitio::full_message(repo, &full)?,
        full_hash: full,
      })
    })
    .collect()
}

/// Assemble the comment for the selected commits in the configured layout.
/// The `*bold*` / `** sub-bullet` / `_italic_` markup is what the target
/// tracker parses; emit it verbatim.
pub fn render(
  mode: PrintMode,
  project: &ProjectInfo,
  branch: &str,
  commits: &[CommitRef],
  prompter: &mut dyn Prompter,
) -> Result<String> {
  match mode {
    PrintMode::MostRecentFirst => most_recent_first(project, branch, commits, prompter),
    PrintMode::OldestFirst => Ok(oldest_first(project, commits)),
  }
}

/// Header plus one link line per commit, newest first, then an optional
/// description section the user may keep, replace or skip.
fn most_recent_first(
  project: &ProjectInfo,
  branch: &str,
  commits: &[CommitRef],
  prompter: &mut dyn Prompter,
) -> Result<String> {
  let mut out = String::new();
  out.push_str(&format!("*Project:* {}\n", project.name));
  out.push_str(&format!("*Branch:* {}\n", branch));
  out.push_str(&format!("*Version:* {}\n", project.version));
  out.push_str("*Commits:*\n");

  let mut default_description = String::new();
  for commit in commits {
    out.push_str(&format!("** {}/commit/{}\n", project.scm_url, commit.full_hash));
    if !default_description.is_empty() {
      default_description.push_str("\n\n");
    }
    default_description.push_str(commit.full_message.trim());
  }

  let description = match prompter.description_override(&default_description)? {
    DescriptionChoice::Keep => default_description,
    DescriptionChoice::Custom(text) => text,
    DescriptionChoice::Skip => String::new(),
  };
  if !description.is_empty() {
    out.push_str("*Description:*\n");
    out.push_str(&reflow(&description));
    out.push('\n');
  }

  Ok(out)
}

/// One block per commit, oldest first: italic subject, link line, and the
/// reflowed body when the commit has one.
fn oldest_first(project: &ProjectInfo, commits: &[CommitRef]) -> String {
  let mut out = String::new();
  for commit in commits.iter().rev() {
    out.push_str(&format!("_{}_\n", commit.subject));
    out.push_str(&format!("** {}/commit/{}\n", project.scm_url, commit.full_hash));
    let body = commit.body.trim();
    if !body.is_empty() {
      out.push_str(&reflow(body));
      out.push('\n');
    }
    out.push('\n');
  }
  out
}

/// Paragraph-preserving reflow: blank lines separate paragraphs, and lines
/// inside a paragraph are joined with single spaces instead of hard breaks.
pub fn reflow(text: &str) -> String {
  let mut paragraphs: Vec<String> = Vec::new();
  let mut current: Vec<&str> = Vec::new();

  for line in text.lines() {
    let line = line.trim();
    if line.is_empty() {
      if !current.is_empty() {
        paragraphs.push(current.join(" "));
        current.clear();
      }
    } else {
      current.push(line);
    }
  }
  if !current.is_empty() {
    paragraphs.push(current.join(" "));
  }

  paragraphs.join("\n\n")
}
