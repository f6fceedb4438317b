use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "jirac",
    version,
    about = "Build an issue-tracker comment from picked Git commits of a Maven project",
    long_about = None
)]
pub struct Cli {
  /// Take the N most recent of your commits without opening an editor
  #[arg(long, short = 'n')]
  pub number: Option<u32>,

  /// Comment layout: 0 = most-recent-first with a description section, 1 = oldest-first per-commit blocks
  #[arg(long = "print-mode", short = 'p', value_enum, default_value_t = PrintMode::MostRecentFirst)]
  pub print_mode: PrintMode,

  /// Suppress progress output
  #[arg(long, short = 's')]
  pub silent: bool,

  /// Only select commits whose message matches PATTERN (case-sensitive)
  #[arg(long, short = 'g')]
  pub grep: Option<String>,

  /// Print the comment to stdout instead of copying it to the clipboard
  #[arg(long, hide = true)]
  pub stdout: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintMode {
  /// Header and link list, most recent first, plus a description section
  #[value(name = "0")]
  MostRecentFirst,
  /// One block per commit, oldest first
  #[value(name = "1")]
  OldestFirst,
}

/// Validated run configuration; immutable after `normalize`.
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub number: Option<u32>,
  pub print_mode: PrintMode,
  pub silent: bool,
  pub grep: Option<String>,
  pub stdout: bool,
}

impl RunConfig {
  /// Commit selection happens in the editor only when no filter flag is set.
  pub fn interactive(&self) -> bool {
    self.number.is_none() && self.grep.is_none()
  }
}

pub fn normalize(cli: Cli) -> Result<RunConfig> {
  if let Some(pattern) = &cli.grep {
    if pattern.trim().is_empty() {
      bail!("--grep pattern must not be empty");
    }
  }

  Ok(RunConfig {
    number: cli.number,
    print_mode: cli.print_mode,
    silent: cli.silent,
    grep: cli.grep,
    stdout: cli.stdout,
  })
}
