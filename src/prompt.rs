use std::io::Write;

use anyhow::{bail, Context, Result};

/// Outcome of the description-override prompt in most-recent-first mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionChoice {
  /// Keep the default built from the commit messages.
  Keep,
  /// Replace it with user-supplied text.
  Custom(String),
  /// Emit no description section at all.
  Skip,
}

/// Synchronous request/response seam for everything interactive, so tests
/// can script answers instead of driving a terminal.
pub trait Prompter {
  fn choose_branch(&mut self, branches: &[String]) -> Result<String>;
  fn description_override(&mut self, default: &str) -> Result<DescriptionChoice>;
  fn ask_editor(&mut self) -> Result<String>;
}

pub struct TerminalPrompter;

impl TerminalPrompter {
  fn read_line(&self) -> Result<String> {
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).context("reading from stdin")?;
    Ok(line.trim().to_string())
  }

  fn ask(&self, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush().context("flushing stdout")?;
    self.read_line()
  }
}

impl Prompter for TerminalPrompter {
  fn choose_branch(&mut self, branches: &[String]) -> Result<String> {
    if branches.is_empty() {
      bail!("no remote branches to choose from");
    }
    loop {
      println!("HEAD has no upstream branch. Pick one:");
      for (i, branch) in branches.iter().enumerate() {
        println!("  {}) {}", i + 1, branch);
      }
      let answer = self.ask("branch number: ")?;
      if let Ok(n) = answer.parse::<usize>() {
        if (1..=branches.len()).contains(&n) {
          return Ok(branches[n - 1].clone());
        }
      }
      println!("enter a number between 1 and {}", branches.len());
    }
  }

  fn description_override(&mut self, default: &str) -> Result<DescriptionChoice> {
    println!("Default description:\n{}", default);
    let answer =
      self.ask("Write your own description? [y = write one, s = skip, anything else keeps it] ")?;
    match answer.as_str() {
      "y" | "Y" => loop {
        let text = self.ask("description: ")?;
        if !text.is_empty() {
          return Ok(DescriptionChoice::Custom(text));
        }
      },
      "s" | "S" => Ok(DescriptionChoice::Skip),
      // any other key keeps the default, including an empty line
      _ => Ok(DescriptionChoice::Keep),
    }
  }

  fn ask_editor(&mut self) -> Result<String> {
    loop {
      let answer = self.ask("editor command for commit selection (e.g. 'vi'): ")?;
      if !answer.is_empty() {
        return Ok(answer);
      }
    }
  }
}

/// Replays canned answers; the test-side counterpart of `TerminalPrompter`.
#[cfg(test)]
pub struct ScriptedPrompter {
  pub branch: Option<String>,
  pub description: DescriptionChoice,
  pub editor: Option<String>,
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
  fn choose_branch(&mut self, _branches: &[String]) -> Result<String> {
    self.branch.clone().ok_or_else(|| anyhow::anyhow!("no scripted branch"))
  }

  fn description_override(&mut self, _default: &str) -> Result<DescriptionChoice> {
    Ok(self.description.clone())
  }

  fn ask_editor(&mut self) -> Result<String> {
    self.editor.clone().ok_or_else(|| anyhow::anyhow!("no scripted editor"))
  }
}
