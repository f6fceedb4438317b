use thiserror::Error;

/// Fatal conditions with a dedicated user-facing message.
///
/// Every variant aborts the run. They travel inside `anyhow::Error` up to
/// `main`, which logs them at ERROR and exits 1.
#[derive(Debug, Error)]
pub enum Fatal {
  #[error("required tool '{0}' was not found on PATH")]
  DependencyMissing(String),

  #[error("not inside a git repository")]
  NotAGitRepository,

  #[error("no pom.xml in {0}; not a Maven project")]
  NotAMavenProject(String),

  #[error("no project name found in {0}")]
  MissingName(String),

  #[error("no project version found in {0}")]
  MissingVersion(String),

  #[error("no scm url or connection found in {0}")]
  MissingScmUrl(String),

  #[error("no commits matched pattern '{0}'")]
  NoMatchingCommits(String),

  #[error("no pushed commits by '{author}' on branch '{branch}'")]
  NoPushedCommits { author: String, branch: String },
}
