use std::path::PathBuf;

/// Project metadata resolved once at startup from the POM and the
/// repository root; read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
  pub name: String,
  pub version: String,
  pub scm_url: String,
  pub pom_path: PathBuf,
  pub root_dir: PathBuf,
}

/// A selected commit, resolved from git when rendering.
#[derive(Debug, Clone)]
pub struct CommitRef {
  pub short_hash: String,
  pub full_hash: String,
  pub subject: String,
  pub body: String,
  pub full_message: String,
}
