use std::path::{Path, PathBuf};
use std::process::Command;

#[allow(dead_code)]
pub fn git(repo: &Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

#[allow(dead_code)]
pub fn commit(repo: &Path, file: &str, contents: &str, message: &str) {
  std::fs::write(repo.join(file), contents).unwrap();
  git(repo, &["add", "."]);
  git(repo, &["commit", "-q", "-m", message]);
}

#[allow(dead_code)]
pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>billing</artifactId>
  <version>1.4.2</version>
  <name>Billing Service</name>
  <scm>
    <url>https://git.example.com/billing</url>
    <connection>scm:git:https://git.example.com/billing.git</connection>
  </scm>
</project>
"#;

/// A Maven-flavored fixture: a working repo with three pushed commits by
/// "Fixture Bot" plus a bare "origin" so HEAD has a real upstream
/// (origin/main), which is what jirac resolves non-interactively.
#[allow(dead_code)]
pub fn fixture_repo() -> tempfile::TempDir {
  let dir = tempfile::TempDir::new().unwrap();
  let work = dir.path().join("work");
  let remote = dir.path().join("remote.git");
  std::fs::create_dir_all(&work).unwrap();

  let status = Command::new("git")
    .args(["init", "-q", "--bare"])
    .arg(&remote)
    .status()
    .unwrap();
  assert!(status.success());

  git(&work, &["init", "-q", "-b", "main"]);
  git(&work, &["config", "user.name", "Fixture Bot"]);
  git(&work, &["config", "user.email", "fixture@example.com"]);
  git(&work, &["config", "commit.gpgsign", "false"]);

  std::fs::write(work.join("pom.xml"), POM).unwrap();
  git(&work, &["add", "."]);
  git(&work, &["commit", "-q", "-m", "chore: scaffold project"]);

  commit(
    &work,
    "README.md",
    "readme\n",
    "docs: add readme\n\nFirst pass at the\nproject readme.",
  );
  commit(&work, "flow.txt", "code\n", "feat: add payment flow");

  git(&work, &["remote", "add", "origin", remote.to_str().unwrap()]);
  git(&work, &["push", "-q", "-u", "origin", "main"]);

  dir
}

#[allow(dead_code)]
pub fn workdir(fixture: &tempfile::TempDir) -> PathBuf {
  fixture.path().join("work")
}
