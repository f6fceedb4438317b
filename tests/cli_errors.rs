use assert_cmd::Command;
use predicates::prelude::*;

mod common;

fn jirac() -> Command {
  Command::cargo_bin("jirac").unwrap()
}

#[test]
fn help_exits_zero_and_shows_usage() {
  jirac().arg("--help").assert().code(0).stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_exits_one() {
  let out = jirac().arg("--frobnicate").output().unwrap();
  assert_eq!(out.status.code(), Some(1));
}

#[test]
fn bad_number_exits_one() {
  let out = jirac().args(["-n", "nope"]).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
}

#[test]
fn bad_print_mode_exits_one() {
  let out = jirac().args(["-p", "7"]).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
}

#[test]
fn empty_grep_exits_one() {
  let out = jirac().args(["-g", " "]).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("must not be empty"));
}

#[test]
fn outside_a_git_repo_is_fatal() {
  let dir = tempfile::TempDir::new().unwrap();
  let out = jirac().args(["-n", "1", "--stdout"]).current_dir(dir.path()).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("not inside a git repository"));
}

#[test]
fn repo_without_pom_is_not_a_maven_project() {
  let dir = tempfile::TempDir::new().unwrap();
  common::git(dir.path(), &["init", "-q", "-b", "main"]);
  let out = jirac().args(["-n", "1", "--stdout"]).current_dir(dir.path()).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("not a Maven project"));
}

#[test]
fn pom_without_name_is_fatal() {
  let fixture = common::fixture_repo();
  let work = common::workdir(&fixture);
  std::fs::write(
    work.join("pom.xml"),
    "<project><version>1.0</version><scm><url>https://x</url></scm></project>",
  )
  .unwrap();

  let out = jirac().args(["-n", "1", "--stdout"]).current_dir(&work).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("no project name found"));
}

#[test]
fn zero_match_grep_exits_one_and_names_the_pattern() {
  let fixture = common::fixture_repo();
  let work = common::workdir(&fixture);

  let out = jirac()
    .args(["-g", "zz-no-such-message", "--stdout"])
    .current_dir(&work)
    .output()
    .unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("zz-no-such-message"));
}

#[test]
fn committer_with_no_commits_is_fatal() {
  let fixture = common::fixture_repo();
  let work = common::workdir(&fixture);
  common::git(&work, &["config", "user.name", "Somebody Else"]);

  let out = jirac().args(["-n", "1", "--stdout"]).current_dir(&work).output().unwrap();
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("no pushed commits"));
}

#[test]
fn silent_mode_suppresses_progress_lines() {
  let fixture = common::fixture_repo();
  let work = common::workdir(&fixture);

  let out = jirac()
    .args(["-s", "-g", "zz-no-such-message", "--stdout"])
    .current_dir(&work)
    .output()
    .unwrap();
  assert_eq!(out.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(!stderr.contains("checking for"));
  assert!(stderr.contains("zz-no-such-message"));
}
