use std::path::Path;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;

mod cli;
mod clipboard;
mod config;
mod deps;
mod error;
mod gitio;
mod model;
mod pom;
mod prompt;
mod render;
mod select;
mod util;

use crate::cli::{Cli, RunConfig};
use crate::error::Fatal;
use crate::model::ProjectInfo;
use crate::prompt::{Prompter, TerminalPrompter};

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      // help/version are a success; real usage errors exit 1
      let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
      };
      let _ = err.print();
      std::process::exit(code);
    }
  };

  if cli.gen_man {
    match util::render_man_page::<Cli>() {
      Ok(page) => {
        print!("{}", page);
        return;
      }
      Err(err) => {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
      }
    }
  }

  let cfg = match cli::normalize(cli) {
    Ok(cfg) => cfg,
    Err(err) => {
      eprintln!("error: {:#}", err);
      std::process::exit(1);
    }
  };

  // Silent mode gates every progress line; errors always get through.
  env_logger::Builder::new()
    .filter_level(if cfg.silent { LevelFilter::Error } else { LevelFilter::Info })
    .format_timestamp(None)
    .format_target(false)
    .init();

  if let Err(err) = run(&cfg) {
    log::error!("{:#}", err);
    std::process::exit(1);
  }
}

fn run(cfg: &RunConfig) -> Result<()> {
  let mut prompter = TerminalPrompter;

  deps::check(&["git"])?;

  let root = gitio::toplevel(Path::new("."))?;
  let pom_path = root.join("pom.xml");
  if !pom_path.is_file() {
    return Err(Fatal::NotAMavenProject(root.display().to_string()).into());
  }
  let info = pom::read_pom(&pom_path)?;
  let project = ProjectInfo {
    name: info.name,
    version: info.version,
    scm_url: info.scm_url,
    pom_path,
    root_dir: root,
  };
  log::info!(
    "project {} {} ({})",
    project.name,
    project.version,
    project.pom_path.display()
  );

  let branch = match gitio::upstream_branch(&project.root_dir)? {
    Some(branch) => branch,
    None => prompter.choose_branch(&gitio::remote_branches(&project.root_dir)?)?,
  };
  log::info!("branch {}", branch);

  let author = gitio::user_name(&project.root_dir)?;

  let editor = if cfg.interactive() {
    let editor = config::editor_command(&mut prompter)?;
    if let Some(program) = editor.split_whitespace().next() {
      deps::check(&[program])?;
    }
    editor
  } else {
    String::new()
  };

  let hashes = select::select_commits(cfg, &project.root_dir, &branch, &author, &editor)?;
  let commits = render::resolve_commits(&project.root_dir, &hashes)?;
  for commit in &commits {
    log::info!("picked {} {}", commit.short_hash, commit.subject);
  }
  let comment = render::render(cfg.print_mode, &project, &branch, &commits, &mut prompter)?;

  if cfg.stdout {
    print!("{}", comment);
  } else {
    clipboard::copy(&comment)?;
    log::info!("comment copied to clipboard");
  }

  Ok(())
}
