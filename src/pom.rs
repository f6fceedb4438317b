use std::path::Path;

use anyhow::{Context, Result};

use crate::error::Fatal;

#[derive(Debug, Clone)]
pub struct PomInfo {
  pub name: String,
  pub version: String,
  pub scm_url: String,
}

/// Extract project name, version and SCM URL from a Maven POM.
///
/// Lookup is structural, namespace-agnostic (POMs may or may not carry the
/// Maven xmlns). The version falls back to `<parent><version>` the way Maven
/// itself inherits it; the SCM URL prefers `<scm><url>` and falls back to
/// `<scm><connection>`, taken verbatim. Each missing field is a distinct
/// fatal error naming the field.
pub fn read_pom(path: &Path) -> Result<PomInfo> {
  let text =
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
  let doc =
    roxmltree::Document::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
  let project = doc.root_element();
  let shown = path.display().to_string();

  let name = child_text(project, "name").ok_or(Fatal::MissingName(shown.clone()))?;

  let version = child_text(project, "version")
    .or_else(|| child_elem(project, "parent").and_then(|p| child_text(p, "version")))
    .ok_or(Fatal::MissingVersion(shown.clone()))?;

  let scm_url = child_elem(project, "scm")
    .and_then(|scm| child_text(scm, "url").or_else(|| child_text(scm, "connection")))
    .ok_or(Fatal::MissingScmUrl(shown))?;

  Ok(PomInfo { name, version, scm_url })
}

fn child_elem<'a, 'input>(
  node: roxmltree::Node<'a, 'input>,
  tag: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
  node
    .children()
    .find(|n| n.is_element() && n.tag_name().name() == tag)
}

fn child_text(node: roxmltree::Node, tag: &str) -> Option<String> {
  child_elem(node, tag)
    .and_then(|n| n.text())
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
}
