use anyhow::Result;

use crate::error::Fatal;
use crate::util::find_on_path;

/// Verify each required external tool resolves on PATH before any work
/// starts. The first missing tool is fatal and names itself.
pub fn check(tools: &[&str]) -> Result<()> {
  for tool in tools {
    log::info!("checking for {}...", tool);
    if find_on_path(tool).is_none() {
      return Err(Fatal::DependencyMissing((*tool).to_string()).into());
    }
  }
  Ok(())
}
