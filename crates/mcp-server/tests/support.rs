#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

fn locate_bin(name: &str, compiled: Option<&'static str>) -> Result<PathBuf> {
    if let Some(path) = compiled {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` -> `.../target/{debug|release}/<name>`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for profile in ["debug", "release"] {
        let candidate = repo_root.join("target").join(profile).join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate {name} binary; build with: cargo build -p toolgate-mcp --bins")
}

pub fn locate_toolgate_mcp_bin() -> Result<PathBuf> {
    locate_bin("toolgate-mcp", option_env!("CARGO_BIN_EXE_toolgate-mcp"))
}

pub fn locate_fake_upstream_bin() -> Result<PathBuf> {
    locate_bin(
        "toolgate-fake-upstream",
        option_env!("CARGO_BIN_EXE_toolgate-fake-upstream"),
    )
}

/// Write a `config.yaml` that fronts the fake upstream with the given whitelist.
pub fn write_config(dir: &Path, allowed: &[&str]) -> Result<PathBuf> {
    let upstream = locate_fake_upstream_bin()?;
    let mut yaml = String::from("allowedTools:\n");
    for name in allowed {
        yaml.push_str(&format!("  - {name}\n"));
    }
    yaml.push_str(&format!(
        "upstream:\n  command: {:?}\n  args: []\n  callTimeoutMs: 10000\n",
        upstream.to_string_lossy()
    ));

    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).context("write config.yaml")?;
    Ok(path)
}
