use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::schema::Config;

const HEADER: &str = "\
# Harambee Trust Simulator configuration
#
# scoring effects: \"+N\" / \"-N\" / \"xN\", optionally \"per match\"
# scoring ranges:  \"<N\", \"<=N\", \">N\", \">=N\", \"N\", \"N-M\"
";

/// Write the default configuration to `path` (or the default location).
///
/// Refuses to overwrite an existing file unless `force` is set. The write is
/// atomic, so an interrupted init never leaves a truncated config behind.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p,
        None => super::get_config_path()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    ensure_parent_dir(&path)?;

    let yaml = serde_saphyr::to_string(&Config::default())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes())
        .context("Failed to write config header")?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(path)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
        }
    }
    Ok(())
}
