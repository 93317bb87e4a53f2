use anyhow::{anyhow, Context, Result};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::LogSection;

/// Route `log` records to a file; the terminal belongs to the UI.
pub fn init(section: &LogSection, home: &Path) -> Result<PathBuf> {
    let level = parse_level(&section.level)?;
    let path = resolve_log_path(&section.file, home);
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    WriteLogger::init(level, LogConfig::default(), file).context("install logger")?;
    Ok(path)
}

pub fn parse_level(s: &str) -> Result<LevelFilter> {
    s.trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("unknown log level {s:?}"))
}

fn resolve_log_path(file: &str, home: &Path) -> PathBuf {
    let p = PathBuf::from(file);
    if p.is_absolute() { p } else { home.join(p) }
}
