use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn expense_scan_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".expense-scan"))
}

pub fn ensure_expense_scan_home() -> Result<PathBuf> {
    let dir = expense_scan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
