use anyhow::{Context, Result};
use expense_core::{ScanSession, View};
use std::path::PathBuf;

use crate::picker::accept_path;

/// Drive one upload without a terminal UI and report what the widget shows.
pub async fn run_simulate(session: &mut ScanSession, image: Option<PathBuf>) -> Result<()> {
    let file = match image {
        Some(p) => {
            let s = p.to_str().context("image path is not valid UTF-8")?;
            Some(accept_path(s)?)
        }
        None => None,
    };

    println!("view: {}", session.view().label());
    session.upload(file);
    println!("view: {}", session.view().label());

    session.settle().await;

    if let View::Details { receipt, .. } = session.view() {
        println!("view: {}", session.view().label());
        println!("{}", serde_json::to_string_pretty(receipt)?);
    }

    Ok(())
}
