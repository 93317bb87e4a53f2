//! Path-entry file picker for the terminal UI.
//!
//! Plays the role of an `accept="image/*"` file input: only existing files
//! with an image extension come back as a selection. Esc yields no file.

use anyhow::{bail, Result};
use expense_core::SelectedImage;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "heic", "heif", "avif", "svg",
    "ico",
];

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Check a typed path the way a native picker would filter it.
pub fn accept_path(input: &str) -> Result<SelectedImage> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("no path entered");
    }
    let path = expand_home(trimmed);
    if !path.is_file() {
        bail!("not found: {}", path.display());
    }
    if !is_image_path(&path) {
        bail!("not an image: {}", path.display());
    }
    Ok(SelectedImage::new(path))
}

fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

/// What the prompt decided after a key press
#[derive(Debug)]
pub enum PickerOutcome {
    /// Still typing (or the last attempt was rejected)
    Open,
    Picked(SelectedImage),
    Cancelled,
}

#[derive(Debug, Default)]
pub struct PathPrompt {
    pub input: String,
    /// Why the last submit was refused
    pub error: Option<String>,
}

impl PathPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.error = None;
        self.input.push(c);
    }

    pub fn pop(&mut self) {
        self.error = None;
        self.input.pop();
    }

    pub fn submit(&mut self) -> PickerOutcome {
        match accept_path(&self.input) {
            Ok(image) => PickerOutcome::Picked(image),
            Err(e) => {
                log::debug!("picker rejected {:?}: {e}", self.input);
                self.error = Some(e.to_string());
                PickerOutcome::Open
            }
        }
    }

    pub fn cancel(&mut self) -> PickerOutcome {
        PickerOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_image_path() {
        assert!(is_image_path(Path::new("a/b/receipt.jpg")));
        assert!(is_image_path(Path::new("RECEIPT.JPEG")));
        assert!(is_image_path(Path::new("scan.Png")));
        assert!(is_image_path(Path::new("x.webp")));
        assert!(!is_image_path(Path::new("statement.pdf")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("png")));
    }

    #[test]
    fn test_accept_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("lunch.JPG");
        fs::write(&p, b"not really a jpeg").unwrap();
        let img = accept_path(p.to_str().unwrap()).unwrap();
        assert_eq!(img.display_name(), "lunch.JPG");
        assert_eq!(img.path(), p.as_path());
    }

    #[test]
    fn test_reject_missing_and_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        assert!(accept_path(missing.to_str().unwrap()).is_err());

        let txt = dir.path().join("receipt.txt");
        fs::write(&txt, "x").unwrap();
        let err = accept_path(txt.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("not an image"));

        // directories named like images are not files
        let d = dir.path().join("album.png");
        fs::create_dir(&d).unwrap();
        assert!(accept_path(d.to_str().unwrap()).is_err());

        assert!(accept_path("   ").is_err());
    }

    #[test]
    fn test_prompt_flow() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("fuel.png");
        fs::write(&p, b"").unwrap();

        let mut prompt = PathPrompt::new();
        prompt.push('x');
        assert!(matches!(prompt.submit(), PickerOutcome::Open));
        assert!(prompt.error.is_some());

        prompt.pop();
        assert!(prompt.error.is_none());
        for c in p.to_str().unwrap().chars() {
            prompt.push(c);
        }
        match prompt.submit() {
            PickerOutcome::Picked(img) => assert_eq!(img.display_name(), "fuel.png"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(prompt.cancel(), PickerOutcome::Cancelled));
    }
}
