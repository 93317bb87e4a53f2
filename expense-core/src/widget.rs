//! UploadWidget — the receipt scanner's state machine.
//!
//! States (derived, see `Phase`):
//! - Idle:    no image
//! - Loading: image chosen, simulated delay in flight
//! - Ready:   delay elapsed, receipt assigned
//!
//! The widget does not own a timer. `upload` hands back a `PendingScan`
//! token; whoever runs the delay passes the token back to `complete`.
//! Each upload and each clear bumps the generation, so a token from a
//! superseded upload is ignored when it finally arrives.

use crate::receipt::ExtractedReceipt;
use crate::view::{derive_view, View};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed length of the simulated analysis
pub const SCAN_DELAY: Duration = Duration::from_millis(1500);

/// Reference to the user's chosen image file. Never opened or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    path: PathBuf,
    display_name: String,
}

impl SelectedImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short name for previews (the file name)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Coarse lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Token for one scheduled scan. Issued by `upload`, redeemed by `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the scan never completes unless the token is handed to a timer"]
pub struct PendingScan {
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct UploadWidget {
    selected_image: Option<SelectedImage>,
    extracted: Option<ExtractedReceipt>,
    processing: bool,
    generation: u64,
}

impl UploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    pub fn extracted(&self) -> Option<&ExtractedReceipt> {
        self.extracted.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        match (&self.selected_image, self.processing) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::Loading,
            (Some(_), false) => Phase::Ready,
        }
    }

    pub fn view(&self) -> View<'_> {
        derive_view(
            self.selected_image.as_ref(),
            self.processing,
            self.extracted.as_ref(),
        )
    }

    /// User picked a file (or cancelled the picker with `None`).
    ///
    /// Returns the token for the new scan, or `None` when nothing changed.
    /// Any previous result is dropped before the new scan starts.
    pub fn upload(&mut self, file: Option<SelectedImage>) -> Option<PendingScan> {
        let image = file?;
        self.generation += 1;
        info!(
            "upload {} (generation {})",
            image.path().display(),
            self.generation
        );
        self.selected_image = Some(image);
        self.extracted = None;
        self.processing = true;
        Some(PendingScan {
            generation: self.generation,
        })
    }

    /// Timer fired for `scan`. Applies `receipt` only if `scan` is still current.
    ///
    /// Returns whether the state changed.
    pub fn complete(&mut self, scan: PendingScan, receipt: ExtractedReceipt) -> bool {
        if scan.generation != self.generation || !self.processing {
            debug!(
                "ignoring stale scan (generation {}, current {})",
                scan.generation, self.generation
            );
            return false;
        }
        info!("scan {} finished: {}", scan.generation, receipt.vendor.trim());
        self.extracted = Some(receipt);
        self.processing = false;
        true
    }

    /// Back to Idle. Unconditional; also invalidates any pending scan.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected_image = None;
        self.extracted = None;
        self.processing = false;
        debug!("cleared (generation {})", self.generation);
    }
}
