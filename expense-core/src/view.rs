//! View derivation: which screen the widget shows for a given state.

use crate::receipt::ExtractedReceipt;
use crate::widget::SelectedImage;

/// What the widget renders. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// No image chosen yet
    UploadPrompt,
    /// Image chosen, simulated analysis in flight
    Processing { image: &'a SelectedImage },
    /// Analysis finished with a result
    Details {
        image: &'a SelectedImage,
        receipt: &'a ExtractedReceipt,
    },
    /// Image chosen but nothing to show
    Empty { image: &'a SelectedImage },
}

impl View<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            View::UploadPrompt => "upload-prompt",
            View::Processing { .. } => "processing",
            View::Details { .. } => "details",
            View::Empty { .. } => "empty",
        }
    }
}

/// Map the three state fields onto a view.
///
/// Pure and exhaustive: the processing flag wins over a stale result, and
/// without an image nothing else matters.
pub fn derive_view<'a>(
    image: Option<&'a SelectedImage>,
    processing: bool,
    receipt: Option<&'a ExtractedReceipt>,
) -> View<'a> {
    match (image, processing, receipt) {
        (None, _, _) => View::UploadPrompt,
        (Some(image), true, _) => View::Processing { image },
        (Some(image), false, Some(receipt)) => View::Details { image, receipt },
        (Some(image), false, None) => View::Empty { image },
    }
}
