//! expense-core: simulated receipt scanning widget

pub mod catalog;
pub mod receipt;
pub mod scan_worker;
pub mod session;
pub mod view;
pub mod widget;

pub use catalog::{catalog, pick_index, pick_receipt, CATALOG_LEN};
pub use receipt::{ExtractedReceipt, LineItem};
pub use scan_worker::{run_worker, ScanCompleted, ScanRequest, ScanWorker};
pub use session::ScanSession;
pub use view::{derive_view, View};
pub use widget::{PendingScan, Phase, SelectedImage, UploadWidget, SCAN_DELAY};
