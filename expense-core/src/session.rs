//! ScanSession — UploadWidget wired to a ScanWorker.
//!
//! Front ends call `upload`/`clear` on user input and `pump` once per frame
//! (or `settle` when they can await).

use crate::scan_worker::{ScanCompleted, ScanWorker};
use crate::view::View;
use crate::widget::{Phase, SelectedImage, UploadWidget};

pub struct ScanSession {
    widget: UploadWidget,
    worker: ScanWorker,
}

impl ScanSession {
    pub fn new(worker: ScanWorker) -> Self {
        Self {
            widget: UploadWidget::new(),
            worker,
        }
    }

    pub fn widget(&self) -> &UploadWidget {
        &self.widget
    }

    pub fn phase(&self) -> Phase {
        self.widget.phase()
    }

    pub fn view(&self) -> View<'_> {
        self.widget.view()
    }

    pub fn upload(&mut self, file: Option<SelectedImage>) {
        if let Some(scan) = self.widget.upload(file) {
            self.worker.start(scan);
        }
    }

    pub fn clear(&mut self) {
        self.widget.clear();
        self.worker.cancel();
    }

    /// Apply every completion already delivered. Returns whether state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(ev) = self.worker.try_next() {
            changed |= self.apply(ev);
        }
        changed
    }

    /// Wait until the current scan lands. Returns immediately unless Loading.
    pub async fn settle(&mut self) {
        while self.widget.is_processing() {
            match self.worker.next().await {
                Some(ev) => {
                    self.apply(ev);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, ev: ScanCompleted) -> bool {
        self.widget.complete(ev.scan, ev.receipt)
    }
}
