use expense_core::{
    catalog, Phase, ScanSession, ScanWorker, SelectedImage, View, SCAN_DELAY,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::time::{advance, sleep, Instant};

fn session(seed: u64) -> ScanSession {
    ScanSession::new(ScanWorker::spawn(SCAN_DELAY, StdRng::seed_from_u64(seed)))
}

fn receipt_jpg() -> Option<SelectedImage> {
    Some(SelectedImage::new("receipts/IMG_0042.jpg"))
}

/// Let the worker pick up queued requests before the clock moves.
async fn let_worker_run() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

/// Upload, wait out the delay: the result is one of the three catalog records.
#[tokio::test(start_paused = true)]
async fn test_upload_then_wait_yields_catalog_receipt() {
    for seed in 0..12 {
        let mut s = session(seed);
        s.upload(receipt_jpg());
        assert_eq!(s.view().label(), "processing");

        let t0 = Instant::now();
        s.settle().await;
        assert!(t0.elapsed() >= SCAN_DELAY);

        assert_eq!(s.phase(), Phase::Ready);
        match s.view() {
            View::Details { receipt, .. } => {
                assert!(catalog().iter().any(|c| c == receipt));
            }
            other => panic!("expected details, got {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_every_catalog_receipt_is_reachable() {
    let mut seen = [false; 3];
    for seed in 0..200 {
        let mut s = session(seed);
        s.upload(receipt_jpg());
        s.settle().await;
        let got = s.widget().extracted().unwrap();
        let idx = catalog().iter().position(|c| c == got).unwrap();
        seen[idx] = true;
        if seen.iter().all(|s| *s) {
            break;
        }
    }
    assert_eq!(seen, [true, true, true]);
    assert_eq!(catalog()[2].vendor, " Gas Station");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_picker_keeps_idle() {
    let mut s = session(3);
    s.upload(None);
    assert_eq!(s.phase(), Phase::Idle);
    sleep(Duration::from_secs(5)).await;
    assert!(!s.pump());
    assert_eq!(s.view(), View::UploadPrompt);
}

/// Upload, clear before the delay, then let the old timer's deadline pass.
#[tokio::test(start_paused = true)]
async fn test_clear_before_delay_stays_idle() {
    let mut s = session(4);
    s.upload(receipt_jpg());
    let_worker_run().await;
    advance(Duration::from_millis(700)).await;
    s.clear();
    assert_eq!(s.phase(), Phase::Idle);

    sleep(Duration::from_secs(3)).await;
    s.pump();
    assert_eq!(s.phase(), Phase::Idle);
    assert!(s.widget().selected_image().is_none());
    assert!(s.widget().extracted().is_none());
    assert!(!s.widget().is_processing());
}

#[tokio::test(start_paused = true)]
async fn test_reupload_while_loading_uses_second_delay() {
    let mut s = session(5);
    let t0 = Instant::now();
    s.upload(receipt_jpg());
    let_worker_run().await;
    advance(Duration::from_millis(1200)).await;

    s.upload(Some(SelectedImage::new("receipts/fuel.png")));
    let_worker_run().await;

    // First timer's deadline passes without effect.
    advance(Duration::from_millis(600)).await;
    let_worker_run().await;
    s.pump();
    assert_eq!(s.phase(), Phase::Loading);

    s.settle().await;
    assert!(t0.elapsed() >= Duration::from_millis(2700));
    assert_eq!(s.phase(), Phase::Ready);
    assert_eq!(
        s.widget().selected_image().unwrap().display_name(),
        "fuel.png"
    );
}

#[tokio::test(start_paused = true)]
async fn test_clear_from_ready() {
    let mut s = session(6);
    s.upload(receipt_jpg());
    s.settle().await;
    assert_eq!(s.phase(), Phase::Ready);
    s.clear();
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.view(), View::UploadPrompt);
}
