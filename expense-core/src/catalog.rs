//! Fixed catalog of fake receipts and the random draw over it.
//!
//! The simulated scanner never looks at the image. It picks one of these
//! records with uniform probability. Values are reproduced verbatim,
//! including the leading space in " Gas Station".

use crate::receipt::{ExtractedReceipt, LineItem};
use rand::Rng;
use std::sync::LazyLock;

pub const CATALOG_LEN: usize = 3;

static CATALOG: LazyLock<[ExtractedReceipt; CATALOG_LEN]> = LazyLock::new(|| {
    [
        ExtractedReceipt::new(
            "Starbucks Coffee",
            "1547",
            "2026-01-28",
            "Food & Dining",
            "Credit Card",
            vec![
                LineItem::new("Caffe Latte", "525"),
                LineItem::new("Croissant", "450"),
                LineItem::new("Espresso", "375"),
                LineItem::new("Tax", "197"),
            ],
        ),
        ExtractedReceipt::new(
            "Apple store",
            "8799",
            "2026-01-30",
            "Shopping",
            "Debit Card",
            vec![
                LineItem::new("Wireless Mouse", "2499"),
                LineItem::new("USB-C Cable 3pk", "1599"),
                LineItem::new("Notebook Set", "1299"),
                LineItem::new("Shipping", "0.00"),
                LineItem::new("Tax", "402"),
            ],
        ),
        ExtractedReceipt::new(
            " Gas Station",
            "5230",
            "2026-02-01",
            "Transportation",
            "UPI",
            vec![
                LineItem::new("Petrol", "4875"),
                LineItem::new("Air fill", "355"),
            ],
        ),
    ]
});

/// All receipts, in catalog order
pub fn catalog() -> &'static [ExtractedReceipt] {
    CATALOG.as_slice()
}

/// Draw a catalog index uniformly from `0..CATALOG_LEN`
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..CATALOG_LEN)
}

/// Draw a receipt uniformly
pub fn pick_receipt<R: Rng + ?Sized>(rng: &mut R) -> &'static ExtractedReceipt {
    &catalog()[pick_index(rng)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_catalog_values_verbatim() {
        let c = catalog();
        assert_eq!(c.len(), 3);

        assert_eq!(c[0].vendor, "Starbucks Coffee");
        assert_eq!(c[0].amount, "1547");
        assert_eq!(c[0].payment_method, "Credit Card");
        assert_eq!(c[0].items[3], LineItem::new("Tax", "197"));

        assert_eq!(c[1].vendor, "Apple store");
        assert_eq!(c[1].items.len(), 5);
        assert_eq!(c[1].items[3], LineItem::new("Shipping", "0.00"));

        assert_eq!(c[2].vendor, " Gas Station");
        assert_eq!(c[2].category, "Transportation");
        assert_eq!(c[2].payment_method, "UPI");
        assert_eq!(c[2].items[1], LineItem::new("Air fill", "355"));
    }

    #[test]
    fn test_catalog_dates_are_iso() {
        for r in catalog() {
            assert!(r.parsed_date().is_ok(), "bad date on {}", r.vendor);
        }
    }

    /// A source stepping evenly across the u64 range selects each receipt ~1/3 of the time.
    #[test]
    fn test_even_step_source_frequency() {
        const N: usize = 1000;
        let mut rng = StepRng::new(0, u64::MAX / 12 + 1);
        let mut counts = [0usize; CATALOG_LEN];
        for _ in 0..N {
            let i = pick_index(&mut rng);
            assert!(i < CATALOG_LEN, "index {i} out of range");
            counts[i] += 1;
        }
        assert_eq!(counts.iter().sum::<usize>(), N);
        for (i, c) in counts.iter().enumerate() {
            assert!((300..=367).contains(c), "index {i} selected {c} times");
        }
    }

    #[test]
    fn test_seeded_rng_reaches_every_receipt() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; CATALOG_LEN];
        for _ in 0..3000 {
            counts[pick_index(&mut rng)] += 1;
        }
        for (i, c) in counts.iter().enumerate() {
            assert!((800..=1200).contains(c), "index {i} selected {c} times");
        }
    }

    #[test]
    fn test_pick_receipt_returns_catalog_entry() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let r = pick_receipt(&mut rng);
            assert!(catalog().contains(r));
        }
    }
}
