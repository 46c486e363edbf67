//! Revenue-band selection over a catalog

use crate::catalog::CatalogEntry;
use prospector_domain::BandRange;

/// Upper bound on a selection
pub const SELECTION_LIMIT: usize = 100;

/// Select up to [`SELECTION_LIMIT`] entries for a revenue band
///
/// In-band entries keep their catalog order and always come first. When
/// there are not enough of them, the remainder is backfilled with the
/// out-of-band entries closest to the band midpoint (stable on ties).
pub fn select(catalog: &[CatalogEntry], band: BandRange) -> Vec<CatalogEntry> {
    let (in_band, mut out_of_band): (Vec<&CatalogEntry>, Vec<&CatalogEntry>) =
        catalog.iter().partition(|entry| band.contains(entry.revenue_value));

    if in_band.len() >= SELECTION_LIMIT {
        return in_band.into_iter().take(SELECTION_LIMIT).cloned().collect();
    }

    let midpoint = band.midpoint();
    out_of_band.sort_by(|a, b| {
        let da = (a.revenue_value - midpoint).abs();
        let db = (b.revenue_value - midpoint).abs();
        da.total_cmp(&db)
    });

    in_band
        .into_iter()
        .chain(out_of_band)
        .take(SELECTION_LIMIT)
        .cloned()
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every in-band entry is selected, ahead of every out-of-band entry
        #[test]
        fn test_in_band_entries_lead(revenues in proptest::collection::vec(0u32..600, 0..150)) {
            let catalog: Vec<CatalogEntry> = revenues
                .iter()
                .enumerate()
                .map(|(i, r)| CatalogEntry {
                    title: format!("c{}", i),
                    url: format!("u{}", i),
                    snippet: String::new(),
                    revenue_value: f64::from(*r),
                })
                .collect();
            let band = BandRange::new(30.0, 50.0);
            let selected = select(&catalog, band);
            let in_band: Vec<&CatalogEntry> =
                catalog.iter().filter(|e| band.contains(e.revenue_value)).collect();

            prop_assert_eq!(selected.len(), catalog.len().min(SELECTION_LIMIT));
            let lead = in_band.len().min(SELECTION_LIMIT);
            for (picked, expected) in selected.iter().zip(in_band.iter()).take(lead) {
                prop_assert_eq!(&picked.url, &expected.url);
            }
            for picked in selected.iter().skip(lead) {
                prop_assert!(!band.contains(picked.revenue_value));
            }
        }
    }
}
