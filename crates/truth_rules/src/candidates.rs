//! Rule A — candidate selection from the per-item cache.

use truth_core::state::PerItemCacheEntry;

/// An event's supplier observation counts only while it is at most this
/// many seconds old relative to the current event's timestamp.
pub const SUPPLIER_MAX_AGE_SECONDS: i64 = 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidates {
    pub historic_price: Option<i64>,
    pub supplier_eligible: bool,
    pub supplier_price: Option<i64>,
}

pub fn select(ts: i64, cache: &PerItemCacheEntry) -> Candidates {
    let historic_price = cache.latest_historic.map(|o| o.price_cents);

    let supplier_eligible = cache
        .latest_supplier
        .map(|o| ts - o.timestamp <= SUPPLIER_MAX_AGE_SECONDS)
        .unwrap_or(false);

    let supplier_price = if supplier_eligible {
        cache.latest_supplier.map(|o| o.price_cents)
    } else {
        None
    };

    Candidates {
        historic_price,
        supplier_eligible,
        supplier_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truth_core::state::Observation;

    fn cache_with_supplier(price: i64, ts: i64) -> PerItemCacheEntry {
        PerItemCacheEntry {
            latest_historic: None,
            latest_supplier: Some(Observation { price_cents: price, timestamp: ts }),
        }
    }

    #[test]
    fn supplier_eligible_at_exactly_3600() {
        let cache = cache_with_supplier(10200, 1000);
        let c = select(1000 + SUPPLIER_MAX_AGE_SECONDS, &cache);
        assert!(c.supplier_eligible);
        assert_eq!(c.supplier_price, Some(10200));
    }

    #[test]
    fn supplier_ineligible_at_3601() {
        let cache = cache_with_supplier(10200, 1000);
        let c = select(1000 + SUPPLIER_MAX_AGE_SECONDS + 1, &cache);
        assert!(!c.supplier_eligible);
        assert_eq!(c.supplier_price, None);
    }

    #[test]
    fn absent_cache_slots_yield_none() {
        let cache = PerItemCacheEntry::default();
        let c = select(100, &cache);
        assert_eq!(c.historic_price, None);
        assert!(!c.supplier_eligible);
    }
}
