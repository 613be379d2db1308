//! The shared fallback function used by every branch of the decision tree
//! that isn't a clean human-accepted quote.

use crate::candidates::Candidates;
use crate::decision::{DecisionTag, Flag};

pub fn fallback(candidates: &Candidates, effective_bias: i64) -> (i64, DecisionTag, Vec<Flag>) {
    if candidates.supplier_eligible {
        if let Some(supplier_price) = candidates.supplier_price {
            return (supplier_price + effective_bias, DecisionTag::SupplierPlusBias, Vec::new());
        }
    }
    if let Some(historic_price) = candidates.historic_price {
        return (historic_price + effective_bias, DecisionTag::HistoricPlusBias, Vec::new());
    }
    (0, DecisionTag::FallbackNoData, vec![Flag::NoData])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_supplier_over_historic() {
        let c = Candidates {
            historic_price: Some(10100),
            supplier_eligible: true,
            supplier_price: Some(10200),
        };
        let (price, tag, flags) = fallback(&c, 0);
        assert_eq!(price, 10200);
        assert_eq!(tag, DecisionTag::SupplierPlusBias);
        assert!(flags.is_empty());
    }

    #[test]
    fn falls_back_to_historic_without_supplier() {
        let c = Candidates { historic_price: Some(10100), supplier_eligible: false, supplier_price: None };
        let (price, tag, _) = fallback(&c, 50);
        assert_eq!(price, 10150);
        assert_eq!(tag, DecisionTag::HistoricPlusBias);
    }

    #[test]
    fn no_data_when_nothing_cached() {
        let c = Candidates { historic_price: None, supplier_eligible: false, supplier_price: None };
        let (price, tag, flags) = fallback(&c, 0);
        assert_eq!(price, 0);
        assert_eq!(tag, DecisionTag::FallbackNoData);
        assert_eq!(flags, vec![Flag::NoData]);
    }
}
