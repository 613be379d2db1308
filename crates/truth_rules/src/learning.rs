//! Rule C — bias learning from an accepted human quote with a supplier
//! reference. The window mechanics live on `PerItemState` itself in
//! `truth_core`; this module is just the delta computation at the call
//! site.

use truth_core::state::PerItemState;

/// `delta = human_price - supplier_price`, folded into the item's sliding
/// window and its recomputed median bias.
pub fn learn(state: &mut PerItemState, human_price_cents: i64, supplier_price_cents: i64) {
    let delta = human_price_cents - supplier_price_cents;
    state.record_accepted_delta(delta);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_accepted_delta_becomes_the_bias() {
        let mut s = PerItemState::new();
        learn(&mut s, 10500, 10200);
        assert_eq!(s.accepted_human_deltas_cents, vec![300]);
        assert_eq!(s.bias_cents, 300);
    }

    #[test]
    fn delta_can_be_negative() {
        let mut s = PerItemState::new();
        learn(&mut s, 9900, 10200);
        assert_eq!(s.accepted_human_deltas_cents, vec![-300]);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;
    use truth_core::{median_int, state::MAX_DELTA_WINDOW};

    proptest! {
        /// The delta window never grows past `MAX_DELTA_WINDOW`, no matter
        /// how many quotes land on one item.
        #[test]
        fn window_never_exceeds_max(
            quotes in prop::collection::vec((-1_000_000i64..1_000_000, 1i64..1_000_000), 0..40)
        ) {
            let mut s = PerItemState::new();
            for (human, supplier) in &quotes {
                learn(&mut s, *human, *supplier);
            }
            prop_assert!(s.accepted_human_deltas_cents.len() <= MAX_DELTA_WINDOW);
        }

        /// After every accepted quote, the stored bias is exactly the
        /// integer median of the window as it stands at that moment.
        #[test]
        fn bias_is_always_the_window_median(
            quotes in prop::collection::vec((-1_000_000i64..1_000_000, 1i64..1_000_000), 0..40)
        ) {
            let mut s = PerItemState::new();
            for (human, supplier) in &quotes {
                learn(&mut s, *human, *supplier);
                prop_assert_eq!(s.bias_cents, median_int(&s.accepted_human_deltas_cents));
            }
        }
    }
}
