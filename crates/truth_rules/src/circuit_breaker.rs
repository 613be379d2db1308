//! Rule E — anomaly detection for HUMAN quotes against a supplier reference.

/// A human quote is anomalous if it exceeds this percentage of the
/// supplier reference price. Exactly at the threshold is not anomalous.
pub const ANOMALY_THRESHOLD_PERCENT: i64 = 150;

/// Only meaningful when the caller has already established
/// `supplier_eligible && supplier_price > 0`.
pub fn is_anomaly(human_price_cents: i64, supplier_price_cents: i64) -> bool {
    human_price_cents * 100 > supplier_price_cents * ANOMALY_THRESHOLD_PERCENT
}
