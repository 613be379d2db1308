//! Fixed-vocabulary outputs of the rule evaluator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which branch produced the final price. Closed — no catch-all variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecisionTag {
    #[cfg_attr(feature = "serde", serde(rename = "HUMAN_ACCEPTED"))]
    HumanAccepted,
    #[cfg_attr(feature = "serde", serde(rename = "SUPPLIER_PLUS_BIAS"))]
    SupplierPlusBias,
    #[cfg_attr(feature = "serde", serde(rename = "HISTORIC_PLUS_BIAS"))]
    HistoricPlusBias,
    #[cfg_attr(feature = "serde", serde(rename = "ANOMALY_REJECTED"))]
    AnomalyRejected,
    #[cfg_attr(feature = "serde", serde(rename = "FALLBACK_NO_DATA"))]
    FallbackNoData,
}

/// Supplementary tags attached to a decision. An event may carry zero or
/// more, in the order they were raised.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Flag {
    #[cfg_attr(feature = "serde", serde(rename = "NO_DATA"))]
    NoData,
    #[cfg_attr(feature = "serde", serde(rename = "ANOMALY_REJECTED"))]
    AnomalyRejected,
}
