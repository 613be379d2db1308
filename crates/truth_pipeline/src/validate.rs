//! Structural validation of one parsed event, before any state mutation.

use truth_core::event::{Event, Outcome, Source};

pub fn validate(event: &Event) -> Result<(), String> {
    if event.price_cents < 0 {
        return Err(format!("price_cents must be >= 0, got {}", event.price_cents));
    }
    if event.source != Source::Human && event.outcome != Outcome::None {
        return Err(format!(
            "outcome must be NONE for non-HUMAN sources, got source={:?} outcome={:?}",
            event.source, event.outcome
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(price: i64, source: Source, outcome: Outcome) -> Event {
        Event {
            event_id: "e1".parse().unwrap(),
            item_id: "P1".parse().unwrap(),
            timestamp: 0,
            source,
            price_cents: price,
            outcome,
        }
    }

    #[test]
    fn rejects_negative_price() {
        assert!(validate(&ev(-1, Source::Historic, Outcome::None)).is_err());
    }

    #[test]
    fn rejects_non_human_outcome() {
        assert!(validate(&ev(100, Source::Supplier, Outcome::QuoteAccepted)).is_err());
    }

    #[test]
    fn accepts_human_with_outcome() {
        assert!(validate(&ev(100, Source::Human, Outcome::QuoteAccepted)).is_ok());
    }

    #[test]
    fn accepts_non_human_with_none_outcome() {
        assert!(validate(&ev(100, Source::Historic, Outcome::None)).is_ok());
    }
}
