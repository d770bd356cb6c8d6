use validator::Validate;

use crate::error::{Result, ScoringError};
use crate::models::{NormalizedEntry, RawEntry};

/// Validates a raw weigh-in and computes its net weight.
///
/// Disqualified entries pass through untouched; the ranking engine is the
/// one that keeps them out of the standings.
///
/// ```
/// use rust_decimal::Decimal;
/// use scoring::{RawEntry, normalize};
///
/// let raw = RawEntry {
///     angler: "jdoe".into(),
///     gross_weight: Decimal::new(1250, 2),
///     fish_count: 5,
///     big_bass_weight: Decimal::new(410, 2),
///     penalty: Decimal::new(50, 2),
///     member: true,
///     buy_in: false,
///     disqualified: false,
/// };
/// let entry = normalize(raw).unwrap();
/// assert_eq!(entry.net_weight(), Decimal::new(1200, 2));
/// ```
pub fn normalize(raw: RawEntry) -> Result<NormalizedEntry> {
    raw.validate().map_err(|errors| ScoringError::InvalidEntry {
        angler: raw.angler.clone(),
        errors,
    })?;

    if raw.has_conflicting_status() {
        return Err(ScoringError::ConflictingStatus(raw.angler));
    }

    Ok(NormalizedEntry::from_raw(raw))
}

pub fn normalize_all(raws: impl IntoIterator<Item = RawEntry>) -> Result<Vec<NormalizedEntry>> {
    raws.into_iter().map(normalize).collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::raw;
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_weight_subtracts_penalty() {
        let mut entry = raw("a1", dec!(15.40), true);
        entry.penalty = dec!(0.50);
        let normalized = normalize(entry).unwrap();
        assert_eq!(normalized.net_weight(), dec!(14.90));
        assert_eq!(normalized.scored_weight(), dec!(14.90));
    }

    #[test]
    fn test_negative_net_weight_is_kept_but_scored_as_zero() {
        let mut entry = raw("a1", dec!(0.25), true);
        entry.penalty = dec!(0.75);
        let normalized = normalize(entry).unwrap();
        assert_eq!(normalized.net_weight(), dec!(-0.50));
        assert_eq!(normalized.scored_weight(), dec!(0));
    }

    #[test]
    fn test_negative_fields_are_rejected() {
        let mut entry = raw("a1", dec!(10), true);
        entry.gross_weight = dec!(-1);
        assert!(matches!(normalize(entry), Err(ScoringError::InvalidEntry { .. })));

        let mut entry = raw("a1", dec!(10), true);
        entry.fish_count = -2;
        assert!(matches!(normalize(entry), Err(ScoringError::InvalidEntry { .. })));

        let mut entry = raw("a1", dec!(10), true);
        entry.big_bass_weight = dec!(-0.01);
        assert!(matches!(normalize(entry), Err(ScoringError::InvalidEntry { .. })));

        let mut entry = raw("a1", dec!(10), true);
        entry.penalty = dec!(-0.25);
        let err = normalize(entry).unwrap_err();
        assert_eq!(err.angler().as_str(), "a1");
    }

    #[test]
    fn test_blank_angler_is_rejected() {
        let entry = raw("  ", dec!(10), true);
        assert!(matches!(normalize(entry), Err(ScoringError::InvalidEntry { .. })));
    }

    #[test]
    fn test_buy_in_and_disqualified_with_weight_conflict() {
        let mut entry = raw("a1", dec!(8), true);
        entry.buy_in = true;
        entry.disqualified = true;
        assert!(matches!(
            normalize(entry),
            Err(ScoringError::ConflictingStatus(_))
        ));

        let mut entry = raw("a1", dec!(0), true);
        entry.buy_in = true;
        entry.disqualified = true;
        assert!(normalize(entry).is_ok());
    }

    #[test]
    fn test_disqualified_weight_is_not_zeroed() {
        let mut entry = raw("a1", dec!(12), true);
        entry.disqualified = true;
        let normalized = normalize(entry).unwrap();
        assert!(normalized.is_disqualified());
        assert_eq!(normalized.net_weight(), dec!(12));
    }

    #[test]
    fn test_normalize_all_stops_at_first_error() {
        let mut bad = raw("b", dec!(1), true);
        bad.fish_count = -1;
        let result = normalize_all(vec![raw("a", dec!(1), true), bad]);
        assert_eq!(result.unwrap_err().angler().as_str(), "b");
    }
}
