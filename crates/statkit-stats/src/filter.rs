use serde::{Deserialize, Serialize};

/// Whether negative values take part in sum and average.
///
/// Converts from the plain `include_negative` flag:
///
/// ```
/// use statkit_stats::filter::NegativeValues;
///
/// assert_eq!(NegativeValues::from(true), NegativeValues::Include);
/// assert!(!NegativeValues::Exclude.includes(-0.5));
/// assert!(NegativeValues::Exclude.includes(0.0));
/// ```
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum NegativeValues {
    /// Every value participates.
    #[default]
    Include,
    /// Values strictly below zero are skipped.
    Exclude,
}

impl NegativeValues {
    /// Returns `true` if `value` passes the filter.
    ///
    /// `NaN` never compares `>= 0.0`, so it is dropped by [`NegativeValues::Exclude`].
    #[must_use]
    pub fn includes(self, value: f64) -> bool {
        match self {
            NegativeValues::Include => true,
            NegativeValues::Exclude => value >= 0.0,
        }
    }
}

impl From<bool> for NegativeValues {
    fn from(include_negative: bool) -> Self {
        if include_negative {
            NegativeValues::Include
        } else {
            NegativeValues::Exclude
        }
    }
}

/// Sum and count of the values that passed a [`NegativeValues`] filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FilteredTotals {
    pub(crate) sum: f64,
    pub(crate) count: usize,
}

impl FilteredTotals {
    /// Accumulates in a single pass so the count always matches the sum.
    pub(crate) fn collect(values: &[f64], negatives: NegativeValues) -> Self {
        let mut totals = FilteredTotals { sum: 0.0, count: 0 };
        for &value in values {
            if negatives.includes(value) {
                totals.sum += value;
                totals.count += 1;
            }
        }
        if totals.count < values.len() {
            tracing::trace!(
                excluded = values.len() - totals.count,
                total = values.len(),
                "excluded negative values"
            );
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert!(NegativeValues::from(true).is_include());
        assert!(NegativeValues::from(false).is_exclude());
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert!(NegativeValues::Exclude.includes(0.0));
        assert!(NegativeValues::Exclude.includes(-0.0));
        assert!(!NegativeValues::Exclude.includes(-f64::MIN_POSITIVE));
    }

    #[test]
    fn test_nan_is_excluded_only_when_filtering() {
        assert!(NegativeValues::Include.includes(f64::NAN));
        assert!(!NegativeValues::Exclude.includes(f64::NAN));
    }

    #[test]
    fn test_totals_count_matches_sum() {
        let totals = FilteredTotals::collect(&[1.0, -2.0, 3.0, -4.0], NegativeValues::Exclude);
        assert_eq!(totals, FilteredTotals { sum: 4.0, count: 2 });

        let totals = FilteredTotals::collect(&[1.0, -2.0, 3.0, -4.0], NegativeValues::Include);
        assert_eq!(totals, FilteredTotals { sum: -2.0, count: 4 });
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&NegativeValues::Exclude).unwrap();
        assert_eq!(json, "\"exclude\"");
        let parsed: NegativeValues = serde_json::from_str("\"include\"").unwrap();
        assert_eq!(parsed, NegativeValues::Include);
    }
}
