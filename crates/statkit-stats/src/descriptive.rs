use serde::{Deserialize, Serialize};

use crate::{
    error::InvalidArgumentError,
    filter::{FilteredTotals, NegativeValues},
};

/// Calculates the sum of `values`.
///
/// Values rejected by `negatives` are skipped. If every value is skipped the
/// sum is `0.0`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::sum;
///
/// assert_eq!(sum(&[1.0, -2.0, 4.0], true), Ok(3.0));
/// assert_eq!(sum(&[1.0, -2.0, 4.0], false), Ok(5.0));
/// assert!(sum(&[], true).is_err());
/// ```
pub fn sum<N>(values: &[f64], negatives: N) -> Result<f64, InvalidArgumentError>
where
    N: Into<NegativeValues>,
{
    ensure_non_empty(values)?;
    Ok(FilteredTotals::collect(values, negatives.into()).sum)
}

/// Calculates the arithmetic mean of the values that pass `negatives`.
///
/// # Errors
///
/// * [`InvalidArgumentError::EmptyInput`] - `values` is empty
/// * [`InvalidArgumentError::NoIncludedValues`] - every value was excluded by the filter
///
/// # Examples
///
/// ```
/// use statkit_stats::{descriptive::average, error::InvalidArgumentError};
///
/// assert_eq!(average(&[1.0, -3.0, 5.0], true), Ok(1.0));
/// assert_eq!(average(&[1.0, -3.0, 5.0], false), Ok(3.0));
/// assert_eq!(
///     average(&[-1.0, -2.0], false),
///     Err(InvalidArgumentError::NoIncludedValues)
/// );
/// ```
pub fn average<N>(values: &[f64], negatives: N) -> Result<f64, InvalidArgumentError>
where
    N: Into<NegativeValues>,
{
    ensure_non_empty(values)?;
    mean_of(FilteredTotals::collect(values, negatives.into()))
}

/// Calculates the median of `values`.
///
/// The values are sorted in a private buffer; the caller's slice is left
/// untouched. For an even number of values the two middle values are
/// averaged.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyInput`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(values: &[f64]) -> Result<f64, InvalidArgumentError> {
    ensure_non_empty(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(median_of_sorted(&sorted))
}

/// Calculates the median of values already sorted in ascending order.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );

    let count = sorted_values.len();
    if count == 0 {
        return f64::NAN;
    }
    let mid = count / 2;
    if count % 2 == 0 {
        (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
    } else {
        sorted_values[mid]
    }
}

/// Calculates the sample standard deviation of `values`.
///
/// Uses the `n - 1` denominator. Negative values always take part, both in
/// the mean and in the squared deviations.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::InsufficientValues`] if fewer than two
/// values are given.
///
/// # Examples
///
/// ```
/// use statkit_stats::descriptive::standard_deviation;
///
/// assert_eq!(standard_deviation(&[5.0, 5.0, 5.0]), Ok(0.0));
/// let sd = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 2.5_f64.sqrt()).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn standard_deviation(values: &[f64]) -> Result<f64, InvalidArgumentError> {
    const REQUIRED: usize = 2;

    if values.len() < REQUIRED {
        return Err(InvalidArgumentError::InsufficientValues {
            required: REQUIRED,
            actual: values.len(),
        });
    }

    let mean = mean_of(FilteredTotals::collect(values, NegativeValues::Include))?;
    let sum_of_squares = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Ok((sum_of_squares / (values.len() - 1) as f64).sqrt())
}

/// All four statistics of a dataset computed together.
///
/// `sum`, `average` and `included` honor the [`NegativeValues`] filter;
/// `median` and `std_dev` always use every value.
///
/// # Examples
///
/// ```
/// use statkit_stats::{descriptive::DescriptiveStats, filter::NegativeValues};
///
/// let stats = DescriptiveStats::new(&[4.0, -2.0, 1.0, 3.0], NegativeValues::Exclude).unwrap();
/// assert_eq!(stats.count, 4);
/// assert_eq!(stats.included, 3);
/// assert_eq!(stats.sum, 8.0);
/// assert_eq!(stats.median, 2.0);
/// assert!(stats.std_dev.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Filter applied to `sum` and `average`.
    pub negatives: NegativeValues,
    /// Number of values in the dataset.
    pub count: usize,
    /// Number of values that passed the filter.
    pub included: usize,
    /// Sum of the included values.
    pub sum: f64,
    /// Mean of the included values.
    pub average: f64,
    /// Median of all values.
    pub median: f64,
    /// Sample standard deviation of all values, absent for a single value.
    pub std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Computes every statistic over `values`.
    ///
    /// # Errors
    ///
    /// * [`InvalidArgumentError::EmptyInput`] - `values` is empty
    /// * [`InvalidArgumentError::NoIncludedValues`] - the filter excluded every value
    pub fn new<N>(values: &[f64], negatives: N) -> Result<Self, InvalidArgumentError>
    where
        N: Into<NegativeValues>,
    {
        ensure_non_empty(values)?;
        let negatives = negatives.into();
        let totals = FilteredTotals::collect(values, negatives);
        let average = mean_of(totals)?;
        let median = median(values)?;
        let std_dev = match standard_deviation(values) {
            Ok(std_dev) => Some(std_dev),
            Err(InvalidArgumentError::InsufficientValues { .. }) => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            negatives,
            count: values.len(),
            included: totals.count,
            sum: totals.sum,
            average,
            median,
            std_dev,
        })
    }
}

fn ensure_non_empty(values: &[f64]) -> Result<(), InvalidArgumentError> {
    if values.is_empty() {
        return Err(InvalidArgumentError::EmptyInput);
    }
    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn mean_of(totals: FilteredTotals) -> Result<f64, InvalidArgumentError> {
    if totals.count == 0 {
        return Err(InvalidArgumentError::NoIncludedValues);
    }
    Ok(totals.sum / totals.count as f64)
}
