//! Basic statistics over slices of `f64` values.
//!
//! This crate provides four operations and a summary that combines them:
//!
//! - **Sum** and **average**, optionally excluding negative values
//! - **Median**, computed on a private sorted copy of the input
//! - **Sample standard deviation**, using the `n - 1` denominator
//!
//! Every operation is a pure function over a borrowed slice and reports bad
//! input through [`InvalidArgumentError`].
//!
//! # Modules
//!
//! - [`descriptive`]: The statistical operations and [`DescriptiveStats`]
//! - [`filter`]: The [`NegativeValues`] inclusion filter
//! - [`error`]: The [`InvalidArgumentError`] type
//!
//! # Examples
//!
//! ## Computing individual statistics
//!
//! ```
//! use statkit_stats::{average, median, standard_deviation, sum};
//!
//! let values = [2.2, 3.3, 66.2, 17.5, 30.2, 31.1];
//! assert!((sum(&values, true)? - 150.5).abs() < 1e-9);
//! assert!((average(&values, true)? - 25.083_333_333).abs() < 1e-6);
//! assert!((median(&values)? - 23.85).abs() < 1e-9);
//! assert!((standard_deviation(&values)? - 23.700_752).abs() < 1e-6);
//! # Ok::<(), statkit_stats::InvalidArgumentError>(())
//! ```
//!
//! ## Excluding negative values
//!
//! ```
//! use statkit_stats::{InvalidArgumentError, NegativeValues, average};
//!
//! let values = [-1.0, 2.0, 4.0];
//! assert_eq!(average(&values, NegativeValues::Exclude), Ok(3.0));
//! assert_eq!(
//!     average(&[-1.0], NegativeValues::Exclude),
//!     Err(InvalidArgumentError::NoIncludedValues)
//! );
//! ```
//!
//! ## Computing a summary
//!
//! ```
//! use statkit_stats::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new(&[1.0, 2.0, 3.0], true).unwrap();
//! assert_eq!(stats.median, 2.0);
//! assert_eq!(stats.std_dev, Some(1.0));
//! ```

pub use self::{
    descriptive::{DescriptiveStats, average, median, standard_deviation, sum},
    error::InvalidArgumentError,
    filter::NegativeValues,
};

pub mod descriptive;
pub mod error;
pub mod filter;
