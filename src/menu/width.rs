//! Column width for a set of labels.
//!
//! Sizes the label ring so most labels fit with a little room to spare, while a single
//! very long label is allowed to be clipped rather than inflating every wedge.

use thiserror::Error;

use super::WIDTH_TOLERANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot get optimal width for an empty collection of labels")]
pub struct NoLabels;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthOptimizer {
    /// Fraction of empty space tolerated on top of the average label.
    pub tolerance: f64,
}

impl Default for WidthOptimizer {
    fn default() -> Self {
        Self::new(WIDTH_TOLERANCE)
    }
}

impl WidthOptimizer {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Pixel width allocated to the label column. Padding is the caller's business.
    ///
    /// Never exceeds the widest label; with more than one label never drops below the
    /// narrowest.
    pub fn optimal_width<'a, I, F>(&self, labels: I, measure: F) -> Result<i32, NoLabels>
    where
        I: IntoIterator<Item = &'a str>,
        F: Fn(&str) -> i32,
    {
        let mut widths = labels.into_iter().map(|label| {
            let width = measure(label);
            log::debug!("'{}' is {}px wide", label, width);
            width
        });

        let first = widths.next().ok_or(NoLabels)?;
        let (count, min, max, sum) = widths.fold(
            (1_i64, first, first, i64::from(first)),
            |(count, min, max, sum), width| {
                (count + 1, min.min(width), max.max(width), sum + i64::from(width))
            },
        );

        let inflation = 1.0 + self.tolerance;
        let full_average = sum as f64 / count as f64;

        let average = if count > 1 {
            // TODO: also drop a single short outlier, it skews the average the other way.
            let partial_average = (sum - i64::from(max)) as f64 / (count - 1) as f64;
            if full_average > partial_average * inflation {
                log::debug!("partial average {} (dropped outlier {})", partial_average, max);
                partial_average
            } else {
                full_average
            }
        } else {
            full_average
        };

        let inflated = average * inflation;
        log::debug!(
            "{} labels: min={} avg={} inflated={} max={}",
            count,
            min,
            average,
            inflated,
            max
        );

        Ok(if inflated > max as f64 {
            max
        } else {
            inflated as i32
        })
    }
}
