//! Dated closing price series.

use chrono::NaiveDate;

use super::error::DataError;

/// A single dated closing price observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Creates a new observation.
    #[inline]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Chronologically ordered sequence of closing prices.
///
/// Dated series are validated on construction: observation dates must be
/// strictly increasing. Price positivity is checked by the calibrator, which
/// reports the offending index.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::PriceSeries;
///
/// let series = PriceSeries::from_closes(vec![100.0, 102.0, 101.0]);
/// assert_eq!(series.closes().collect::<Vec<_>>(), vec![100.0, 102.0, 101.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSeries {
    dates: Option<Vec<NaiveDate>>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Builds a series from dated observations.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Unordered` if any date is not strictly after its
    /// predecessor.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, DataError> {
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(DataError::Unordered { index: index + 1 });
        }

        let (dates, closes) = points.into_iter().map(|p| (p.date, p.close)).unzip();
        Ok(Self {
            dates: Some(dates),
            closes,
        })
    }

    /// Builds an undated series from closes already in chronological order.
    pub fn from_closes(closes: Vec<f64>) -> Self {
        Self {
            dates: None,
            closes,
        }
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns `true` if the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Closing prices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.closes
    }

    /// Iterator over closing prices in chronological order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.closes.iter().copied()
    }

    /// Most recent close, if any.
    #[inline]
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// Observation dates, if the series is dated.
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Date of the most recent observation, if the series is dated.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.as_ref().and_then(|d| d.last().copied())
    }

    /// Keeps only observations dated on or after `start`.
    ///
    /// Undated series are returned unchanged.
    pub fn since(&self, start: NaiveDate) -> Self {
        match &self.dates {
            Some(dates) => {
                let first = dates.partition_point(|d| *d < start);
                Self {
                    dates: Some(dates[first..].to_vec()),
                    closes: self.closes[first..].to_vec(),
                }
            }
            None => self.clone(),
        }
    }
}
