//! Seven-day sentiment trend.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::analysis::Analysis;

/// Number of days covered by the trend, ending today.
pub const TREND_DAYS: u64 = 7;

/// Counts for one day of the trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Day as `YYYY-MM-DD`.
    pub name: String,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl TrendPoint {
    fn empty(day: NaiveDate) -> Self {
        Self {
            name: day.format("%Y-%m-%d").to_string(),
            positive: 0,
            negative: 0,
            neutral: 0,
        }
    }

    /// Total analyses counted for the day.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Bucket analyses into the [`TREND_DAYS`] days ending at `today`, oldest first.
///
/// Days are UTC calendar days; polarity is taken from the score sign.
/// Analyses outside the range are ignored.
pub fn daily_trend(analyses: &[Analysis], today: NaiveDate) -> Vec<TrendPoint> {
    let days: Vec<NaiveDate> = (0..TREND_DAYS)
        .rev()
        .map(|offset| today.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN))
        .collect();
    let mut points: Vec<TrendPoint> = days.iter().map(|&d| TrendPoint::empty(d)).collect();

    for analysis in analyses {
        let day = analysis.timestamp.date_naive();
        let Some(index) = days.iter().position(|&d| d == day) else {
            continue;
        };
        let point = &mut points[index];
        let score = analysis.result.score;
        if score > 0.0 {
            point.positive += 1;
        } else if score < 0.0 {
            point.negative += 1;
        } else {
            point.neutral += 1;
        }
    }

    points
}
