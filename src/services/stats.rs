//! Aggregates over the unfiltered collection, plus the geometry the chart
//! widgets draw from them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::models::{PLAUSIBLE_YEARS, RatingItem};

pub const HISTOGRAM_BUCKETS: usize = 10;

/// Counts of items per rounded personal score, 1 through 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreHistogram {
    /// `buckets[i]` holds the count for score `i + 1`.
    pub buckets: [u32; HISTOGRAM_BUCKETS],
    pub max_count: u32,
}

impl ScoreHistogram {
    #[must_use]
    pub fn from_items(items: &[RatingItem]) -> Self {
        let mut buckets = [0u32; HISTOGRAM_BUCKETS];

        for item in items {
            let score = f64::from(item.my_rating).round();
            if (1.0..=10.0).contains(&score) {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let idx = score as usize - 1;
                buckets[idx] += 1;
            }
        }

        let max_count = buckets.iter().copied().max().unwrap_or(0);
        Self { buckets, max_count }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }

    #[must_use]
    pub fn count_for(&self, score: usize) -> u32 {
        score
            .checked_sub(1)
            .and_then(|idx| self.buckets.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// Bar heights scaled so the tallest bar reaches `cap`.
    #[must_use]
    pub fn bar_heights(&self, cap: f64) -> Vec<f64> {
        if self.max_count == 0 {
            return vec![0.0; HISTOGRAM_BUCKETS];
        }
        let max = f64::from(self.max_count);
        self.buckets
            .iter()
            .map(|&count| f64::from(count) / max * cap)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Items per release year over the full span between the earliest and
/// latest year. Years without items are present with a zero count; years
/// outside [`PLAUSIBLE_YEARS`] are skipped, which bounds the span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTimeline {
    pub min_year: i32,
    pub max_year: i32,
    pub peak: u32,
    pub counts: Vec<YearCount>,
}

impl YearTimeline {
    #[must_use]
    pub fn from_items(items: &[RatingItem]) -> Self {
        let mut per_year: BTreeMap<i32, u32> = BTreeMap::new();
        for item in items {
            let year = item.release_year();
            if PLAUSIBLE_YEARS.contains(&year) {
                *per_year.entry(year).or_default() += 1;
            }
        }

        let (Some((&min_year, _)), Some((&max_year, _))) =
            (per_year.first_key_value(), per_year.last_key_value())
        else {
            return Self {
                min_year: 0,
                max_year: 0,
                peak: 0,
                counts: Vec::new(),
            };
        };

        let counts: Vec<YearCount> = (min_year..=max_year)
            .map(|year| YearCount {
                year,
                count: per_year.get(&year).copied().unwrap_or(0),
            })
            .collect();
        let peak = counts.iter().map(|c| c.count).max().unwrap_or(0);

        Self {
            min_year,
            max_year,
            peak,
            counts,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Points normalised to the unit square: x across the year span, y as the
    /// share of the peak year.
    #[must_use]
    pub fn points(&self) -> Vec<ChartPoint> {
        let span = f64::from(self.max_year - self.min_year);
        let peak = f64::from(self.peak.max(1));

        self.counts
            .iter()
            .map(|c| ChartPoint {
                x: if span > 0.0 {
                    f64::from(c.year - self.min_year) / span
                } else {
                    0.5
                },
                y: f64::from(c.count) / peak,
            })
            .collect()
    }

    /// Smoothed SVG path through the points, scaled to `width` x `height`
    /// with y growing downwards. Each segment is a cubic curve whose control
    /// points sit at the horizontal midpoint of its endpoints.
    #[must_use]
    pub fn svg_path(&self, width: f64, height: f64) -> String {
        let scaled: Vec<(f64, f64)> = self
            .points()
            .into_iter()
            .map(|p| (p.x * width, height - p.y * height))
            .collect();

        let Some(&(x0, y0)) = scaled.first() else {
            return String::new();
        };

        let mut path = String::new();
        let _ = write!(path, "M {x0:.2} {y0:.2}");
        for pair in scaled.windows(2) {
            let (px, py) = pair[0];
            let (x, y) = pair[1];
            let mid = (px + x) / 2.0;
            let _ = write!(path, " C {mid:.2} {py:.2}, {mid:.2} {y:.2}, {x:.2} {y:.2}");
        }
        path
    }
}

/// Mean personal score rounded to one decimal, 0.0 when empty.
#[must_use]
pub fn average_score(items: &[RatingItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: f64 = items.iter().map(|i| f64::from(i.my_rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / items.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingsSummary {
    pub total: usize,
    pub movies: usize,
    pub series: usize,
    pub average_score: f64,
    pub histogram: ScoreHistogram,
    pub timeline: YearTimeline,
}

impl RatingsSummary {
    #[must_use]
    pub fn from_items(items: &[RatingItem]) -> Self {
        let movies = items.iter().filter(|i| i.is_movie()).count();
        Self {
            total: items.len(),
            movies,
            series: items.len() - movies,
            average_score: average_score(items),
            histogram: ScoreHistogram::from_items(items),
            timeline: YearTimeline::from_items(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(score: i32, year: i32, release_date: &str, kind: &str) -> RatingItem {
        RatingItem {
            id: format!("{score}-{year}"),
            my_rating: score,
            date_rated: String::new(),
            title: "T".to_string(),
            url: String::new(),
            title_type: kind.to_string(),
            imdb_rating: 0.0,
            runtime_mins: 0,
            year,
            genres: Vec::new(),
            release_date: release_date.to_string(),
            director: String::new(),
            poster_url: String::new(),
        }
    }

    fn scores(values: &[i32]) -> Vec<RatingItem> {
        values.iter().map(|&s| rated(s, 2000, "", "Movie")).collect()
    }

    #[test]
    fn test_average_score() {
        assert!(average_score(&[]).abs() < f64::EPSILON);
        assert!((average_score(&scores(&[4, 6, 8])) - 6.0).abs() < f64::EPSILON);
        assert!((average_score(&scores(&[7, 8, 8])) - 7.7).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_excludes_zero_scores() {
        let items = scores(&[0, 0, 3, 8, 8, 10]);
        let histogram = ScoreHistogram::from_items(&items);
        assert_eq!(histogram.total(), 4);
        assert_eq!(histogram.count_for(8), 2);
        assert_eq!(histogram.count_for(10), 1);
        assert_eq!(histogram.count_for(0), 0);
        assert_eq!(histogram.max_count, 2);
    }

    #[test]
    fn test_histogram_bar_heights_reach_cap() {
        let histogram = ScoreHistogram::from_items(&scores(&[2, 5, 5, 5, 9]));
        let heights = histogram.bar_heights(120.0);
        assert_eq!(heights.len(), HISTOGRAM_BUCKETS);
        assert!((heights[4] - 120.0).abs() < f64::EPSILON);
        assert!((heights[1] - 40.0).abs() < 1e-9);
        assert!(heights[0].abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_histogram_has_flat_bars() {
        let histogram = ScoreHistogram::from_items(&[]);
        assert_eq!(histogram.max_count, 0);
        assert!(histogram.bar_heights(100.0).iter().all(|h| *h == 0.0));
    }

    #[test]
    fn test_timeline_fills_gap_years() {
        let items = vec![
            rated(7, 2001, "", "Movie"),
            rated(7, 2004, "", "Movie"),
            rated(7, 2004, "", "Movie"),
        ];
        let timeline = YearTimeline::from_items(&items);
        assert_eq!(timeline.min_year, 2001);
        assert_eq!(timeline.max_year, 2004);
        assert_eq!(timeline.peak, 2);
        let counts: Vec<u32> = timeline.counts.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 2]);
    }

    #[test]
    fn test_timeline_prefers_release_date_year() {
        let items = vec![rated(7, 1990, "1995-06-01", "Movie"), rated(7, 0, "", "Movie")];
        let timeline = YearTimeline::from_items(&items);
        assert_eq!(timeline.min_year, 1995);
        assert_eq!(timeline.max_year, 1995);
        assert_eq!(timeline.counts.len(), 1);
    }

    #[test]
    fn test_timeline_ignores_implausible_years() {
        let items = vec![
            rated(7, 1995, "", "Movie"),
            rated(7, 19_950_101, "", "Movie"),
            rated(7, -40, "", "Movie"),
        ];
        let timeline = YearTimeline::from_items(&items);
        assert_eq!(timeline.min_year, 1995);
        assert_eq!(timeline.max_year, 1995);
        assert_eq!(timeline.counts.len(), 1);
        assert!(timeline.svg_path(1000.0, 200.0).len() < 64);
    }

    #[test]
    fn test_timeline_points_are_normalised() {
        let items = vec![
            rated(7, 2000, "", "Movie"),
            rated(7, 2002, "", "Movie"),
            rated(7, 2002, "", "Movie"),
        ];
        let points = YearTimeline::from_items(&items).points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], ChartPoint { x: 0.0, y: 0.5 });
        assert_eq!(points[1], ChartPoint { x: 0.5, y: 0.0 });
        assert_eq!(points[2], ChartPoint { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_single_year_point_is_centered() {
        let points = YearTimeline::from_items(&[rated(7, 2010, "", "Movie")]).points();
        assert_eq!(points, vec![ChartPoint { x: 0.5, y: 1.0 }]);
    }

    #[test]
    fn test_svg_path() {
        let items = vec![rated(7, 2000, "", "Movie"), rated(7, 2001, "", "Movie")];
        let path = YearTimeline::from_items(&items).svg_path(100.0, 50.0);
        assert_eq!(
            path,
            "M 0.00 0.00 C 50.00 0.00, 50.00 0.00, 100.00 0.00"
        );
        assert!(YearTimeline::from_items(&[]).svg_path(100.0, 50.0).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let items = vec![
            rated(9, 2000, "", "Movie"),
            rated(6, 2001, "", "TV Series"),
            rated(3, 2002, "", "TV Mini Series"),
        ];
        let summary = RatingsSummary::from_items(&items);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.movies, 1);
        assert_eq!(summary.series, 2);
        assert!((summary.average_score - 6.0).abs() < f64::EPSILON);
    }
}
