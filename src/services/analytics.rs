//! Aggregation over batches of daily records: per-metric summaries, trend
//! direction, mood distribution, and period-over-period comparison.
//!
//! Everything here is pure and synchronous; handlers fetch the record
//! window and pass it in. Missing values are filtered per metric, never
//! treated as zero.

use serde::Serialize;

use crate::models::daily_record::{DailyRecord, Mood};

/// The numeric metrics a daily record can be summarized over. Each variant
/// knows how to pull its own value out of a record, so there is exactly one
/// place where a metric name maps to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Steps,
    Sleep,
    Water,
    Calories,
    Exercise,
    Stress,
    ScreenTime,
}

impl Metric {
    pub fn value_in(self, record: &DailyRecord) -> Option<f64> {
        match self {
            Metric::Steps => record.steps(),
            Metric::Sleep => record.sleep_hours(),
            Metric::Water => record.water_ml(),
            Metric::Calories => record.total_calories(),
            Metric::Exercise => record.exercise_minutes(),
            Metric::Stress => record.stress_level(),
            Metric::ScreenTime => record.screen_minutes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub data_points: usize,
    pub trend: TrendDirection,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodSummary {
    pub average: f64,
    pub most_common: Mood,
    pub data_points: usize,
    pub trend: TrendDirection,
}

/// Per-metric summaries for one window of records. A `None` field means the
/// metric had no values anywhere in the window.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub steps: Option<MetricSummary>,
    pub sleep: Option<MetricSummary>,
    pub water: Option<MetricSummary>,
    pub calories: Option<MetricSummary>,
    pub exercise: Option<MetricSummary>,
    pub mood: Option<MoodSummary>,
    pub stress: Option<MetricSummary>,
    pub screen_time: Option<MetricSummary>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classify a chronologically ordered sequence by comparing the means of its
/// two halves (floor split, second half gets the extra element).
///
/// When the first-half mean is exactly zero the percent change is undefined;
/// the sign of the second-half mean decides the direction instead.
pub fn trend_direction(values: &[f64]) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::InsufficientData;
    }

    let mid = values.len() / 2;
    let first_avg = mean(&values[..mid]);
    let second_avg = mean(&values[mid..]);

    if first_avg == 0.0 {
        return if second_avg > 0.0 {
            TrendDirection::Improving
        } else if second_avg < 0.0 {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        };
    }

    let change = (second_avg - first_avg) / first_avg * 100.0;

    if change.abs() < 5.0 {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}

/// Summarize one metric across a window. Returns `None` when no record in
/// the window carries a value for it.
pub fn summarize_metric(records: &[DailyRecord], metric: Metric) -> Option<MetricSummary> {
    let values: Vec<f64> = records.iter().filter_map(|r| metric.value_in(r)).collect();

    if values.is_empty() {
        return None;
    }

    let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));

    Some(MetricSummary {
        average: round2(mean(&values)),
        max,
        min,
        data_points: values.len(),
        trend: trend_direction(&values),
    })
}

/// Mood aggregate over a window. Average and trend use the 1-5 ordinal
/// mapping; `most_common` is the literal label with the highest count,
/// first-encountered label winning exact ties.
pub fn summarize_mood(records: &[DailyRecord]) -> Option<MoodSummary> {
    let moods: Vec<Mood> = records.iter().filter_map(|r| r.mood()).collect();

    if moods.is_empty() {
        return None;
    }

    let scores: Vec<f64> = moods.iter().map(|m| f64::from(m.score())).collect();

    // Counts keyed in first-occurrence order so the tie-break below is a
    // plain strictly-greater fold.
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for mood in &moods {
        match counts.iter_mut().find(|(m, _)| m == mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((*mood, 1)),
        }
    }
    let mut most_common = counts[0].0;
    let mut best = counts[0].1;
    for &(mood, n) in &counts[1..] {
        if n > best {
            most_common = mood;
            best = n;
        }
    }

    Some(MoodSummary {
        average: round2(mean(&scores)),
        most_common,
        data_points: moods.len(),
        trend: trend_direction(&scores),
    })
}

/// Full per-metric report for a window; `None` for an empty window.
pub fn trend_report(records: &[DailyRecord]) -> Option<TrendReport> {
    if records.is_empty() {
        return None;
    }

    Some(TrendReport {
        steps: summarize_metric(records, Metric::Steps),
        sleep: summarize_metric(records, Metric::Sleep),
        water: summarize_metric(records, Metric::Water),
        calories: summarize_metric(records, Metric::Calories),
        exercise: summarize_metric(records, Metric::Exercise),
        mood: summarize_mood(records),
        stress: summarize_metric(records, Metric::Stress),
        screen_time: summarize_metric(records, Metric::ScreenTime),
    })
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricImprovement {
    pub change: f64,
    /// `None` when the baseline average is zero (percent undefined).
    pub percent_change: Option<f64>,
    pub improved: bool,
}

/// Per-metric deltas between two windows. A metric appears only when both
/// windows have a summary for it.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ImprovementReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<MetricImprovement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<MetricImprovement>,
}

#[derive(Debug, Serialize)]
pub struct PeriodComparison {
    pub period1: Option<TrendReport>,
    pub period2: Option<TrendReport>,
    pub improvement: Option<ImprovementReport>,
}

fn improvement_between(baseline: f64, current: f64) -> MetricImprovement {
    let change = current - baseline;
    if baseline == 0.0 {
        return MetricImprovement {
            change,
            percent_change: None,
            improved: change > 0.0,
        };
    }
    let percent = round2(change / baseline * 100.0);
    MetricImprovement {
        change,
        percent_change: Some(percent),
        improved: percent > 0.0,
    }
}

fn paired(
    a: &Option<MetricSummary>,
    b: &Option<MetricSummary>,
) -> Option<MetricImprovement> {
    match (a, b) {
        (Some(a), Some(b)) => Some(improvement_between(a.average, b.average)),
        _ => None,
    }
}

/// Compare two windows of records. Period 1 is the baseline.
pub fn compare_periods(period1: &[DailyRecord], period2: &[DailyRecord]) -> PeriodComparison {
    let report1 = trend_report(period1);
    let report2 = trend_report(period2);

    let improvement = match (&report1, &report2) {
        (Some(r1), Some(r2)) => Some(ImprovementReport {
            steps: paired(&r1.steps, &r2.steps),
            sleep: paired(&r1.sleep, &r2.sleep),
            water: paired(&r1.water, &r2.water),
            calories: paired(&r1.calories, &r2.calories),
            exercise: paired(&r1.exercise, &r2.exercise),
            mood: match (&r1.mood, &r2.mood) {
                (Some(m1), Some(m2)) => Some(improvement_between(m1.average, m2.average)),
                _ => None,
            },
            stress: paired(&r1.stress, &r2.stress),
            screen_time: paired(&r1.screen_time, &r2.screen_time),
        }),
        _ => None,
    };

    PeriodComparison {
        period1: report1,
        period2: report2,
        improvement,
    }
}
