//! Rule-based insights over the trailing 30-day window. Each rule fires
//! independently on whatever data exists; no rule blocks another.

use serde::Serialize;

use crate::models::daily_record::DailyRecord;

/// The window the consistency rule measures against, in days. Fixed even
/// when fewer days were fetched.
pub const INSIGHT_WINDOW_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Consistency,
    Sleep,
    Activity,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InsightLevel {
    Good,
    Moderate,
    NeedsImprovement,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    pub level: InsightLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub insights: Vec<Insight>,
    pub suggestions: Vec<String>,
    pub data_points: usize,
}

pub fn generate(records: &[DailyRecord]) -> InsightReport {
    if records.is_empty() {
        return InsightReport {
            message: Some("Not enough data to generate insights".into()),
            insights: Vec::new(),
            suggestions: vec!["Start tracking daily to get personalized insights".into()],
            data_points: 0,
        };
    }

    let mut insights = Vec::new();
    let mut suggestions = Vec::new();

    let consistency_rate = records.len() as f64 / INSIGHT_WINDOW_DAYS as f64 * 100.0;
    insights.push(Insight {
        kind: InsightKind::Consistency,
        message: format!(
            "You've tracked {} out of the last {} days ({}% consistency)",
            records.len(),
            INSIGHT_WINDOW_DAYS,
            consistency_rate.round()
        ),
        level: if consistency_rate > 70.0 {
            InsightLevel::Good
        } else if consistency_rate > 40.0 {
            InsightLevel::Moderate
        } else {
            InsightLevel::NeedsImprovement
        },
    });

    let sleep_hours: Vec<f64> = records.iter().filter_map(|r| r.sleep_hours()).collect();
    if !sleep_hours.is_empty() {
        let avg = sleep_hours.iter().sum::<f64>() / sleep_hours.len() as f64;
        insights.push(Insight {
            kind: InsightKind::Sleep,
            message: format!("Average sleep: {:.1} hours", avg),
            level: if (7.0..=9.0).contains(&avg) {
                InsightLevel::Good
            } else {
                InsightLevel::NeedsImprovement
            },
        });
        if avg < 7.0 {
            suggestions.push("Try to get 7-9 hours of sleep for better health".into());
        }
    }

    let steps: Vec<f64> = records.iter().filter_map(|r| r.steps()).collect();
    if !steps.is_empty() {
        let avg = steps.iter().sum::<f64>() / steps.len() as f64;
        insights.push(Insight {
            kind: InsightKind::Activity,
            message: format!("Average daily steps: {}", avg.round() as i64),
            level: if avg >= 8000.0 {
                InsightLevel::Good
            } else if avg >= 5000.0 {
                InsightLevel::Moderate
            } else {
                InsightLevel::NeedsImprovement
            },
        });
        if avg < 8000.0 {
            suggestions.push("Aim for 8,000-10,000 steps daily for better cardiovascular health".into());
        }
    }

    InsightReport {
        message: None,
        insights,
        suggestions,
        data_points: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::daily_record::{Activity, Sleep};
    use chrono::{Days, NaiveDate, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn blank_record(day_offset: u64) -> DailyRecord {
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        DailyRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            record_date: base.checked_add_days(Days::new(day_offset)).unwrap(),
            nutrition: None,
            sleep: None,
            activity: None,
            screen_time: None,
            environment: None,
            wellness: None,
            mental: None,
            vitals: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn with_sleep(day_offset: u64, hours: f64) -> DailyRecord {
        let mut r = blank_record(day_offset);
        r.sleep = Some(Json(Sleep {
            duration_hours: Some(hours),
            ..Default::default()
        }));
        r
    }

    fn with_steps(day_offset: u64, steps: u32) -> DailyRecord {
        let mut r = blank_record(day_offset);
        r.activity = Some(Json(Activity {
            steps: Some(steps),
            ..Default::default()
        }));
        r
    }

    fn find(report: &InsightReport, kind: InsightKind) -> Option<&Insight> {
        report.insights.iter().find(|i| i.kind == kind)
    }

    #[test]
    fn test_empty_batch_returns_starter_suggestion() {
        let report = generate(&[]);
        assert_eq!(
            report.message.as_deref(),
            Some("Not enough data to generate insights")
        );
        assert!(report.insights.is_empty());
        assert_eq!(
            report.suggestions,
            vec!["Start tracking daily to get personalized insights".to_string()]
        );
        assert_eq!(report.data_points, 0);
    }

    #[test]
    fn test_consistency_message_for_25_of_30() {
        let records: Vec<DailyRecord> = (0..25).map(blank_record).collect();
        let report = generate(&records);
        let consistency = find(&report, InsightKind::Consistency).unwrap();
        assert_eq!(
            consistency.message,
            "You've tracked 25 out of the last 30 days (83% consistency)"
        );
        assert_eq!(consistency.level, InsightLevel::Good);
        assert_eq!(report.data_points, 25);
    }

    #[test]
    fn test_consistency_level_boundaries() {
        // 21/30 = 70%, not strictly above 70 -> moderate.
        let records: Vec<DailyRecord> = (0..21).map(blank_record).collect();
        let report = generate(&records);
        assert_eq!(
            find(&report, InsightKind::Consistency).unwrap().level,
            InsightLevel::Moderate
        );

        // 12/30 = 40%, not strictly above 40 -> needs-improvement.
        let records: Vec<DailyRecord> = (0..12).map(blank_record).collect();
        let report = generate(&records);
        assert_eq!(
            find(&report, InsightKind::Consistency).unwrap().level,
            InsightLevel::NeedsImprovement
        );
    }

    #[test]
    fn test_sleep_insight_formats_one_decimal() {
        let records = vec![with_sleep(0, 6.0), with_sleep(1, 7.0), with_sleep(2, 7.0)];
        let report = generate(&records);
        let sleep = find(&report, InsightKind::Sleep).unwrap();
        assert_eq!(sleep.message, "Average sleep: 6.7 hours");
        assert_eq!(sleep.level, InsightLevel::NeedsImprovement);
        assert!(report
            .suggestions
            .contains(&"Try to get 7-9 hours of sleep for better health".to_string()));
    }

    #[test]
    fn test_healthy_sleep_has_no_suggestion() {
        let records = vec![with_sleep(0, 7.5), with_sleep(1, 8.0)];
        let report = generate(&records);
        assert_eq!(
            find(&report, InsightKind::Sleep).unwrap().level,
            InsightLevel::Good
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_step_levels_and_suggestion() {
        let cases = [
            (9000, InsightLevel::Good, false),
            (6000, InsightLevel::Moderate, true),
            (4000, InsightLevel::NeedsImprovement, true),
        ];
        for (steps, level, suggested) in cases {
            let records = vec![with_steps(0, steps)];
            let report = generate(&records);
            let activity = find(&report, InsightKind::Activity).unwrap();
            assert_eq!(activity.level, level);
            assert_eq!(activity.message, format!("Average daily steps: {}", steps));
            assert_eq!(
                report.suggestions.contains(
                    &"Aim for 8,000-10,000 steps daily for better cardiovascular health"
                        .to_string()
                ),
                suggested
            );
        }
    }

    #[test]
    fn test_rules_skip_missing_groups() {
        let records = vec![blank_record(0), blank_record(1)];
        let report = generate(&records);
        assert!(find(&report, InsightKind::Sleep).is_none());
        assert!(find(&report, InsightKind::Activity).is_none());
        assert!(find(&report, InsightKind::Consistency).is_some());
    }
}
