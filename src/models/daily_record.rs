use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One wellness record per user per calendar day. Each metric group is a
/// JSONB column; a NULL column means the group was never submitted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub record_date: NaiveDate,
    pub nutrition: Option<Json<Nutrition>>,
    pub sleep: Option<Json<Sleep>>,
    pub activity: Option<Json<Activity>>,
    pub screen_time: Option<Json<ScreenTime>>,
    pub environment: Option<Json<Environment>>,
    pub wellness: Option<Json<Wellness>>,
    pub mental: Option<Json<Mental>>,
    pub vitals: Option<Json<Vitals>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyRecord {
    pub fn steps(&self) -> Option<f64> {
        self.activity.as_ref().and_then(|a| a.steps).map(f64::from)
    }

    pub fn sleep_hours(&self) -> Option<f64> {
        self.sleep.as_ref().and_then(|s| s.duration_hours)
    }

    pub fn water_ml(&self) -> Option<f64> {
        self.nutrition
            .as_ref()
            .and_then(|n| n.water_intake_ml)
            .map(f64::from)
    }

    pub fn total_calories(&self) -> Option<f64> {
        self.nutrition
            .as_ref()
            .and_then(|n| n.total_calories)
            .map(f64::from)
    }

    pub fn exercise_minutes(&self) -> Option<f64> {
        self.activity
            .as_ref()
            .and_then(|a| a.exercise_minutes)
            .map(f64::from)
    }

    pub fn stress_level(&self) -> Option<f64> {
        self.mental
            .as_ref()
            .and_then(|m| m.stress_level)
            .map(f64::from)
    }

    pub fn screen_minutes(&self) -> Option<f64> {
        self.screen_time
            .as_ref()
            .and_then(|s| s.total_minutes)
            .map(f64::from)
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mental.as_ref().and_then(|m| m.mood)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake_ml: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glasses_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine_cups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<Meal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetable_servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruit_servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_type: Option<ProteinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub junk_food: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProteinType {
    PlantBased,
    AnimalBased,
    Mixed,
    None,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sleep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<SleepQuality>,
    /// "HH:MM" wall-clock strings as entered, no timezone math.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake_time: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceUsage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceUsage {
    pub device: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aqi: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdoor_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunlight_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<NoiseLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor_air: Option<IndoorAirQuality>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Loud,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndoorAirQuality {
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wellness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_pain: Option<BodyPain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meditation_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPain {
    pub present: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mental {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Self-reported mood on a five-point scale.
///
/// Deserialization is lenient: an unrecognized label decodes as `Neutral`
/// rather than rejecting the whole submission, so old clients with new
/// labels (or vice versa) never lose a day of data.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    VeryPoor,
    Poor,
    Neutral,
    Good,
    Excellent,
}

impl Mood {
    pub fn from_label(label: &str) -> Self {
        match label {
            "very-poor" => Mood::VeryPoor,
            "poor" => Mood::Poor,
            "neutral" => Mood::Neutral,
            "good" => Mood::Good,
            "excellent" => Mood::Excellent,
            _ => Mood::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::VeryPoor => "very-poor",
            Mood::Poor => "poor",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Excellent => "excellent",
        }
    }

    /// Ordinal score used for averaging and trend math.
    pub fn score(self) -> u8 {
        match self {
            Mood::VeryPoor => 1,
            Mood::Poor => 2,
            Mood::Neutral => 3,
            Mood::Good => 4,
            Mood::Excellent => 5,
        }
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Mood::from_label(&label))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vitals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_bpm: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<BloodPressure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

/// POST /api/tracking/daily body. Groups present here replace the stored
/// group wholesale; absent groups keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpsertDailyRecordRequest {
    pub record_date: Option<NaiveDate>,
    pub nutrition: Option<Nutrition>,
    pub sleep: Option<Sleep>,
    pub activity: Option<Activity>,
    pub screen_time: Option<ScreenTime>,
    pub environment: Option<Environment>,
    pub wellness: Option<Wellness>,
    pub mental: Option<Mental>,
    pub vitals: Option<Vitals>,
}

impl UpsertDailyRecordRequest {
    /// Range checks serde types cannot express. Returns the first violation.
    pub fn validate_ranges(&self) -> Result<(), String> {
        if let Some(sleep) = &self.sleep {
            if let Some(hours) = sleep.duration_hours {
                if !(0.0..=24.0).contains(&hours) {
                    return Err("Sleep duration must be 0-24 hours".into());
                }
            }
        }
        if let Some(mental) = &self.mental {
            if let Some(stress) = mental.stress_level {
                if !(1..=10).contains(&stress) {
                    return Err("Stress level must be 1-10".into());
                }
            }
            if let Some(notes) = &mental.notes {
                if notes.len() > 500 {
                    return Err("Notes must be under 500 characters".into());
                }
            }
        }
        if let Some(wellness) = &self.wellness {
            if let Some(energy) = wellness.energy_level {
                if !(1..=10).contains(&energy) {
                    return Err("Energy level must be 1-10".into());
                }
            }
            if let Some(pain) = &wellness.body_pain {
                if let Some(severity) = pain.severity {
                    if !(1..=10).contains(&severity) {
                        return Err("Pain severity must be 1-10".into());
                    }
                }
            }
        }
        if let Some(env) = &self.environment {
            if let Some(aqi) = env.aqi {
                if aqi > 500 {
                    return Err("AQI must be 0-500".into());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_labels_round_trip() {
        for mood in [
            Mood::VeryPoor,
            Mood::Poor,
            Mood::Neutral,
            Mood::Good,
            Mood::Excellent,
        ] {
            assert_eq!(Mood::from_label(mood.label()), mood);
        }
    }

    #[test]
    fn test_mood_unknown_label_decodes_neutral() {
        let mental: Mental = serde_json::from_str(r#"{"mood":"fantastic"}"#).unwrap();
        assert_eq!(mental.mood, Some(Mood::Neutral));
    }

    #[test]
    fn test_mood_scores_cover_one_to_five() {
        let scores: Vec<u8> = [
            Mood::VeryPoor,
            Mood::Poor,
            Mood::Neutral,
            Mood::Good,
            Mood::Excellent,
        ]
        .iter()
        .map(|m| m.score())
        .collect();
        assert_eq!(scores, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_validate_ranges_rejects_bad_sleep() {
        let req = UpsertDailyRecordRequest {
            record_date: None,
            nutrition: None,
            sleep: Some(Sleep {
                duration_hours: Some(25.0),
                ..Default::default()
            }),
            activity: None,
            screen_time: None,
            environment: None,
            wellness: None,
            mental: None,
            vitals: None,
        };
        assert!(req.validate_ranges().is_err());
    }

    #[test]
    fn test_validate_ranges_accepts_partial_groups() {
        let req = UpsertDailyRecordRequest {
            record_date: None,
            nutrition: Some(Nutrition {
                water_intake_ml: Some(2000),
                ..Default::default()
            }),
            sleep: None,
            activity: None,
            screen_time: None,
            environment: None,
            wellness: None,
            mental: None,
            vitals: None,
        };
        assert!(req.validate_ranges().is_ok());
    }
}
