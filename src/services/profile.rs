//! Profile-backed assessment plumbing and profile completion scoring.
//!
//! The risk scorer itself is pure (`services::risk`); what varies is where
//! the profile comes from. `ProfileStore` is that seam: the authenticated
//! endpoint reads the users row, the public wizard endpoint wraps the
//! submitted payload, and both feed the same `run_assessment`.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::user::User;
use crate::services::advice::{self, Recommendation};
use crate::services::risk::{self, AssessmentProfile, RiskAssessment};

pub trait ProfileStore {
    async fn load(&self) -> AppResult<AssessmentProfile>;
}

/// Loads the assessment inputs from the stored user profile.
pub struct PgProfileStore<'a> {
    db: &'a PgPool,
    user_id: Uuid,
}

impl<'a> PgProfileStore<'a> {
    pub fn new(db: &'a PgPool, user_id: Uuid) -> Self {
        Self { db, user_id }
    }
}

impl ProfileStore for PgProfileStore<'_> {
    async fn load(&self) -> AppResult<AssessmentProfile> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(self.user_id)
            .fetch_optional(self.db)
            .await?
            .ok_or(AppError::NotFound("User not found".into()))?;

        match (
            user.age,
            user.height_cm,
            user.weight_kg,
            user.diet_habit,
            user.activity_level,
            user.screen_time,
            user.occupation,
        ) {
            (
                Some(age),
                Some(height_cm),
                Some(weight_kg),
                Some(diet),
                Some(activity),
                Some(screen_time),
                Some(occupation),
            ) => Ok(AssessmentProfile {
                age,
                bmi: risk::bmi(weight_kg, height_cm),
                diet,
                activity,
                screen_time,
                occupation,
            }),
            _ => {
                let mut missing = Vec::new();
                if user.age.is_none() {
                    missing.push("age");
                }
                if user.height_cm.is_none() {
                    missing.push("height_cm");
                }
                if user.weight_kg.is_none() {
                    missing.push("weight_kg");
                }
                if user.diet_habit.is_none() {
                    missing.push("diet_habit");
                }
                if user.activity_level.is_none() {
                    missing.push("activity_level");
                }
                if user.screen_time.is_none() {
                    missing.push("screen_time");
                }
                if user.occupation.is_none() {
                    missing.push("occupation");
                }
                Err(AppError::Validation(format!(
                    "Complete your health profile to run an assessment (missing: {})",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Wraps a profile submitted in the request body (the anonymous wizard).
pub struct InlineProfileStore {
    profile: AssessmentProfile,
}

impl InlineProfileStore {
    pub fn new(profile: AssessmentProfile) -> Self {
        Self { profile }
    }
}

impl ProfileStore for InlineProfileStore {
    async fn load(&self) -> AppResult<AssessmentProfile> {
        Ok(self.profile)
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub recommendations: Vec<Recommendation>,
}

pub async fn run_assessment<S: ProfileStore>(store: &S) -> AppResult<AssessmentReport> {
    let profile = store.load().await?;
    let assessment = risk::assess(&profile);
    let recommendations = advice::personalized(&assessment.top_concerns);
    Ok(AssessmentReport {
        assessment,
        recommendations,
    })
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Percentage of trackable profile fields that are filled (18 fields across
/// identity, health baseline, lifestyle, location, goals, daily targets and
/// work pattern).
pub fn completion_percentage(user: &User) -> i32 {
    let checks = [
        !user.name.is_empty(),
        !user.email.is_empty(),
        user.age.is_some(),
        user.gender.is_some(),
        has_text(&user.phone),
        user.height_cm.is_some(),
        user.weight_kg.is_some(),
        has_text(&user.blood_group),
        user.activity_level.is_some(),
        user.diet_habit.is_some(),
        has_text(&user.city),
        has_text(&user.state),
        user.goals.as_ref().is_some_and(|g| !g.is_empty()),
        user.daily_step_target.is_some(),
        user.daily_water_target_ml.is_some(),
        user.daily_calorie_target.is_some(),
        user.occupation.is_some(),
        user.screen_time.is_some(),
    ];
    let filled = checks.iter().filter(|&&filled| filled).count();
    (filled as f64 / checks.len() as f64 * 100.0).round() as i32
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MissingFields {
    pub section: &'static str,
    pub fields: Vec<&'static str>,
}

/// Required fields not yet filled, grouped by profile section. Sections
/// with nothing missing are omitted.
pub fn missing_fields(user: &User) -> Vec<MissingFields> {
    let mut sections = Vec::new();

    let mut basic = Vec::new();
    if user.name.is_empty() {
        basic.push("name");
    }
    if user.email.is_empty() {
        basic.push("email");
    }
    if user.age.is_none() {
        basic.push("age");
    }
    if user.gender.is_none() {
        basic.push("gender");
    }
    if !basic.is_empty() {
        sections.push(MissingFields {
            section: "Basic Information",
            fields: basic,
        });
    }

    let mut health = Vec::new();
    if user.height_cm.is_none() {
        health.push("height_cm");
    }
    if user.weight_kg.is_none() {
        health.push("weight_kg");
    }
    if !health.is_empty() {
        sections.push(MissingFields {
            section: "Health Profile",
            fields: health,
        });
    }

    let mut lifestyle = Vec::new();
    if user.activity_level.is_none() {
        lifestyle.push("activity_level");
    }
    if user.diet_habit.is_none() {
        lifestyle.push("diet_habit");
    }
    if !lifestyle.is_empty() {
        sections.push(MissingFields {
            section: "Lifestyle",
            fields: lifestyle,
        });
    }

    if !has_text(&user.city) {
        sections.push(MissingFields {
            section: "Location",
            fields: vec!["city"],
        });
    }

    if !user.goals.as_ref().is_some_and(|g| !g.is_empty()) {
        sections.push(MissingFields {
            section: "Goals",
            fields: vec!["goals"],
        });
    }

    sections
}

#[derive(Debug, Serialize)]
pub struct ProfileCompletion {
    pub percentage: i32,
    pub onboarding_completed: bool,
    pub missing_fields: Vec<MissingFields>,
}

pub fn completion_report(user: &User) -> ProfileCompletion {
    ProfileCompletion {
        percentage: user.profile_completion,
        onboarding_completed: user.onboarding_completed,
        missing_fields: missing_fields(user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{
        ActivityLevel, DietHabit, Gender, OccupationType, ScreenTimeLevel,
    };
    use chrono::Utc;

    fn bare_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "asha@example.com".into(),
            password_hash: "x".into(),
            name: "Asha".into(),
            age: None,
            gender: None,
            phone: None,
            height_cm: None,
            weight_kg: None,
            blood_group: None,
            activity_level: None,
            diet_habit: None,
            screen_time: None,
            occupation: None,
            smoking_status: None,
            alcohol_consumption: None,
            city: None,
            state: None,
            country: Some("India".into()),
            goals: None,
            daily_step_target: None,
            daily_water_target_ml: None,
            daily_calorie_target: None,
            onboarding_completed: false,
            profile_completion: 0,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn full_user() -> User {
        let mut u = bare_user();
        u.age = Some(31);
        u.gender = Some(Gender::Female);
        u.phone = Some("9876543210".into());
        u.height_cm = Some(162.0);
        u.weight_kg = Some(58.0);
        u.blood_group = Some("O+".into());
        u.activity_level = Some(ActivityLevel::Moderate);
        u.diet_habit = Some(DietHabit::Homemade);
        u.screen_time = Some(ScreenTimeLevel::Moderate);
        u.occupation = Some(OccupationType::WorkingProfessional);
        u.city = Some("Pune".into());
        u.state = Some("Maharashtra".into());
        u.goals = Some(vec!["better-sleep".into()]);
        u.daily_step_target = Some(8000);
        u.daily_water_target_ml = Some(2500);
        u.daily_calorie_target = Some(2000);
        u
    }

    #[test]
    fn test_completion_counts_two_of_eighteen() {
        // Only name and email are filled: 2/18 -> 11%.
        assert_eq!(completion_percentage(&bare_user()), 11);
    }

    #[test]
    fn test_completion_full_profile_is_hundred() {
        assert_eq!(completion_percentage(&full_user()), 100);
    }

    #[test]
    fn test_missing_fields_groups_by_section() {
        let missing = missing_fields(&bare_user());
        let sections: Vec<&str> = missing.iter().map(|m| m.section).collect();
        assert_eq!(
            sections,
            vec![
                "Basic Information",
                "Health Profile",
                "Lifestyle",
                "Location",
                "Goals"
            ]
        );
        assert_eq!(missing[0].fields, vec!["age", "gender"]);
        assert_eq!(missing[1].fields, vec!["height_cm", "weight_kg"]);
    }

    #[test]
    fn test_missing_fields_empty_for_full_profile() {
        assert!(missing_fields(&full_user()).is_empty());
    }

    #[tokio::test]
    async fn test_inline_store_feeds_assessment() {
        let profile = AssessmentProfile {
            age: 50,
            bmi: 32.0,
            diet: DietHabit::Junk,
            activity: ActivityLevel::Low,
            screen_time: ScreenTimeLevel::Heavy,
            occupation: OccupationType::WorkingProfessional,
        };
        let store = InlineProfileStore::new(profile);
        let report = run_assessment(&store).await.unwrap();
        assert_eq!(report.assessment.overall_score, 100);
        assert_eq!(report.recommendations.len(), 3);
    }
}
