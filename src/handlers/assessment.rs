use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::user::{ActivityLevel, DietHabit, OccupationType, ScreenTimeLevel};
use crate::services::profile::{
    run_assessment, AssessmentReport, InlineProfileStore, PgProfileStore,
};
use crate::services::risk::{self, AssessmentProfile};
use crate::AppState;

/// Ad-hoc profile for the public assessment wizard. No account needed.
#[derive(Debug, Deserialize, Validate)]
pub struct AssessmentRequest {
    #[validate(range(min = 1, max = 150, message = "Age must be 1-150"))]
    pub age: i32,

    #[validate(range(min = 50.0, max = 300.0, message = "Height must be 50-300 cm"))]
    pub height_cm: f64,

    #[validate(range(min = 10.0, max = 500.0, message = "Weight must be 10-500 kg"))]
    pub weight_kg: f64,

    pub diet: DietHabit,
    pub activity_level: ActivityLevel,
    pub screen_time: ScreenTimeLevel,
    pub occupation: OccupationType,
}

pub async fn assess(Json(body): Json<AssessmentRequest>) -> AppResult<Json<AssessmentReport>> {
    body.validate().map_err(AppError::from_validation)?;

    let store = InlineProfileStore::new(AssessmentProfile {
        age: body.age,
        bmi: risk::bmi(body.weight_kg, body.height_cm),
        diet: body.diet,
        activity: body.activity_level,
        screen_time: body.screen_time,
        occupation: body.occupation,
    });
    Ok(Json(run_assessment(&store).await?))
}

pub async fn assess_me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<AssessmentReport>> {
    let store = PgProfileStore::new(&state.db, auth_user.id);
    Ok(Json(run_assessment(&store).await?))
}
