use axum::{extract::State, Extension, Json};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::user::{UpdateGoalsRequest, UpdateProfileRequest, User, UserProfile};
use crate::services::profile::{self, ProfileCompletion};
use crate::AppState;

async fn fetch_user(db: &PgPool, user_id: Uuid) -> AppResult<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))
}

/// Recompute the stored completion percentage from the freshly updated row.
async fn persist_completion(db: &PgPool, user: &User) -> AppResult<User> {
    let pct = profile::completion_percentage(user);
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET profile_completion = $2 WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .bind(pct)
    .fetch_one(db)
    .await?;
    Ok(user)
}

async fn apply_profile_update(
    db: &PgPool,
    user_id: Uuid,
    body: &UpdateProfileRequest,
) -> AppResult<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            name = COALESCE($2, name),
            age = COALESCE($3, age),
            gender = COALESCE($4, gender),
            phone = COALESCE($5, phone),
            height_cm = COALESCE($6, height_cm),
            weight_kg = COALESCE($7, weight_kg),
            blood_group = COALESCE($8, blood_group),
            activity_level = COALESCE($9, activity_level),
            diet_habit = COALESCE($10, diet_habit),
            screen_time = COALESCE($11, screen_time),
            occupation = COALESCE($12, occupation),
            smoking_status = COALESCE($13, smoking_status),
            alcohol_consumption = COALESCE($14, alcohol_consumption),
            city = COALESCE($15, city),
            state = COALESCE($16, state),
            country = COALESCE($17, country),
            daily_step_target = COALESCE($18, daily_step_target),
            daily_water_target_ml = COALESCE($19, daily_water_target_ml),
            daily_calorie_target = COALESCE($20, daily_calorie_target),
            goals = COALESCE($21, goals),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&body.name)
    .bind(body.age)
    .bind(body.gender)
    .bind(&body.phone)
    .bind(body.height_cm)
    .bind(body.weight_kg)
    .bind(&body.blood_group)
    .bind(body.activity_level)
    .bind(body.diet_habit)
    .bind(body.screen_time)
    .bind(body.occupation)
    .bind(&body.smoking_status)
    .bind(&body.alcohol_consumption)
    .bind(&body.city)
    .bind(&body.state)
    .bind(&body.country)
    .bind(body.daily_step_target)
    .bind(body.daily_water_target_ml)
    .bind(body.daily_calorie_target)
    .bind(&body.goals)
    .fetch_one(db)
    .await?;

    persist_completion(db, &user).await
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserProfile>> {
    let user = fetch_user(&state.db, auth_user.id).await?;
    Ok(Json(user.into()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    body.validate().map_err(AppError::from_validation)?;

    // Email and password never change through this endpoint; the DTO simply
    // has no fields for them.
    let user = apply_profile_update(&state.db, auth_user.id, &body).await?;
    Ok(Json(user.into()))
}

/// Same shape as a profile update, plus it marks onboarding as done.
pub async fn complete_onboarding(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    body.validate().map_err(AppError::from_validation)?;

    let user = apply_profile_update(&state.db, auth_user.id, &body).await?;
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET onboarding_completed = true, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(user.id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(user.into()))
}

pub async fn completion(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<ProfileCompletion>> {
    let user = fetch_user(&state.db, auth_user.id).await?;
    Ok(Json(profile::completion_report(&user)))
}

/// Replaces the goal list wholesale. Sending an empty list clears it.
pub async fn update_goals(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateGoalsRequest>,
) -> AppResult<Json<UserProfile>> {
    body.validate().map_err(AppError::from_validation)?;

    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET goals = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
    )
    .bind(auth_user.id)
    .bind(&body.goals)
    .fetch_one(&state.db)
    .await?;

    let user = persist_completion(&state.db, &user).await?;
    Ok(Json(user.into()))
}
