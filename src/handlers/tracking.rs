use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::daily_record::{DailyRecord, HistoryQuery, UpsertDailyRecordRequest};
use crate::AppState;

/// Upsert the day's record. Groups present in the body replace the stored
/// group wholesale; groups absent from the body keep their stored value.
pub async fn upsert_daily_record(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertDailyRecordRequest>,
) -> AppResult<Json<DailyRecord>> {
    body.validate_ranges().map_err(AppError::Validation)?;

    let record_date = body.record_date.unwrap_or_else(|| Utc::now().date_naive());

    let record = sqlx::query_as::<_, DailyRecord>(
        r#"
        INSERT INTO daily_records
            (id, user_id, record_date, nutrition, sleep, activity, screen_time,
             environment, wellness, mental, vitals)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (user_id, record_date) DO UPDATE SET
            nutrition = COALESCE($4, daily_records.nutrition),
            sleep = COALESCE($5, daily_records.sleep),
            activity = COALESCE($6, daily_records.activity),
            screen_time = COALESCE($7, daily_records.screen_time),
            environment = COALESCE($8, daily_records.environment),
            wellness = COALESCE($9, daily_records.wellness),
            mental = COALESCE($10, daily_records.mental),
            vitals = COALESCE($11, daily_records.vitals),
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(record_date)
    .bind(body.nutrition.map(Jsonb))
    .bind(body.sleep.map(Jsonb))
    .bind(body.activity.map(Jsonb))
    .bind(body.screen_time.map(Jsonb))
    .bind(body.environment.map(Jsonb))
    .bind(body.wellness.map(Jsonb))
    .bind(body.mental.map(Jsonb))
    .bind(body.vitals.map(Jsonb))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(record))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<DailyRecord>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());
    let limit = query.limit.unwrap_or(30).clamp(1, 365);

    let records = sqlx::query_as::<_, DailyRecord>(
        r#"
        SELECT * FROM daily_records
        WHERE user_id = $1 AND record_date BETWEEN $2 AND $3
        ORDER BY record_date DESC
        LIMIT $4
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .bind(limit)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(records))
}

/// Today's record, or JSON null when nothing has been tracked yet.
pub async fn today(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Option<DailyRecord>>> {
    let record = sqlx::query_as::<_, DailyRecord>(
        "SELECT * FROM daily_records WHERE user_id = $1 AND record_date = $2",
    )
    .bind(auth_user.id)
    .bind(Utc::now().date_naive())
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(record))
}
