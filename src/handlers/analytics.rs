use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use crate::services::analytics::{self, PeriodComparison, TrendReport};
use crate::services::insights::{self, InsightReport, INSIGHT_WINDOW_DAYS};
use crate::AppState;

/// Records in a date range, oldest first. The trend split depends on
/// chronological order, so every aggregate below reads through this.
async fn records_between(
    db: &PgPool,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<DailyRecord>> {
    let records = sqlx::query_as::<_, DailyRecord>(
        r#"
        SELECT * FROM daily_records
        WHERE user_id = $1 AND record_date BETWEEN $2 AND $3
        ORDER BY record_date ASC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await?;
    Ok(records)
}

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct DailyAnalyticsResponse {
    pub date: NaiveDate,
    pub record: Option<DailyRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub async fn daily(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<DailyQuery>,
) -> AppResult<Json<DailyAnalyticsResponse>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let record = sqlx::query_as::<_, DailyRecord>(
        "SELECT * FROM daily_records WHERE user_id = $1 AND record_date = $2",
    )
    .bind(auth_user.id)
    .bind(date)
    .fetch_optional(&state.db)
    .await?;

    let message = record.is_none().then_some("No record found for this date");
    Ok(Json(DailyAnalyticsResponse {
        date,
        record,
        message,
    }))
}

#[derive(Debug, Serialize)]
pub struct PeriodAnalyticsResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub data_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<TrendReport>,
    pub records: Vec<DailyRecord>,
}

async fn period_analytics(
    db: &PgPool,
    user_id: Uuid,
    days: i64,
) -> AppResult<PeriodAnalyticsResponse> {
    let end = Utc::now().date_naive();
    let start = end - chrono::Duration::days(days - 1);

    let records = records_between(db, user_id, start, end).await?;
    let trends = analytics::trend_report(&records);

    Ok(PeriodAnalyticsResponse {
        start_date: start,
        end_date: end,
        data_points: records.len(),
        trends,
        records,
    })
}

pub async fn weekly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<PeriodAnalyticsResponse>> {
    Ok(Json(period_analytics(&state.db, auth_user.id, 7).await?))
}

pub async fn monthly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<PeriodAnalyticsResponse>> {
    Ok(Json(period_analytics(&state.db, auth_user.id, 30).await?))
}

pub async fn insights(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<InsightReport>> {
    let end = Utc::now().date_naive();
    let start = end - chrono::Duration::days(INSIGHT_WINDOW_DAYS as i64 - 1);

    let records = records_between(&state.db, auth_user.id, start, end).await?;
    Ok(Json(insights::generate(&records)))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub start1: Option<NaiveDate>,
    pub end1: Option<NaiveDate>,
    pub start2: Option<NaiveDate>,
    pub end2: Option<NaiveDate>,
}

pub async fn compare(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<CompareQuery>,
) -> AppResult<Json<PeriodComparison>> {
    let (start1, end1, start2, end2) = match (query.start1, query.end1, query.start2, query.end2)
    {
        (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
        _ => {
            return Err(AppError::Validation(
                "start1, end1, start2 and end2 are all required".into(),
            ))
        }
    };

    let period1 = records_between(&state.db, auth_user.id, start1, end1).await?;
    let period2 = records_between(&state.db, auth_user.id, start2, end2).await?;

    Ok(Json(analytics::compare_periods(&period1, &period2)))
}
