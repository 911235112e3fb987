use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::services::aqi::{self, AqiCategory};

#[derive(Debug, Deserialize)]
pub struct AirQuery {
    pub pm25: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AirQualityResponse {
    pub pm25: f64,
    pub aqi: u16,
    pub category: AqiCategory,
    pub label: &'static str,
    pub health_message: &'static str,
    pub recommendation: &'static str,
}

pub async fn air_quality(Query(query): Query<AirQuery>) -> AppResult<Json<AirQualityResponse>> {
    let pm25 = query
        .pm25
        .ok_or(AppError::Validation("pm25 query parameter is required".into()))?;
    if !pm25.is_finite() || pm25 < 0.0 {
        return Err(AppError::Validation(
            "pm25 must be a non-negative number".into(),
        ));
    }

    let aqi = aqi::pm25_to_aqi(pm25);
    let category = AqiCategory::from_aqi(aqi);

    Ok(Json(AirQualityResponse {
        pm25,
        aqi,
        category,
        label: category.label(),
        health_message: category.health_message(),
        recommendation: category.recommendation(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;

    #[tokio::test]
    async fn test_air_quality_maps_pm25() {
        let Json(body) = air_quality(Query(AirQuery { pm25: Some(45.0) })).await.unwrap();
        assert_eq!(body.aqi, 75);
        assert_eq!(body.category, AqiCategory::Satisfactory);
        assert_eq!(body.label, "Satisfactory");
    }

    #[tokio::test]
    async fn test_air_quality_requires_pm25() {
        let err = air_quality(Query(AirQuery { pm25: None })).await.err();
        assert!(matches!(err, Some(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_air_quality_rejects_negative() {
        let err = air_quality(Query(AirQuery { pm25: Some(-1.0) })).await.err();
        assert!(matches!(err, Some(AppError::Validation(_))));
    }
}
