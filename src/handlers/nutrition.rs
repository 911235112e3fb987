use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::food::{FoodItem, MealSlot, QuantityUnit};
use crate::services::nutrition;

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    pub q: Option<String>,
    pub category: Option<MealSlot>,
}

#[derive(Debug, Serialize)]
pub struct FoodSearchResponse {
    pub count: usize,
    pub foods: Vec<&'static FoodItem>,
}

/// The catalog is compiled in, so this endpoint never touches the DB.
pub async fn list_foods(Query(query): Query<FoodQuery>) -> Json<FoodSearchResponse> {
    let foods = nutrition::search(query.q.as_deref(), query.category);
    Json(FoodSearchResponse {
        count: foods.len(),
        foods,
    })
}

#[derive(Debug, Deserialize)]
pub struct CaloriesRequest {
    pub food_id: u32,
    pub quantity: f64,
    /// Defaults to the food's own serving unit.
    pub unit: Option<QuantityUnit>,
}

#[derive(Debug, Serialize)]
pub struct CaloriesResponse {
    pub food_id: u32,
    pub name: &'static str,
    pub quantity: f64,
    pub unit: QuantityUnit,
    pub grams: f64,
    pub calories: u32,
}

pub async fn calories(Json(body): Json<CaloriesRequest>) -> AppResult<Json<CaloriesResponse>> {
    if body.quantity <= 0.0 {
        return Err(AppError::Validation("Quantity must be greater than 0".into()));
    }

    let food = nutrition::find_food(body.food_id)
        .ok_or(AppError::NotFound("Food not found".into()))?;
    let unit = body.unit.unwrap_or(food.unit);
    let grams = nutrition::gram_equivalent(body.quantity, unit);

    Ok(Json(CaloriesResponse {
        food_id: food.id,
        name: food.name,
        quantity: body.quantity,
        unit,
        grams,
        calories: nutrition::calories_for(food.calories_per_100g, body.quantity, unit),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/foods", get(list_foods))
            .route("/api/foods/calories", post(calories))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_food_search_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/foods?q=rice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 3);
        assert_eq!(json["foods"][0]["name"], "White Rice");
    }

    #[tokio::test]
    async fn test_calories_route_unknown_food_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/foods/calories")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"food_id": 999, "quantity": 100}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Food not found");
        assert_eq!(json["error"]["code"], 404);
    }

    #[tokio::test]
    async fn test_calories_route_uses_default_unit() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/foods/calories")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"food_id": 11, "quantity": 150}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        // Food 11 is white rice at 130 kcal/100g, unit g: 150g -> 195 kcal.
        assert_eq!(json["unit"], "g");
        assert_eq!(json["grams"], 150.0);
        assert_eq!(json["calories"], 195);
    }
}
