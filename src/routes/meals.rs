//! Meal recommendation HTTP endpoint (pass-through stub).
//!
//! POST /v1/api/recommend-meals — accepts trip calorie requirements and
//! echoes them back unchanged. Meal-content recommendation logic is out of
//! scope; the endpoint exists to pin the request/response contract.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Daily calorie and macronutrient requirements for one trip day.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequirement {
    /// Day number (1-based)
    pub day: u32,
    /// Total calories for the day
    pub calories: i64,
    /// Calories from carbohydrates
    pub carbohydrates_calories: i64,
    /// Calories from protein
    pub protein_calories: i64,
    /// Calories from fat
    pub fat_calories: i64,
}

/// Input parameters for meal recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendationRequest {
    /// Total calories for the trip
    pub total_calories: i64,
    /// Total calories from carbohydrates
    pub total_carbohydrates_calories: i64,
    /// Total calories from protein
    pub total_protein_calories: i64,
    /// Total calories from fat
    pub total_fat_calories: i64,
    /// Per-day requirements
    pub daily_requirements: Vec<DailyRequirement>,
    /// Trip duration in days
    pub trip_duration: u32,
}

/// Meal recommendation response. Currently an echo of the request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendationResponse {
    /// Total calories for the trip
    pub total_calories: i64,
    /// Total calories from carbohydrates
    pub total_carbohydrates_calories: i64,
    /// Total calories from protein
    pub total_protein_calories: i64,
    /// Total calories from fat
    pub total_fat_calories: i64,
    /// Per-day requirements
    pub daily_requirements: Vec<DailyRequirement>,
    /// Trip duration in days
    pub trip_duration: u32,
}

/// Recommend meals for a trip's calorie requirements.
///
/// Pass-through stub: echoes the submitted requirements back unchanged.
#[utoipa::path(
    post,
    path = "/v1/api/recommend-meals",
    tag = "Meals",
    request_body = MealRecommendationRequest,
    responses(
        (status = 200, description = "Meal recommendations (echo of the request)", body = MealRecommendationResponse),
    )
)]
pub async fn recommend_meals(
    Json(request): Json<MealRecommendationRequest>,
) -> Json<MealRecommendationResponse> {
    Json(MealRecommendationResponse {
        total_calories: request.total_calories,
        total_carbohydrates_calories: request.total_carbohydrates_calories,
        total_protein_calories: request.total_protein_calories,
        total_fat_calories: request.total_fat_calories,
        daily_requirements: request.daily_requirements,
        trip_duration: request.trip_duration,
    })
}
