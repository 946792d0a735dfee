//! Calorie calculation HTTP endpoint.
//!
//! GET /v1/api/calculate-calories?weight=160&height=68&age=30&gender=male&...
//!
//! The handler validates and types the raw query parameters, fills the
//! optional-field defaults, and hands a fully-resolved input to the
//! estimation engine in `services::calorie`. No estimation logic lives here.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::{AppError, ErrorResponse};
use crate::helpers::parse_csv_param;
use crate::services::calorie::{self, CalorieInput, CalorieResult, DayPlan};

/// Maximum accepted trip duration in days.
const MAX_TRIP_DURATION_DAYS: u32 = 30;

/// Query parameters for the calorie calculation endpoint.
///
/// Field names mirror the public wire format, including the historical
/// lowercase `totalelevation` / `peakaltitude` spellings.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CalorieQuery {
    /// Weight in pounds
    pub weight: f64,
    /// Height in inches
    pub height: f64,
    /// Age in years
    pub age: f64,
    /// Gender (male, female, other)
    pub gender: String,
    /// Baseline activity level (sedentary, lightly_active, moderately_active,
    /// very_active, extra_active)
    #[serde(rename = "activityLevel")]
    pub activity_level: String,
    /// Trip duration in days
    #[serde(rename = "tripDuration")]
    pub trip_duration: u32,
    /// Total trail distance in miles
    #[serde(rename = "trailDistance")]
    pub trail_distance: f64,
    /// Total elevation gain in feet
    #[serde(rename = "totalelevation")]
    pub total_elevation: f64,
    /// Season (spring, summer, fall, winter)
    pub season: String,
    /// Day number. Accepted for API compatibility; unused.
    #[allow(dead_code)]
    pub day: Option<u32>,
    /// Comma-separated trail distance per day, in miles
    #[serde(rename = "trailDistanceByDay")]
    pub trail_distance_by_day: Option<String>,
    /// Comma-separated elevation gain per day, in feet
    #[serde(rename = "totalelevationByDay")]
    pub total_elevation_by_day: Option<String>,
    /// Average temperature in Fahrenheit
    #[serde(rename = "averageTemperature")]
    pub average_temperature: Option<f64>,
    /// Minimum temperature in Fahrenheit
    #[serde(rename = "minTemperature")]
    pub min_temperature: Option<f64>,
    /// Maximum temperature in Fahrenheit
    #[serde(rename = "maxTemperature")]
    pub max_temperature: Option<f64>,
    /// Peak altitude in feet
    #[serde(rename = "peakaltitude")]
    pub peak_altitude: Option<f64>,
    /// Precipitation chance percentage
    #[serde(rename = "precipitationChance")]
    pub precipitation_chance: Option<f64>,
    /// Pack base weight in pounds
    #[serde(rename = "baseWeight")]
    pub base_weight: Option<f64>,
    /// Water weight in pounds
    #[serde(rename = "waterWeight")]
    pub water_weight: Option<f64>,
    /// Hiker experience level (beginner, intermediate, advanced, expert)
    #[serde(rename = "hikerExperience")]
    pub hiker_experience: Option<String>,
}

/// Calculate per-day and trip-total calorie and macronutrient requirements.
///
/// Runs the estimation engine over the validated input: Mifflin-St Jeor BMR,
/// Pandolf-based hiking energy expenditure, environmental adjustment factors
/// and a day-drifting macro split. Trip totals are the sum of the per-day
/// values.
#[utoipa::path(
    get,
    path = "/v1/api/calculate-calories",
    tag = "Calories",
    params(CalorieQuery),
    responses(
        (status = 200, description = "Per-day breakdown and trip totals", body = CalorieResult),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
    )
)]
pub async fn calculate_calories(
    Query(params): Query<CalorieQuery>,
) -> Result<Json<CalorieResult>, AppError> {
    let input = build_input(params)?;
    Ok(Json(calorie::compute(&input)))
}

/// Validate query parameters and construct the typed engine input.
///
/// All optional-field defaulting happens here (pack weights to 0, experience
/// to intermediate) so the engine formulas stay branch-free. Unrecognized
/// categorical values are rejected here and never reach the engine.
fn build_input(params: CalorieQuery) -> Result<CalorieInput, AppError> {
    let gender = params.gender.parse().map_err(AppError::BadRequest)?;
    let activity_level = params.activity_level.parse().map_err(AppError::BadRequest)?;
    let season = params.season.parse().map_err(AppError::BadRequest)?;
    let experience = params
        .hiker_experience
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(AppError::BadRequest)?
        .unwrap_or_default();

    if params.trip_duration < 1 || params.trip_duration > MAX_TRIP_DURATION_DAYS {
        return Err(AppError::BadRequest(format!(
            "tripDuration must be between 1 and {}",
            MAX_TRIP_DURATION_DAYS
        )));
    }

    // NaN passes range comparisons, so check is_finite() explicitly.
    for (name, value) in [
        ("weight", params.weight),
        ("height", params.height),
        ("age", params.age),
        ("trailDistance", params.trail_distance),
        ("totalelevation", params.total_elevation),
    ] {
        if !value.is_finite() {
            return Err(AppError::BadRequest(format!(
                "{} must be a finite number",
                name
            )));
        }
    }

    let distance = day_plan(
        params.trail_distance_by_day.as_deref(),
        params.trail_distance,
        params.trip_duration,
        "trailDistanceByDay",
    )?;
    let elevation = day_plan(
        params.total_elevation_by_day.as_deref(),
        params.total_elevation,
        params.trip_duration,
        "totalelevationByDay",
    )?;

    Ok(CalorieInput {
        weight_lbs: params.weight,
        height_in: params.height,
        age_years: params.age,
        gender,
        activity_level,
        trip_duration_days: params.trip_duration,
        distance,
        elevation,
        season,
        average_temperature_f: params.average_temperature,
        min_temperature_f: params.min_temperature,
        max_temperature_f: params.max_temperature,
        peak_altitude_ft: params.peak_altitude,
        precipitation_chance_pct: params.precipitation_chance,
        base_weight_lbs: params.base_weight.unwrap_or(0.0),
        water_weight_lbs: params.water_weight.unwrap_or(0.0),
        experience,
    })
}

/// Resolve an optional comma-separated per-day override into a `DayPlan`.
///
/// Absent override → the trip total, divided evenly across days by the
/// engine. Present override → one value per trip day, verbatim.
fn day_plan(
    raw: Option<&str>,
    total: f64,
    duration_days: u32,
    name: &str,
) -> Result<DayPlan, AppError> {
    let Some(csv) = raw else {
        return Ok(DayPlan::Uniform(total));
    };

    let values =
        parse_csv_param(csv).map_err(|e| AppError::BadRequest(format!("Invalid {}: {}", name, e)))?;

    if values.len() != duration_days as usize {
        return Err(AppError::BadRequest(format!(
            "{} must contain exactly {} values, got {}",
            name,
            duration_days,
            values.len()
        )));
    }
    if let Some(v) = values.iter().find(|v| !v.is_finite()) {
        return Err(AppError::BadRequest(format!(
            "{} must contain finite numbers, got {}",
            name, v
        )));
    }

    Ok(DayPlan::PerDay(values))
}
