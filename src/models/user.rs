use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub blood_group: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub diet_habit: Option<DietHabit>,
    pub screen_time: Option<ScreenTimeLevel>,
    pub occupation: Option<OccupationType>,
    pub smoking_status: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub goals: Option<Vec<String>>,
    pub daily_step_target: Option<i32>,
    pub daily_water_target_ml: Option<i32>,
    pub daily_calorie_target: Option<i32>,
    pub onboarding_completed: bool,
    pub profile_completion: i32,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "gender", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Physical activity level as reported during onboarding or the risk wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "activity_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

/// Dominant eating pattern. `Junk` and `Outside` drive most diet risk weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "diet_habit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DietHabit {
    Homemade,
    Mixed,
    Outside,
    Junk,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "screen_time_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScreenTimeLevel {
    Low,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "occupation_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OccupationType {
    Student,
    WorkingProfessional,
    Homemaker,
    Retired,
}

/// Full profile returned to the owning user. Everything except the hash.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub blood_group: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub diet_habit: Option<DietHabit>,
    pub screen_time: Option<ScreenTimeLevel>,
    pub occupation: Option<OccupationType>,
    pub smoking_status: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub goals: Vec<String>,
    pub daily_step_target: Option<i32>,
    pub daily_water_target_ml: Option<i32>,
    pub daily_calorie_target: Option<i32>,
    pub onboarding_completed: bool,
    pub profile_completion: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            age: u.age,
            gender: u.gender,
            phone: u.phone,
            height_cm: u.height_cm,
            weight_kg: u.weight_kg,
            blood_group: u.blood_group,
            activity_level: u.activity_level,
            diet_habit: u.diet_habit,
            screen_time: u.screen_time,
            occupation: u.occupation,
            smoking_status: u.smoking_status,
            alcohol_consumption: u.alcohol_consumption,
            city: u.city,
            state: u.state,
            country: u.country,
            goals: u.goals.unwrap_or_default(),
            daily_step_target: u.daily_step_target,
            daily_water_target_ml: u.daily_water_target_ml,
            daily_calorie_target: u.daily_calorie_target,
            onboarding_completed: u.onboarding_completed,
            profile_completion: u.profile_completion,
            created_at: u.created_at,
        }
    }
}

/// Minimal user info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserSummary {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            onboarding_completed: u.onboarding_completed,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[allow(dead_code)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 254, message = "Email too long"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 150, message = "Age must be 1-150"))]
    pub age: Option<i32>,

    pub gender: Option<Gender>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password required"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Partial profile update. Shared by PUT /api/profile and the onboarding
/// submission; email and password change through dedicated flows, never here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 150, message = "Age must be 1-150"))]
    pub age: Option<i32>,

    pub gender: Option<Gender>,

    #[validate(length(max = 20, message = "Phone number too long"))]
    pub phone: Option<String>,

    #[validate(range(min = 50.0, max = 300.0, message = "Height must be 50-300 cm"))]
    pub height_cm: Option<f64>,

    #[validate(range(min = 10.0, max = 500.0, message = "Weight must be 10-500 kg"))]
    pub weight_kg: Option<f64>,

    #[validate(length(max = 10, message = "Blood group too long"))]
    pub blood_group: Option<String>,

    pub activity_level: Option<ActivityLevel>,
    pub diet_habit: Option<DietHabit>,
    pub screen_time: Option<ScreenTimeLevel>,
    pub occupation: Option<OccupationType>,

    #[validate(length(max = 50))]
    pub smoking_status: Option<String>,

    #[validate(length(max = 50))]
    pub alcohol_consumption: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[validate(range(min = 0, max = 100000, message = "Step target must be 0-100000"))]
    pub daily_step_target: Option<i32>,

    #[validate(range(min = 0, max = 20000, message = "Water target must be 0-20000 ml"))]
    pub daily_water_target_ml: Option<i32>,

    #[validate(range(min = 0, max = 20000, message = "Calorie target must be 0-20000"))]
    pub daily_calorie_target: Option<i32>,

    #[validate(length(max = 20, message = "At most 20 goals"))]
    pub goals: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGoalsRequest {
    #[validate(length(max = 20, message = "At most 20 goals"))]
    pub goals: Vec<String>,
}
