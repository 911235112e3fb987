pub mod air;
pub mod analytics;
pub mod assessment;
pub mod auth;
pub mod health;
pub mod nutrition;
pub mod profile;
pub mod tracking;
