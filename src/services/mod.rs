pub mod advice;
pub mod analytics;
pub mod aqi;
pub mod insights;
pub mod nutrition;
pub mod profile;
pub mod risk;
