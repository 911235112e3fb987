pub mod daily_record;
pub mod food;
pub mod user;
