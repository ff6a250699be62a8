pub mod ranking;
pub mod streak;
