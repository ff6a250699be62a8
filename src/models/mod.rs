pub mod completion;
pub mod frequency;
pub mod habit;
pub mod streak;
