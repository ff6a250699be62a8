pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod done;
pub mod log;
pub mod logic;
