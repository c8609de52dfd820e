pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod export;
pub mod list;
pub mod log;
pub mod logic;
pub mod stats;
pub mod status;
