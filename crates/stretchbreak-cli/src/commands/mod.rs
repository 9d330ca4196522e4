pub mod config;
pub mod exercise;
pub mod hours;
pub mod run;
