pub mod bank_holidays;
pub mod config;
pub mod deadlines;
pub mod stateflow;
pub mod working_day;
