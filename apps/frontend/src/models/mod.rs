pub mod calculator;
pub mod resume;
