pub mod calendar;
pub mod engineer;
pub mod pricing;
