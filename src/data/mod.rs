pub mod input;
pub mod pollutant;
pub mod preprocessing;
