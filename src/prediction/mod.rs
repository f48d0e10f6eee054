pub mod engine;
pub mod severity;
