//! Application services (use case implementations).

mod generate_service;

pub use generate_service::{GenerateOptions, GenerateService, GenerationReport, WriteTally};
