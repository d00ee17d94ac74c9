/// Application layer - Use cases, DTOs and the report read model
///
/// This layer orchestrates the inspection services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
