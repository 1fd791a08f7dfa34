pub mod dto;
pub mod workout_service;
