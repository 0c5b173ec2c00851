pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod membership;
pub mod patient;
pub mod postgres_service;
