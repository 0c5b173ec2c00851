pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod error;
pub mod patient;
