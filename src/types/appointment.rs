use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RAppointmentCreate {
    pub date: DateTime<Utc>,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
}

/// An appointment with its doctor and patient loaded.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppointmentDetails {
    pub appointment: entity::appointment::Model,
    pub doctor: Option<entity::doctor::Model>,
    pub patient: Option<entity::patient::Model>,
}
