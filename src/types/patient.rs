use entity::patient::PatientSex;
use serde::{Deserialize, Serialize};

use crate::types::{clinic::{require_name, require_text}, error::AppError};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RPatientCreate {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub sex: PatientSex,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RPatientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub sex: Option<PatientSex>,
}

impl RPatientCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name, "patient")?;
        require_text(&self.email, "email")?;
        require_text(&self.phone_number, "phone number")
    }
}

impl RPatientUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = self.name.as_deref() {
            require_name(name, "patient")?;
        }
        if let Some(email) = self.email.as_deref() {
            require_text(email, "email")?;
        }
        if let Some(phone) = self.phone_number.as_deref() {
            require_text(phone, "phone number")?;
        }
        Ok(())
    }
}
