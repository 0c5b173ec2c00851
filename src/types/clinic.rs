use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RClinicCreate {
    pub name: String,
}

impl RClinicCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name, "clinic")
    }
}

pub(crate) fn require_name(name: &str, what: &str) -> Result<(), AppError> {
    require_text(name, &format!("{} name", what))
}

pub(crate) fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
