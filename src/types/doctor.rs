use chrono::NaiveTime;
use entity::doctor::weekday_from_index;
use serde::{Deserialize, Serialize};

use crate::types::{clinic::{require_name, require_text}, error::AppError};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RDoctorCreate {
    pub name: String,
    pub avatar_image_url: Option<String>,
    pub speciality: String,
    pub appointment_price_in_cents: i32,
    pub available_from_week_day: i32,
    pub available_to_week_day: i32,
    pub available_from_time: NaiveTime,
    pub available_to_time: NaiveTime,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RDoctorUpdate {
    pub name: Option<String>,
    pub avatar_image_url: Option<Option<String>>,
    pub speciality: Option<String>,
    pub appointment_price_in_cents: Option<i32>,
    pub available_from_week_day: Option<i32>,
    pub available_to_week_day: Option<i32>,
    pub available_from_time: Option<NaiveTime>,
    pub available_to_time: Option<NaiveTime>,
}

impl RDoctorCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        require_name(&self.name, "doctor")?;
        require_text(&self.speciality, "speciality")?;
        validate_price(self.appointment_price_in_cents)?;
        validate_weekday(self.available_from_week_day)?;
        validate_weekday(self.available_to_week_day)?;
        validate_window(self.available_from_time, self.available_to_time)
    }
}

impl RDoctorUpdate {
    /// Checks the fields present in the patch. The availability window spans
    /// two columns, so it is checked against the merged row by the caller.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = self.name.as_deref() {
            require_name(name, "doctor")?;
        }
        if let Some(speciality) = self.speciality.as_deref() {
            require_text(speciality, "speciality")?;
        }
        if let Some(cents) = self.appointment_price_in_cents {
            validate_price(cents)?;
        }
        if let Some(day) = self.available_from_week_day {
            validate_weekday(day)?;
        }
        if let Some(day) = self.available_to_week_day {
            validate_weekday(day)?;
        }
        Ok(())
    }
}

pub(crate) fn validate_price(cents: i32) -> Result<(), AppError> {
    if cents < 0 {
        return Err(AppError::Validation("appointment price can't be negative".to_string()));
    }
    Ok(())
}

pub(crate) fn validate_weekday(day: i32) -> Result<(), AppError> {
    weekday_from_index(day)
        .map(|_| ())
        .ok_or_else(|| AppError::Validation(format!("week day {} is outside 0..=6", day)))
}

pub(crate) fn validate_window(from: NaiveTime, to: NaiveTime) -> Result<(), AppError> {
    if from >= to {
        return Err(AppError::Validation(
            "available_from_time must be earlier than available_to_time".to_string(),
        ));
    }
    Ok(())
}
