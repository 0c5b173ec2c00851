use chrono::Weekday;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub avatar_image_url: Option<String>,
    pub speciality: String,
    pub appointment_price_in_cents: i32,
    pub available_from_week_day: i32,   // 0 = Sunday .. 6 = Saturday
    pub available_to_week_day: i32,
    pub available_from_time: Time,
    pub available_to_time: Time,
    pub clinic_id: Uuid,                 // FK -> clinics.id
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to   = "super::clinic::Column::Id",
        on_delete = "Cascade"
    )]
    Clinic,

    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointments,
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef { Relation::Clinic.def() }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl Model {
    pub fn available_from(&self) -> Option<Weekday> {
        weekday_from_index(self.available_from_week_day)
    }

    pub fn available_to(&self) -> Option<Weekday> {
        weekday_from_index(self.available_to_week_day)
    }
}

/// Maps the stored weekday index (0 = Sunday) onto [`Weekday`].
pub fn weekday_from_index(day: i32) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

impl_timestamped_behavior!();
