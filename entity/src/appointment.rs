use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: DateTimeUtc,
    pub patient_id: Uuid,                // FK -> patients.id
    pub doctor_id: Uuid,                 // FK -> doctors.id
    pub clinic_id: Uuid,                 // FK -> clinics.id
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to   = "super::patient::Column::Id",
        on_delete = "Cascade"
    )]
    Patient,

    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to   = "super::doctor::Column::Id",
        on_delete = "Cascade"
    )]
    Doctor,

    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to   = "super::clinic::Column::Id",
        on_delete = "Cascade"
    )]
    Clinic,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef { Relation::Patient.def() }
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Doctor.def() }
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef { Relation::Clinic.def() }
}

impl_timestamped_behavior!();
