use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "patient_sex")]
#[serde(rename_all = "lowercase")]
pub enum PatientSex {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,                   // not unique, two patients may share one
    #[sea_orm(column_name = "phone")]
    pub phone_number: String,
    pub sex: PatientSex,
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

impl_timestamped_behavior!();
