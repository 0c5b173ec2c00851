use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clinics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doctor::Entity")]
    Doctors,
    #[sea_orm(has_many = "super::patient::Entity")]
    Patients,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointments,
    #[sea_orm(has_many = "super::users_to_clinics::Entity")]
    UsersToClinics,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Doctors.def() }
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef { Relation::Patients.def() }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl Related<super::users_to_clinics::Entity> for Entity {
    fn to() -> RelationDef { Relation::UsersToClinics.def() }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_to_clinics::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_to_clinics::Relation::Clinic.def().rev())
    }
}

impl_timestamped_behavior!();
