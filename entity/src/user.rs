use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users_to_clinics::Entity")]
    UsersToClinics,
}

impl Related<super::users_to_clinics::Entity> for Entity {
    fn to() -> RelationDef { Relation::UsersToClinics.def() }
}

// User <-> Clinic goes through users_to_clinics
impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_to_clinics::Relation::Clinic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_to_clinics::Relation::User.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.id.is_not_set() {
            self.id = Set(Uuid::new_v4());
        }
        Ok(self)
    }
}
