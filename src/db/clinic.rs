use crate::db::membership::still_referenced;
use crate::db::postgres_service::PostgresService;
use crate::types::{clinic::RClinicCreate, error::AppError};
use entity::clinic::{ActiveModel as ClinicActive, Entity as Clinic, Model as ClinicModel};
use entity::users_to_clinics::ActiveModel as MembershipActive;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    pub async fn create_clinic(&self, payload: RClinicCreate) -> Result<ClinicModel, AppError> {
        payload.validate()?;
        let clinic = ClinicActive {
            name: Set(payload.name),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        info!("Created clinic {}", clinic.id);
        Ok(clinic)
    }

    /// Creates the clinic and makes `user_id` a member of it in one transaction.
    pub async fn create_clinic_for_user(
        &self,
        user_id: Uuid,
        payload: RClinicCreate,
    ) -> Result<ClinicModel, AppError> {
        payload.validate()?;
        let txn = self.database_connection.begin().await?;

        let clinic = ClinicActive {
            name: Set(payload.name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        MembershipActive {
            user_id: Set(user_id),
            clinic_id: Set(clinic.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!("Created clinic {} for user {}", clinic.id, user_id);
        Ok(clinic)
    }

    pub async fn get_clinic(&self, id: Uuid) -> Result<ClinicModel, AppError> {
        Ok(Clinic::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Clinic not found".into()))?)
    }

    pub async fn count_clinics(&self) -> Result<u64, AppError> {
        Ok(Clinic::find().count(&self.database_connection).await?)
    }

    pub async fn rename_clinic(&self, id: Uuid, name: String) -> Result<ClinicModel, AppError> {
        RClinicCreate { name: name.clone() }.validate()?;
        let mut am: ClinicActive = self.get_clinic(id).await?.into();
        am.name = Set(name);
        Ok(am.update(&self.database_connection).await?)
    }

    /// Doctors, patients and appointments go with the clinic. Memberships
    /// don't cascade, so a clinic with members is a `Conflict`.
    pub async fn delete_clinic(&self, id: Uuid) -> Result<(), AppError> {
        match Clinic::delete_by_id(id).exec(&self.database_connection).await {
            Ok(res) if res.rows_affected == 0 => Err(AppError::NotFound),
            Ok(_) => {
                info!("Deleted clinic {}", id);
                Ok(())
            }
            Err(err) => Err(still_referenced(err, "clinic still has members")),
        }
    }
}
