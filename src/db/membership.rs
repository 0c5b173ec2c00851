use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use entity::clinic::{Entity as Clinic, Model as ClinicModel};
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use entity::users_to_clinics::{ActiveModel as MembershipActive, Entity as Membership};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, Set, SqlErr};
use tracing::debug;
use uuid::Uuid;

impl PostgresService {
    pub async fn create_user(&self) -> Result<Uuid, AppError> {
        let user = UserActive::new()
            .insert(&self.database_connection)
            .await?;
        debug!("Created user {}", user.id);
        Ok(user.id)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Fails with `Conflict` while the user still belongs to a clinic.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        match User::delete_by_id(id).exec(&self.database_connection).await {
            Ok(res) if res.rows_affected == 0 => Err(AppError::NotFound),
            Ok(_) => Ok(()),
            Err(err) => Err(still_referenced(err, "user still belongs to a clinic")),
        }
    }

    pub async fn add_user_to_clinic(&self, user_id: Uuid, clinic_id: Uuid) -> Result<(), AppError> {
        if self.is_user_in_clinic(user_id, clinic_id).await? {
            return Err(AppError::AlreadyExists);
        }
        MembershipActive {
            user_id: Set(user_id),
            clinic_id: Set(clinic_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn remove_user_from_clinic(&self, user_id: Uuid, clinic_id: Uuid) -> Result<(), AppError> {
        let res = Membership::delete_by_id((user_id, clinic_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn is_user_in_clinic(&self, user_id: Uuid, clinic_id: Uuid) -> Result<bool, AppError> {
        Ok(Membership::find_by_id((user_id, clinic_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn list_clinics_for_user(&self, user_id: Uuid) -> Result<Vec<ClinicModel>, AppError> {
        let user = self.get_user(user_id).await?;
        Ok(user.find_related(Clinic).all(&self.database_connection).await?)
    }

    pub async fn list_users_in_clinic(&self, clinic_id: Uuid) -> Result<Vec<UserModel>, AppError> {
        let clinic = self.get_clinic(clinic_id).await?;
        Ok(clinic.find_related(User).all(&self.database_connection).await?)
    }
}

/// FK violations on delete mean something still points at the row.
pub(crate) fn still_referenced(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => err.into(),
    }
}
