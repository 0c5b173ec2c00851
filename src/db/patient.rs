use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::patient::{RPatientCreate, RPatientUpdate};
use entity::patient::{ActiveModel as PatientActive, Column, Entity as Patient, Model as PatientModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    pub async fn create_patient(&self, clinic_id: Uuid, payload: RPatientCreate) -> Result<PatientModel, AppError> {
        payload.validate()?;
        let patient = PatientActive {
            name: Set(payload.name),
            email: Set(payload.email),
            phone_number: Set(payload.phone_number),
            sex: Set(payload.sex),
            clinic_id: Set(clinic_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        info!("Created patient {} in clinic {}", patient.id, clinic_id);
        Ok(patient)
    }

    pub async fn get_patient(&self, id: Uuid) -> Result<PatientModel, AppError> {
        Ok(Patient::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Patient not found".into()))?)
    }

    pub async fn list_patients_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<PatientModel>, AppError> {
        Ok(Patient::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn update_patient(&self, id: Uuid, patch: RPatientUpdate) -> Result<PatientModel, AppError> {
        patch.validate()?;
        let mut am: PatientActive = self.get_patient(id).await?.into();

        if let Some(name) = patch.name { am.name = Set(name); }
        if let Some(email) = patch.email { am.email = Set(email); }
        if let Some(phone) = patch.phone_number { am.phone_number = Set(phone); }
        if let Some(sex) = patch.sex { am.sex = Set(sex); }

        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_patient(&self, id: Uuid) -> Result<(), AppError> {
        let res = Patient::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
