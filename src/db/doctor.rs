use crate::db::postgres_service::PostgresService;
use crate::types::doctor::{validate_window, RDoctorCreate, RDoctorUpdate};
use crate::types::error::AppError;
use entity::doctor::{ActiveModel as DoctorActive, Column, Entity as Doctor, Model as DoctorModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    pub async fn create_doctor(&self, clinic_id: Uuid, payload: RDoctorCreate) -> Result<DoctorModel, AppError> {
        payload.validate()?;
        let doctor = DoctorActive {
            name: Set(payload.name),
            avatar_image_url: Set(payload.avatar_image_url),
            speciality: Set(payload.speciality),
            appointment_price_in_cents: Set(payload.appointment_price_in_cents),
            available_from_week_day: Set(payload.available_from_week_day),
            available_to_week_day: Set(payload.available_to_week_day),
            available_from_time: Set(payload.available_from_time),
            available_to_time: Set(payload.available_to_time),
            clinic_id: Set(clinic_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        info!("Created doctor {} in clinic {}", doctor.id, clinic_id);
        Ok(doctor)
    }

    pub async fn get_doctor(&self, id: Uuid) -> Result<DoctorModel, AppError> {
        Ok(Doctor::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Doctor not found".into()))?)
    }

    pub async fn list_doctors_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<DoctorModel>, AppError> {
        Ok(Doctor::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn update_doctor(&self, id: Uuid, patch: RDoctorUpdate) -> Result<DoctorModel, AppError> {
        patch.validate()?;
        let current = self.get_doctor(id).await?;

        // validate against the merged row, a patch may move only one end of a range
        let from_time = patch.available_from_time.unwrap_or(current.available_from_time);
        let to_time = patch.available_to_time.unwrap_or(current.available_to_time);
        validate_window(from_time, to_time)?;

        let mut am: DoctorActive = current.into();
        if let Some(v) = patch.name { am.name = Set(v); }
        if let Some(v) = patch.avatar_image_url { am.avatar_image_url = Set(v); }
        if let Some(v) = patch.speciality { am.speciality = Set(v); }
        if let Some(v) = patch.appointment_price_in_cents { am.appointment_price_in_cents = Set(v); }
        if let Some(v) = patch.available_from_week_day { am.available_from_week_day = Set(v); }
        if let Some(v) = patch.available_to_week_day { am.available_to_week_day = Set(v); }
        am.available_from_time = Set(from_time);
        am.available_to_time = Set(to_time);

        Ok(am.update(&self.database_connection).await?)
    }

    /// Appointments with this doctor are removed by the FK cascade.
    pub async fn delete_doctor(&self, id: Uuid) -> Result<(), AppError> {
        let res = Doctor::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
