use crate::db::postgres_service::PostgresService;
use crate::types::appointment::{AppointmentDetails, RAppointmentCreate};
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::appointment::{ActiveModel as AppointmentActive, Column, Entity as Appointment, Model as AppointmentModel};
use entity::doctor::Entity as Doctor;
use entity::patient::Entity as Patient;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, LoaderTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, warn};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_appointment(
        &self,
        clinic_id: Uuid,
        payload: RAppointmentCreate,
    ) -> Result<AppointmentModel, AppError> {
        // Missing doctor/patient rows are left to the foreign keys; here we only
        // catch rows that exist but belong to another clinic.
        if let Some(doctor) = Doctor::find_by_id(payload.doctor_id).one(&self.database_connection).await? {
            if doctor.clinic_id != clinic_id {
                warn!("Doctor {} is not part of clinic {}", doctor.id, clinic_id);
                return Err(AppError::Validation("doctor belongs to another clinic".to_string()));
            }
        }
        if let Some(patient) = Patient::find_by_id(payload.patient_id).one(&self.database_connection).await? {
            if patient.clinic_id != clinic_id {
                warn!("Patient {} is not part of clinic {}", patient.id, clinic_id);
                return Err(AppError::Validation("patient belongs to another clinic".to_string()));
            }
        }

        let appointment = AppointmentActive {
            date: Set(payload.date),
            patient_id: Set(payload.patient_id),
            doctor_id: Set(payload.doctor_id),
            clinic_id: Set(clinic_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;
        info!("Booked appointment {} at {}", appointment.id, appointment.date);
        Ok(appointment)
    }

    pub async fn get_appointment(&self, id: Uuid) -> Result<AppointmentModel, AppError> {
        Ok(Appointment::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Appointment not found".into()))?)
    }

    /// All appointments of a clinic, oldest first, with doctor and patient loaded.
    pub async fn list_appointments_for_clinic(&self, clinic_id: Uuid) -> Result<Vec<AppointmentDetails>, AppError> {
        let appointments = Appointment::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .order_by_asc(Column::Date)
            .all(&self.database_connection)
            .await?;

        let doctors = appointments.load_one(Doctor, &self.database_connection).await?;
        let patients = appointments.load_one(Patient, &self.database_connection).await?;

        Ok(appointments
            .into_iter()
            .zip(doctors)
            .zip(patients)
            .map(|((appointment, doctor), patient)| AppointmentDetails { appointment, doctor, patient })
            .collect())
    }

    pub async fn list_appointments_for_doctor(&self, doctor_id: Uuid) -> Result<Vec<AppointmentModel>, AppError> {
        Ok(Appointment::find()
            .filter(Column::DoctorId.eq(doctor_id))
            .order_by_asc(Column::Date)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn reschedule_appointment(&self, id: Uuid, date: DateTime<Utc>) -> Result<AppointmentModel, AppError> {
        let mut am: AppointmentActive = self.get_appointment(id).await?.into();
        am.date = Set(date);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<(), AppError> {
        let res = Appointment::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
