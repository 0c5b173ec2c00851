use std::sync::Arc;
use chrono::{Duration, Utc};
use clinic_agenda::{
    db::postgres_service::PostgresService,
    types::appointment::RAppointmentCreate,
};
use entity::{appointment, clinic, doctor, patient};

use super::test_data;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

/// A clinic with one doctor, one patient and one appointment between them.
#[allow(dead_code)]
pub struct Booking {
    pub clinic: clinic::Model,
    pub doctor: doctor::Model,
    pub patient: patient::Model,
    pub appointment: appointment::Model,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub async fn create_test_clinic(&self) -> clinic::Model {
        self.db.create_clinic(test_data::sample_clinic())
            .await
            .expect("Failed to create clinic")
    }

    pub async fn create_test_doctor(&self, clinic_id: uuid::Uuid) -> doctor::Model {
        self.db.create_doctor(clinic_id, test_data::sample_doctor())
            .await
            .expect("Failed to create doctor")
    }

    pub async fn create_test_patient(&self, clinic_id: uuid::Uuid) -> patient::Model {
        self.db.create_patient(clinic_id, test_data::sample_patient())
            .await
            .expect("Failed to create patient")
    }

    pub async fn create_test_booking(&self) -> Booking {
        let clinic = self.create_test_clinic().await;
        let doctor = self.create_test_doctor(clinic.id).await;
        let patient = self.create_test_patient(clinic.id).await;

        let appointment = self.db.create_appointment(clinic.id, RAppointmentCreate {
            date: Utc::now() + Duration::days(1),
            patient_id: patient.id,
            doctor_id: doctor.id,
        }).await.expect("Failed to create appointment");

        Booking { clinic, doctor, patient, appointment }
    }
}
