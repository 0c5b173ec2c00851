use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use clinic_agenda::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use chrono::NaiveTime;
    use clinic_agenda::types::clinic::RClinicCreate;
    use clinic_agenda::types::doctor::RDoctorCreate;
    use clinic_agenda::types::patient::RPatientCreate;
    use entity::patient::PatientSex;

    pub fn sample_clinic() -> RClinicCreate {
        RClinicCreate {
            name: "Clinica Doutor Agenda".to_string(),
        }
    }

    pub fn sample_doctor() -> RDoctorCreate {
        RDoctorCreate {
            name: "Dr. Ana Souza".to_string(),
            avatar_image_url: None,
            speciality: "Cardiologia".to_string(),
            appointment_price_in_cents: 15_000,
            available_from_week_day: 1,
            available_to_week_day: 5,
            available_from_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            available_to_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }
    }

    pub fn sample_patient() -> RPatientCreate {
        sample_patient_with_email("paciente@example.com")
    }

    pub fn sample_patient_with_email(email: &str) -> RPatientCreate {
        RPatientCreate {
            name: "Joao Silva".to_string(),
            email: email.to_string(),
            phone_number: "+55 11 98888-7777".to_string(),
            sex: PatientSex::Male,
        }
    }
}
