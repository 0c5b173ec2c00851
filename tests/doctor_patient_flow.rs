mod common;

use chrono::{NaiveTime, Weekday};
use clinic_agenda::types::{doctor::RDoctorUpdate, error::AppError, patient::RPatientUpdate};
use common::{client::TestClient, test_data, TestContext};
use entity::patient::PatientSex;
use uuid::Uuid;

#[tokio::test]
async fn test_doctor_creation_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;

    let doctor = client.create_test_doctor(clinic.id).await;
    let stored = ctx.db.get_doctor(doctor.id).await.unwrap();

    assert_eq!(stored.name, "Dr. Ana Souza");
    assert_eq!(stored.avatar_image_url, None);
    assert_eq!(stored.appointment_price_in_cents, 15_000);
    assert_eq!(stored.available_from(), Some(Weekday::Mon));
    assert_eq!(stored.available_to(), Some(Weekday::Fri));
    assert_eq!(stored.available_from_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(stored.available_to_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());

    let doctors = ctx.db.list_doctors_for_clinic(clinic.id).await.unwrap();
    assert_eq!(doctors.len(), 1);
}

#[tokio::test]
async fn test_doctor_for_unknown_clinic_is_rejected() {
    let ctx = TestContext::new().await;

    let result = ctx.db.create_doctor(Uuid::new_v4(), test_data::sample_doctor()).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_invalid_doctor_never_reaches_the_database() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;

    let mut doctor = test_data::sample_doctor();
    doctor.available_from_week_day = 9;

    let result = ctx.db.create_doctor(clinic.id, doctor).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(ctx.db.list_doctors_for_clinic(clinic.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_doctor_partial_update() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;
    let doctor = client.create_test_doctor(clinic.id).await;

    let updated = ctx.db.update_doctor(doctor.id, RDoctorUpdate {
        avatar_image_url: Some(Some("https://example.com/ana.png".to_string())),
        appointment_price_in_cents: Some(20_000),
        available_to_week_day: Some(6),
        ..Default::default()
    }).await.unwrap();

    assert_eq!(updated.name, doctor.name);
    assert_eq!(updated.avatar_image_url.as_deref(), Some("https://example.com/ana.png"));
    assert_eq!(updated.appointment_price_in_cents, 20_000);
    assert_eq!(updated.available_to(), Some(Weekday::Sat));
    assert!(updated.updated_at >= doctor.updated_at);

    // moving only the start past the stored end must fail
    let inverted = ctx.db.update_doctor(doctor.id, RDoctorUpdate {
        available_from_time: NaiveTime::from_hms_opt(19, 0, 0),
        ..Default::default()
    }).await;
    assert!(matches!(inverted, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_doctor_update_rejects_blank_speciality() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;
    let doctor = client.create_test_doctor(clinic.id).await;

    let result = ctx.db.update_doctor(doctor.id, RDoctorUpdate {
        speciality: Some("   ".to_string()),
        ..Default::default()
    }).await;
    assert!(matches!(result, Err(AppError::Validation(_))), "got {:?}", result);

    let stored = ctx.db.get_doctor(doctor.id).await.unwrap();
    assert_eq!(stored.speciality, doctor.speciality);
    assert_eq!(stored.updated_at, doctor.updated_at);
}

#[tokio::test]
async fn test_patient_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;

    let patient = client.create_test_patient(clinic.id).await;
    assert_eq!(patient.sex, PatientSex::Male);
    assert_eq!(patient.clinic_id, clinic.id);

    let updated = ctx.db.update_patient(patient.id, RPatientUpdate {
        phone_number: Some("+55 21 97777-6666".to_string()),
        sex: Some(PatientSex::Female),
        ..Default::default()
    }).await.unwrap();

    assert_eq!(updated.name, patient.name);
    assert_eq!(updated.phone_number, "+55 21 97777-6666");
    assert_eq!(updated.sex, PatientSex::Female);
    assert!(updated.updated_at >= patient.updated_at);

    let blank = ctx.db.update_patient(patient.id, RPatientUpdate {
        name: Some(" ".to_string()),
        ..Default::default()
    }).await;
    assert!(matches!(blank, Err(AppError::Validation(_))));

    ctx.db.delete_patient(patient.id).await.unwrap();
    assert!(matches!(ctx.db.delete_patient(patient.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_deleting_clinic_cascades_to_patients() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let clinic = client.create_test_clinic().await;
    let patient = client.create_test_patient(clinic.id).await;

    ctx.db.delete_clinic(clinic.id).await.unwrap();
    assert!(matches!(ctx.db.get_patient(patient.id).await, Err(AppError::NotFound)));
}
