mod common;

use clinic_agenda::types::{clinic::RClinicCreate, error::AppError};
use common::{client::TestClient, test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_create_clinic_for_user_adds_membership() {
    let ctx = TestContext::new().await;

    let user_id = ctx.db.create_user().await.unwrap();
    let clinic = ctx.db.create_clinic_for_user(user_id, test_data::sample_clinic()).await.unwrap();

    assert!(ctx.db.is_user_in_clinic(user_id, clinic.id).await.unwrap());

    let clinics = ctx.db.list_clinics_for_user(user_id).await.unwrap();
    assert_eq!(clinics.len(), 1);
    assert_eq!(clinics[0].id, clinic.id);

    let users = ctx.db.list_users_in_clinic(clinic.id).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, user_id);
}

#[tokio::test]
async fn test_create_clinic_for_unknown_user_rolls_back() {
    let ctx = TestContext::new().await;

    let before = ctx.db.count_clinics().await.unwrap();
    let result = ctx.db.create_clinic_for_user(Uuid::new_v4(), test_data::sample_clinic()).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))), "got {:?}", result);
    assert_eq!(ctx.db.count_clinics().await.unwrap(), before);
}

#[tokio::test]
async fn test_user_can_belong_to_many_clinics() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let user_id = ctx.db.create_user().await.unwrap();
    let first = client.create_test_clinic().await;
    let second = client.create_test_clinic().await;

    ctx.db.add_user_to_clinic(user_id, first.id).await.unwrap();
    ctx.db.add_user_to_clinic(user_id, second.id).await.unwrap();

    let mut ids: Vec<Uuid> = ctx.db.list_clinics_for_user(user_id).await.unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();
    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_duplicate_membership_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());

    let user_id = ctx.db.create_user().await.unwrap();
    let clinic = client.create_test_clinic().await;

    ctx.db.add_user_to_clinic(user_id, clinic.id).await.unwrap();
    let again = ctx.db.add_user_to_clinic(user_id, clinic.id).await;
    assert!(matches!(again, Err(AppError::AlreadyExists)));
}

#[tokio::test]
async fn test_membership_does_not_cascade() {
    let ctx = TestContext::new().await;

    let user_id = ctx.db.create_user().await.unwrap();
    let clinic = ctx.db.create_clinic_for_user(user_id, RClinicCreate {
        name: "Clinica Norte".to_string(),
    }).await.unwrap();

    assert!(matches!(ctx.db.delete_user(user_id).await, Err(AppError::Conflict(_))));
    assert!(matches!(ctx.db.delete_clinic(clinic.id).await, Err(AppError::Conflict(_))));

    ctx.db.remove_user_from_clinic(user_id, clinic.id).await.unwrap();
    assert!(!ctx.db.is_user_in_clinic(user_id, clinic.id).await.unwrap());

    ctx.db.delete_clinic(clinic.id).await.unwrap();
    ctx.db.delete_user(user_id).await.unwrap();
    assert!(matches!(ctx.db.get_user(user_id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_removing_missing_membership_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx.db.remove_user_from_clinic(Uuid::new_v4(), Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
