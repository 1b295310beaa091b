use super::*;

/// Tests the admin-authored single notification.
///
/// Expected: Ok with an unread notification for the target user
#[tokio::test]
async fn creates_unread_notification_for_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let notification = service
        .create(CreateNotificationParams {
            user_id: alice.id,
            message: "Your pickup is delayed by an hour.".to_string(),
        })
        .await?;

    assert_eq!(notification.user_id, alice.id);
    assert_eq!(notification.message, "Your pickup is delayed by an hour.");
    assert!(!notification.is_read);

    Ok(())
}

/// Tests creation with a target user id that does not resolve.
///
/// The id arrives in the request body, so a missing target is a validation
/// failure rather than a 404.
///
/// Expected: Err(AppError::BadRequest) and no notification created
#[tokio::test]
async fn rejects_unknown_target_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NotificationService::new(db);
    let result = service
        .create(CreateNotificationParams {
            user_id: 9999,
            message: "Hello?".to_string(),
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("9999")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    let total = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests creation with an empty message.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let result = service
        .create(CreateNotificationParams {
            user_id: alice.id,
            message: "  ".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
