use super::*;

/// Tests a send-to-all broadcast.
///
/// Verifies that every customer receives exactly one notification and that
/// admin users receive none.
///
/// Expected: Ok(2) with one notification per customer, none for the admin
#[tokio::test]
async fn send_to_all_reaches_every_customer_and_no_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;
    let bob = factory::user::create_customer(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = NotificationService::new(db);
    let created = service
        .broadcast(BroadcastNotificationParams {
            message: Some("We close early on Friday.".to_string()),
            send_to_all: true,
            user_ids: None,
        })
        .await?;

    assert_eq!(created, 2);
    assert_eq!(service.list_for_user(alice.id).await?.len(), 1);
    assert_eq!(service.list_for_user(bob.id).await?.len(), 1);
    assert!(service.list_for_user(admin.id).await?.is_empty());

    Ok(())
}

/// Tests a broadcast targeted at an explicit id list.
///
/// Verifies that only customers among the given ids receive the message;
/// admin ids and unknown ids are dropped.
///
/// Expected: Ok(1) with a notification only for the targeted customer
#[tokio::test]
async fn user_ids_target_customers_among_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;
    let bob = factory::user::create_customer(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = NotificationService::new(db);
    let created = service
        .broadcast(BroadcastNotificationParams {
            message: Some("Your usual slot is free again.".to_string()),
            send_to_all: false,
            user_ids: Some(vec![alice.id, admin.id, 9999]),
        })
        .await?;

    assert_eq!(created, 1);
    assert_eq!(service.list_for_user(alice.id).await?.len(), 1);
    assert!(service.list_for_user(bob.id).await?.is_empty());
    assert!(service.list_for_user(admin.id).await?.is_empty());

    Ok(())
}

/// Tests that send_to_all wins when both targeting modes are supplied.
///
/// Expected: Ok(2) reaching every customer despite the narrower id list
#[tokio::test]
async fn send_to_all_wins_over_user_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_customer(db).await?;
    factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let created = service
        .broadcast(BroadcastNotificationParams {
            message: Some("Machines 3 and 4 are back online.".to_string()),
            send_to_all: true,
            user_ids: Some(vec![alice.id]),
        })
        .await?;

    assert_eq!(created, 2);

    Ok(())
}

/// Tests a broadcast with no message.
///
/// Expected: Err(AppError::BadRequest) and zero notifications created
#[tokio::test]
async fn rejects_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let result = service
        .broadcast(BroadcastNotificationParams {
            message: None,
            send_to_all: true,
            user_ids: None,
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("Message")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    let total = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a broadcast with neither targeting mode supplied.
///
/// Expected: Err(AppError::BadRequest) and zero notifications created
#[tokio::test]
async fn rejects_missing_targeting_mode() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let result = service
        .broadcast(BroadcastNotificationParams {
            message: Some("Reminder".to_string()),
            send_to_all: false,
            user_ids: None,
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("send_to_all")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    let total = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a broadcast with an empty user_ids list.
///
/// An empty list does not count as a targeting mode.
///
/// Expected: Err(AppError::BadRequest) and zero notifications created
#[tokio::test]
async fn rejects_empty_user_ids_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_core_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_customer(db).await?;

    let service = NotificationService::new(db);
    let result = service
        .broadcast(BroadcastNotificationParams {
            message: Some("Reminder".to_string()),
            send_to_all: false,
            user_ids: Some(Vec::new()),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let total = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(total, 0);

    Ok(())
}
