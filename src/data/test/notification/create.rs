use super::*;

/// Tests creating a single notification.
///
/// Verifies that the notification starts unread and carries the given
/// recipient and message.
///
/// Expected: Ok with is_read false and matching fields
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id,
            message: "Your laundry is ready.".to_string(),
        })
        .await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.message, "Your laundry is ready.");
    assert!(!notification.is_read);

    Ok(())
}
