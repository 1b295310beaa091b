use super::*;

/// Tests finding an existing user by id.
///
/// Verifies that the repository resolves a stored user row to the domain
/// model with the role string converted to the typed role.
///
/// Expected: Ok(Some(User)) with matching fields and role Customer
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .name("alice")
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(entity.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, entity.id);
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::Customer);
    assert!(!user.staff);

    Ok(())
}

/// Tests finding a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(9999).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that an unrecognized stored role string surfaces as an error.
///
/// Verifies that entity conversion rejects role values outside the known
/// vocabulary instead of silently defaulting.
///
/// Expected: Err(DbErr) mentioning the bad role
#[tokio::test]
async fn rejects_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .role("manager")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(entity.id).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("manager"));

    Ok(())
}
