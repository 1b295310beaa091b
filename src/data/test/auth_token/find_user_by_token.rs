use super::*;

/// Tests resolving a valid token to its user.
///
/// Verifies that a token row written by the identity service resolves to the
/// user it was issued to.
///
/// Expected: Ok(Some(User)) with the token owner's id
#[tokio::test]
async fn resolves_token_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;
    let token = factory::auth_token::AuthTokenFactory::new(db, user.id)
        .token("secret-token")
        .build()
        .await?;

    let repo = AuthTokenRepository::new(db);
    let resolved = repo.find_user_by_token(&token.token).await?;

    assert!(resolved.is_some());
    assert_eq!(resolved.unwrap().id, user.id);

    Ok(())
}

/// Tests resolving a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_customer(db).await?;
    factory::auth_token::create_token(db, user.id).await?;

    let repo = AuthTokenRepository::new(db);
    let resolved = repo.find_user_by_token("not-a-token").await?;

    assert!(resolved.is_none());

    Ok(())
}
