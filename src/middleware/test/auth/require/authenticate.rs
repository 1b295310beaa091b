use super::*;

/// Tests resolving a valid bearer token with no permission requirements.
///
/// Verifies that the guard returns the token's owner for plain
/// authentication.
///
/// Expected: Ok(User) matching the token owner
#[tokio::test]
async fn resolves_valid_token_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, token) = factory::helpers::create_customer_with_token(db).await?;
    let headers = bearer_headers(&token.token);

    let guard = AuthGuard::new(db, &headers);
    let caller = guard.require(&[]).await?;

    assert_eq!(caller.id, user.id);
    assert_eq!(caller.name, user.name);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_request_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();

    let guard = AuthGuard::new(db, &headers);
    let result = guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::MissingToken)) => {}
        other => panic!("Expected MissingToken error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a request whose Authorization header is not a bearer scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_non_bearer_authorization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let guard = AuthGuard::new(db, &headers);
    let result = guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::MissingToken)) => {}
        other => panic!("Expected MissingToken error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a bearer token that was never issued.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_customer_with_token(db).await?;
    let headers = bearer_headers("not-a-token");

    let guard = AuthGuard::new(db, &headers);
    let result = guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::InvalidToken)) => {}
        other => panic!("Expected InvalidToken error, got: {:?}", other),
    }

    Ok(())
}
