use super::*;

/// Tests deleting an existing order.
///
/// Expected: Ok(true) and the order no longer resolves
#[tokio::test]
async fn deletes_existing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, entity) = factory::helpers::create_order_with_owner(db).await?;

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(entity.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(entity.id).await?.is_none());

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
