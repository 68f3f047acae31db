use super::*;

/// Tests finding a user by username when the user exists.
///
/// Verifies that the repository returns the full row for the login key.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("The Boss")
        .username("boss")
        .authorities("ROLE_ADMIN,ROLE_USER")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("boss").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.name, "The Boss");
    assert_eq!(user.username, "boss");
    assert_eq!(user.authorities, "ROLE_ADMIN,ROLE_USER");

    Ok(())
}

/// Tests finding a user by username when none matches.
///
/// Verifies that an unknown login key yields None, not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests the lookup distinguishes between usernames.
///
/// Verifies that the correct row is returned when several users exist.
///
/// Expected: Ok(Some(user)) with the requested username
#[tokio::test]
async fn finds_correct_user_among_multiple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_username("bob").await?.unwrap();

    assert_eq!(user.username, "bob");

    Ok(())
}
