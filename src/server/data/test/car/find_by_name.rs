use super::*;

/// Tests the name lookup matches an exact name.
///
/// Verifies that searching for a complete stored name returns that car.
///
/// Expected: Ok with one matching car
#[tokio::test]
async fn matches_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_name("Fiat").await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Fiat");

    Ok(())
}

/// Tests the name lookup matches substrings.
///
/// Verifies that a fragment of a stored name is enough to match.
///
/// Expected: Ok with the car whose name contains the fragment
#[tokio::test]
async fn matches_name_fragment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_name("wagen").await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Volkswagen");

    Ok(())
}

/// Tests the name lookup with no match.
///
/// Verifies that an unmatched fragment yields an empty list, not an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unmatched_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_name("Lada").await?;

    assert!(cars.is_empty());

    Ok(())
}

/// Tests the name lookup can return several cars.
///
/// Verifies that every car whose name contains the fragment is returned,
/// ordered by id.
///
/// Expected: Ok with all matching cars in id order
#[tokio::test]
async fn returns_all_matches_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::car::CarFactory::new(db)
        .name("Golf GTI")
        .build()
        .await?;
    let second = factory::car::CarFactory::new(db)
        .name("Golf R")
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .name("Polo")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_name("Golf").await?;

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].id, first.id);
    assert_eq!(cars[1].id, second.id);

    Ok(())
}
