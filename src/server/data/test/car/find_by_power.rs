use super::*;

/// Tests the power lookup returns the matching car.
///
/// Verifies that the filter is an exact match on the power column.
///
/// Expected: Ok with only the matching car
#[tokio::test]
async fn returns_matching_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_power(220).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Volkswagen");

    Ok(())
}

/// Tests the power lookup with no matching rows.
///
/// Verifies that an unmatched power value yields an empty list, not an
/// error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unmatched_power() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_power(999).await?;

    assert!(cars.is_empty());

    Ok(())
}
