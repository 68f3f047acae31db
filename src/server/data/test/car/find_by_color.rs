use super::*;

/// Tests the color lookup returns exactly the matching car.
///
/// Verifies that the filter is an exact match on the color column.
///
/// Expected: Ok with only the red car
#[tokio::test]
async fn returns_exactly_the_matching_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_color("Red").await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].name, "Fiat");
    assert_eq!(cars[0].power, 135);

    Ok(())
}

/// Tests the color lookup with no matching rows.
///
/// Verifies that an unknown color yields an empty list, not an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_color("Purple").await?;

    assert!(cars.is_empty());

    Ok(())
}

/// Tests the color lookup returns every car sharing the color.
///
/// Verifies that multiple rows with the same color are all returned.
///
/// Expected: Ok with both white cars
#[tokio::test]
async fn returns_all_cars_with_shared_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::car::CarFactory::new(db)
        .name("Volkswagen")
        .color("White")
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .name("Skoda")
        .color("White")
        .build()
        .await?;
    factory::car::CarFactory::new(db)
        .name("Fiat")
        .color("Red")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let cars = repo.find_by_color("White").await?;

    assert_eq!(cars.len(), 2);

    Ok(())
}
