use super::*;

/// Tests deleting an existing car.
///
/// Verifies that exactly one row is removed and a subsequent lookup misses.
///
/// Expected: Ok(1), then Ok(None) on lookup
#[tokio::test]
async fn removes_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::car::create_car(db).await?;

    let repo = CarRepository::new(db);
    let deleted = repo.delete(car.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(car.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id with no matching row.
///
/// Verifies that the repository reports zero rows affected rather than an
/// error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_id_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let deleted = repo.delete(424242).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests that deleting one row leaves the others intact.
///
/// Verifies the delete is scoped to the target id.
///
/// Expected: Ok with two remaining rows
#[tokio::test]
async fn leaves_other_rows_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cars = factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    repo.delete(cars[1].id).await?;

    let (remaining, total) = repo
        .list_paginated(
            0,
            5,
            CarSort {
                field: CarSortField::Id,
                direction: SortDirection::Asc,
            },
        )
        .await?;

    assert_eq!(total, 2);
    let names: Vec<&str> = remaining.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Volkswagen", "Renault"]);

    Ok(())
}
