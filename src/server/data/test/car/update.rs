use super::*;

/// Tests replacing every field of an existing car.
///
/// Verifies that name, color, and power are overwritten while the id is
/// preserved.
///
/// Expected: Ok with new field values, same id
#[tokio::test]
async fn replaces_fields_and_preserves_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::car::CarFactory::new(db)
        .name("Fiat")
        .color("Red")
        .power(135)
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let updated = repo
        .update(UpdateCarParams {
            id: existing.id,
            name: "Fiat Panda".to_string(),
            color: "Green".to_string(),
            power: 110,
        })
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Fiat Panda");
    assert_eq!(updated.color, "Green");
    assert_eq!(updated.power, 110);

    let persisted = repo.find_by_id(existing.id).await?.unwrap();
    assert_eq!(persisted, updated);

    Ok(())
}

/// Tests updating an id with no matching row.
///
/// Verifies that the repository fails with RecordNotFound instead of
/// inserting a new row.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_row_is_record_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo
        .update(UpdateCarParams {
            id: 424242,
            name: "Ghost".to_string(),
            color: "Black".to_string(),
            power: 1,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let (cars, total) = repo
        .list_paginated(
            0,
            5,
            CarSort {
                field: CarSortField::Id,
                direction: SortDirection::Asc,
            },
        )
        .await?;
    assert!(cars.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that updating one row leaves the others untouched.
///
/// Verifies the update is scoped to the target id.
///
/// Expected: Ok with only the target row changed
#[tokio::test]
async fn leaves_other_rows_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cars = factory::helpers::seed_showroom(db).await?;
    let target = &cars[0];
    let bystander = &cars[2];

    let repo = CarRepository::new(db);
    repo.update(UpdateCarParams {
        id: target.id,
        name: "Golf".to_string(),
        color: "Black".to_string(),
        power: 150,
    })
    .await?;

    let untouched = repo.find_by_id(bystander.id).await?.unwrap();
    assert_eq!(untouched.name, "Renault");
    assert_eq!(untouched.color, "Blue");
    assert_eq!(untouched.power, 200);

    Ok(())
}
