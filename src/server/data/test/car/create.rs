use super::*;

/// Tests creating a car assigns a database-generated id.
///
/// Verifies that the repository inserts the row and returns it with a
/// positive, server-assigned identifier.
///
/// Expected: Ok with id > 0
#[tokio::test]
async fn assigns_database_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let car = repo
        .create(CreateCarParams {
            name: "Volkswagen".to_string(),
            color: "White".to_string(),
            power: 220,
        })
        .await?;

    assert!(car.id > 0);
    assert_eq!(car.name, "Volkswagen");
    assert_eq!(car.color, "White");
    assert_eq!(car.power, 220);

    Ok(())
}

/// Tests creating multiple cars yields strictly distinct ids.
///
/// Verifies that successive inserts never reuse an identifier.
///
/// Expected: Ok with three distinct ids
#[tokio::test]
async fn successive_creates_get_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);

    let mut ids = Vec::new();
    for i in 0..3 {
        let car = repo
            .create(CreateCarParams {
                name: format!("Car {}", i),
                color: "Gray".to_string(),
                power: 100 + i,
            })
            .await?;
        ids.push(car.id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    Ok(())
}

/// Tests the created row is persisted and readable.
///
/// Verifies that a create followed by a lookup returns identical data.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn created_row_is_readable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let created = repo
        .create(CreateCarParams {
            name: "Fiat".to_string(),
            color: "Red".to_string(),
            power: 135,
        })
        .await?;

    let fetched = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(fetched, created);

    Ok(())
}
