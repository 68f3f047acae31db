use super::*;

fn id_asc() -> CarSort {
    CarSort {
        field: CarSortField::Id,
        direction: SortDirection::Asc,
    }
}

/// Tests paginating three rows with a page size of two.
///
/// Verifies that the first page holds two cars in stored order, the second
/// page holds the remaining one, and the total counts all rows.
///
/// Expected: Ok with pages of 2 and 1
#[tokio::test]
async fn splits_rows_across_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);

    let (first_page, total) = repo.list_paginated(0, 2, id_asc()).await?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(total, 3);
    assert_eq!(first_page[0].name, "Volkswagen");
    assert_eq!(first_page[1].name, "Fiat");

    let (second_page, total) = repo.list_paginated(1, 2, id_asc()).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(total, 3);
    assert_eq!(second_page[0].name, "Renault");

    Ok(())
}

/// Tests listing an empty table.
///
/// Verifies that pagination over no rows returns an empty page and a zero
/// total.
///
/// Expected: Ok with empty page, total 0
#[tokio::test]
async fn empty_table_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let (cars, total) = repo.list_paginated(0, 5, id_asc()).await?;

    assert!(cars.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a page index past the end of the data.
///
/// Verifies that requesting a page beyond the last yields an empty page
/// while the total still counts all rows.
///
/// Expected: Ok with empty page, total 3
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let (cars, total) = repo.list_paginated(5, 2, id_asc()).await?;

    assert!(cars.is_empty());
    assert_eq!(total, 3);

    Ok(())
}

/// Tests sorting by power descending.
///
/// Verifies that the typed sort specification drives the row order.
///
/// Expected: Ok with cars ordered by descending power
#[tokio::test]
async fn sorts_by_power_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let sort = CarSort {
        field: CarSortField::Power,
        direction: SortDirection::Desc,
    };
    let (cars, _) = repo.list_paginated(0, 5, sort).await?;

    let powers: Vec<i32> = cars.iter().map(|c| c.power).collect();
    assert_eq!(powers, vec![220, 200, 135]);

    Ok(())
}

/// Tests sorting by name ascending.
///
/// Verifies alphabetical ordering on a text column.
///
/// Expected: Ok with cars ordered by name
#[tokio::test]
async fn sorts_by_name_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::seed_showroom(db).await?;

    let repo = CarRepository::new(db);
    let sort = CarSort {
        field: CarSortField::Name,
        direction: SortDirection::Asc,
    };
    let (cars, _) = repo.list_paginated(0, 5, sort).await?;

    let names: Vec<&str> = cars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Fiat", "Renault", "Volkswagen"]);

    Ok(())
}
