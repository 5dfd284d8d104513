//! Repository-level CRUD tests for cars against a real SQLite database.

use gcrental_db::models::car::{CreateCar, UpdateCar};
use gcrental_db::repositories::CarRepo;
use gcrental_db::{seed, DbPool};

fn sample_car(plate: &str) -> CreateCar {
    CreateCar {
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2014,
        weekly_rate: 190.0,
        available: true,
        license_plate: plate.to_string(),
        image_url: Some("https://example.com/corolla.jpg".to_string()),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: DbPool) {
    let created = CarRepo::create(&pool, &sample_car("TST-001"))
        .await
        .expect("create should succeed");
    assert!(created.id > 0);
    assert!(created.available);
    assert_eq!(created.license_plate, "TST-001");

    let found = CarRepo::find_by_id(&pool, created.id)
        .await
        .expect("find should succeed")
        .expect("row should exist");
    assert_eq!(found.make, "Toyota");
    assert_eq!(found.weekly_rate, 190.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_plate_rejected(pool: DbPool) {
    CarRepo::create(&pool, &sample_car("DUP-001"))
        .await
        .expect("first insert should succeed");

    let err = CarRepo::create(&pool, &sample_car("DUP-001"))
        .await
        .expect_err("duplicate plate must fail");
    match err {
        sqlx::Error::Database(db_err) => {
            assert!(db_err.is_unique_violation(), "expected unique violation");
        }
        other => panic!("expected database error, got {other:?}"),
    }

    let count = CarRepo::count(&pool).await.expect("count should succeed");
    assert_eq!(count, 1, "failed insert must not add a row");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_availability_filter(pool: DbPool) {
    let kept = CarRepo::create(&pool, &sample_car("AVL-001")).await.unwrap();
    let parked = CarRepo::create(&pool, &sample_car("AVL-002")).await.unwrap();
    CarRepo::update(
        &pool,
        parked.id,
        &UpdateCar {
            available: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let available = CarRepo::list(&pool, Some(true)).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, kept.id);

    let unavailable = CarRepo::list(&pool, Some(false)).await.unwrap();
    assert_eq!(unavailable.len(), 1);
    assert_eq!(unavailable[0].id, parked.id);

    let all = CarRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_leaves_other_fields(pool: DbPool) {
    let created = CarRepo::create(&pool, &sample_car("UPD-001")).await.unwrap();

    let updated = CarRepo::update(
        &pool,
        created.id,
        &UpdateCar {
            weekly_rate: Some(200.0),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.weekly_rate, 200.0);
    assert_eq!(updated.make, created.make);
    assert_eq!(updated.model, created.model);
    assert_eq!(updated.year, created.year);
    assert_eq!(updated.available, created.available);
    assert_eq!(updated.license_plate, created.license_plate);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_id_is_none(pool: DbPool) {
    let result = CarRepo::update(
        &pool,
        9999,
        &UpdateCar {
            weekly_rate: Some(1.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete(pool: DbPool) {
    let created = CarRepo::create(&pool, &sample_car("DEL-001")).await.unwrap();
    assert!(CarRepo::delete(&pool, created.id).await.unwrap());
    assert!(!CarRepo::delete(&pool, created.id).await.unwrap());
    assert!(CarRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_idempotent(pool: DbPool) {
    let first = seed::seed_demo_fleet(&pool).await.unwrap();
    assert_eq!(first, 6);

    let second = seed::seed_demo_fleet(&pool).await.unwrap();
    assert_eq!(second, 0, "re-seeding must not duplicate the fleet");

    assert_eq!(CarRepo::count(&pool).await.unwrap(), 6);
}
