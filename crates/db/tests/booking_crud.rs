//! Repository-level tests for bookings and the stats queries.

use gcrental_db::models::booking::CreateBooking;
use gcrental_db::models::car::CreateCar;
use gcrental_db::repositories::{BookingRepo, CarRepo};
use gcrental_db::DbPool;

async fn seed_car(pool: &DbPool, plate: &str) -> i64 {
    CarRepo::create(
        pool,
        &CreateCar {
            make: "Nissan".to_string(),
            model: "Micra".to_string(),
            year: 2012,
            weekly_rate: 170.0,
            available: true,
            license_plate: plate.to_string(),
            image_url: None,
        },
    )
    .await
    .expect("car insert should succeed")
    .id
}

fn booking_for(car_id: i64) -> CreateBooking {
    CreateBooking {
        car_id,
        customer_name: "Dana Rivers".to_string(),
        customer_phone: "555-0101".to_string(),
        start_date: "2026-09-01".to_string(),
        end_date: "2026-09-15".to_string(),
        total_cost: 340.0,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_starts_pending(pool: DbPool) {
    let car_id = seed_car(&pool, "BKG-001").await;
    let booking = BookingRepo::create(&pool, &booking_for(car_id)).await.unwrap();
    assert_eq!(booking.status, "pending");
    assert_eq!(booking.total_cost, 340.0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_with_car_joins_make_model(pool: DbPool) {
    let car_id = seed_car(&pool, "BKG-002").await;
    BookingRepo::create(&pool, &booking_for(car_id)).await.unwrap();

    let listed = BookingRepo::list_with_car(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].car_make, "Nissan");
    assert_eq!(listed[0].car_model, "Micra");
    assert_eq!(listed[0].booking.car_id, car_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_filter_and_revenue(pool: DbPool) {
    let car_id = seed_car(&pool, "BKG-003").await;
    let a = BookingRepo::create(&pool, &booking_for(car_id)).await.unwrap();
    let b = BookingRepo::create(&pool, &booking_for(car_id)).await.unwrap();
    BookingRepo::create(&pool, &booking_for(car_id)).await.unwrap();

    BookingRepo::set_status(&pool, a.id, "active").await.unwrap();
    BookingRepo::set_status(&pool, b.id, "completed").await.unwrap();

    let rentals = BookingRepo::list_with_car_by_statuses(&pool, &["active", "completed"])
        .await
        .unwrap();
    assert_eq!(rentals.len(), 2);

    assert_eq!(BookingRepo::count_by_status(&pool, "active").await.unwrap(), 1);
    assert_eq!(BookingRepo::count_by_status(&pool, "pending").await.unwrap(), 1);

    let revenue = BookingRepo::total_revenue(&pool).await.unwrap();
    assert_eq!(revenue, 680.0, "revenue counts active + completed only");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_status_missing_id_is_none(pool: DbPool) {
    assert!(BookingRepo::set_status(&pool, 42, "confirmed")
        .await
        .unwrap()
        .is_none());
}
