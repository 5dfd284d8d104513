//! Demo fleet seeding for local development and scenario tests.

use crate::models::car::CreateCar;
use crate::DbPool;

/// The demo fleet: six cars with distinct plates.
fn demo_fleet() -> Vec<CreateCar> {
    let rows = [
        ("Mitsubishi", "Lancer", 2011, 180.0, "ABC-123"),
        ("Nissan", "Micra", 2012, 170.0, "DEF-456"),
        ("Mazda", "3", 2013, 165.0, "GHI-789"),
        ("Nissan", "Tiida", 2014, 175.0, "JKL-012"),
        ("Toyota", "Yaris", 2015, 185.0, "MNO-345"),
        ("Kia", "Rio", 2013, 160.0, "PQR-678"),
    ];
    rows.iter()
        .map(|(make, model, year, weekly_rate, plate)| CreateCar {
            make: (*make).to_string(),
            model: (*model).to_string(),
            year: *year,
            weekly_rate: *weekly_rate,
            available: true,
            license_plate: (*plate).to_string(),
            image_url: None,
        })
        .collect()
}

/// Insert the demo fleet, skipping any plate that already exists.
///
/// Idempotent: running it against an already-seeded database changes
/// nothing. Returns the number of rows inserted.
pub async fn seed_demo_fleet(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for car in demo_fleet() {
        let result = sqlx::query(
            "INSERT INTO cars (make, model, year, weekly_rate, available, license_plate, image_url)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT (license_plate) DO NOTHING",
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.weekly_rate)
        .bind(car.available)
        .bind(&car.license_plate)
        .bind(&car.image_url)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    tracing::info!(inserted, "Demo fleet seeded");
    Ok(inserted)
}
