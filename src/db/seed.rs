// =============================================================================
// 参照データシード
// =============================================================================
// 都市とWMO天気コードの定数テーブルをデータベースに投入する
// =============================================================================

use sqlx::SqlitePool;

/// シード対象の都市（名前, 緯度, 経度）
pub const CITIES: &[(&str, f64, f64)] = &[
    ("Praha", 50.0755, 14.4378),
    ("Brno", 49.1951, 16.6068),
    ("Ostrava", 49.8209, 18.2625),
    ("Plzeň", 49.7384, 13.3736),
    ("Liberec", 50.7671, 15.0562),
    ("Olomouc", 49.5938, 17.2509),
    ("České Budějovice", 48.9745, 14.4745),
    ("Hradec Králové", 50.2104, 15.8252),
    ("Pardubice", 50.0343, 15.7812),
    ("Zlín", 49.2331, 17.6679),
];

/// シード対象のWMO天気コード（コード, 説明）
pub const WEATHER_CODES: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// 参照データを投入する
///
/// 既存データを削除してから定数テーブルの内容を挿入する。全体を
/// 1トランザクションで実行するため、途中で失敗した場合は元の状態が残る。
/// 再実行しても結果は変わらない。
pub async fn seed_reference_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cities").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM weather_codes").execute(&mut *tx).await?;

    for &(name, latitude, longitude) in CITIES {
        sqlx::query("INSERT INTO cities (name, latitude, longitude) VALUES (?, ?, ?)")
            .bind(name)
            .bind(latitude)
            .bind(longitude)
            .execute(&mut *tx)
            .await?;
    }

    for &(code, description) in WEATHER_CODES {
        sqlx::query("INSERT INTO weather_codes (code, description) VALUES (?, ?)")
            .bind(code)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    log::info!(
        "Seeded {} cities and {} weather codes",
        CITIES.len(),
        WEATHER_CODES.len()
    );

    Ok(())
}
