use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;
use std::time::Duration;

pub mod cities;
pub mod models;
pub mod seed;

/// busy_timeout設定（ミリ秒）
/// SQLiteのロック競合時に待機する最大時間
const SQLITE_BUSY_TIMEOUT_MS: u64 = 5000;

/// データベース接続プールを作成し、マイグレーションを実行
pub async fn create_pool(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    // SqliteConnectOptionsを使用してbusy_timeoutを明示的に設定
    let connect_options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", db_path))?
        .busy_timeout(Duration::from_millis(SQLITE_BUSY_TIMEOUT_MS));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    // マイグレーション実行
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database ready at {}", db_path);

    Ok(pool)
}
