// =============================================================================
// 共通設定モジュール
// =============================================================================
// 起動時に環境変数から一度だけ読み込む設定値を定義
// =============================================================================

use std::time::Duration;

/// Open-Meteo APIのデフォルトベースURL
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1";

/// 天気APIリクエストのデフォルトタイムアウト（秒）
pub const DEFAULT_WEATHER_API_TIMEOUT_SECS: u64 = 10;

/// SQLiteデータベースファイルのデフォルトパス
pub const DEFAULT_DATABASE_PATH: &str = "weather.db";

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8000;

/// アプリケーション設定
///
/// 起動時に一度だけ読み込み、以降は読み取り専用。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 天気APIのベースURL
    pub weather_api_url: String,
    /// 天気APIのタイムアウト（秒）
    pub weather_api_timeout_secs: u64,
    /// SQLiteデータベースファイルのパス
    pub database_path: String,
    /// バインドアドレス
    pub bind_addr: String,
    /// ポート番号
    pub port: u16,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定またはパース不能な値はデフォルトにフォールバックする。
    pub fn from_env() -> Self {
        Self {
            weather_api_url: env_or("WEATHER_API_URL", DEFAULT_WEATHER_API_URL),
            weather_api_timeout_secs: std::env::var("WEATHER_API_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WEATHER_API_TIMEOUT_SECS),
            database_path: env_or("DATABASE_PATH", DEFAULT_DATABASE_PATH),
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// 天気APIのタイムアウトをDurationとして取得
    pub fn weather_api_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_api_timeout_secs)
    }

    /// リッスンアドレス（host:port形式）
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// 環境変数を読み、未設定ならデフォルト値を返す
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
