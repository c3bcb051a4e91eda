use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// チェコの都市（座標付きの参照データ）
///
/// シード時に作成され、以降は変更されない。名前は一意。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// WMO天気解釈コード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WeatherCode {
    pub code: i32,
    pub description: String,
}
