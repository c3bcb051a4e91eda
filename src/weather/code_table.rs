// =============================================================================
// 天気コードテーブル
// =============================================================================
// WMO天気コード→説明の参照テーブル
// 起動時にweather_codesテーブルから一度だけ読み込み、以降は読み取り専用
// =============================================================================

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::db::models::WeatherCode;

/// 未登録コードに対するフォールバック説明
const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// WMO天気コードの参照テーブル
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: HashMap<i32, String>,
}

impl CodeTable {
    /// データベースから参照テーブルを読み込む
    pub async fn load(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let rows: Vec<WeatherCode> =
            sqlx::query_as("SELECT code, description FROM weather_codes")
                .fetch_all(pool)
                .await?;

        log::debug!("Loaded {} weather codes", rows.len());

        Ok(Self {
            codes: rows
                .into_iter()
                .map(|row| (row.code, row.description))
                .collect(),
        })
    }

    /// コードから説明を引く
    ///
    /// 未登録コードは"Unknown"を返す。エラーにはしない。
    pub fn describe(&self, code: i32) -> &str {
        self.codes
            .get(&code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }

    /// 登録済みコード数
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// テーブルが空かどうか
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (コード, 説明)ペアからテーブルを構築する（テスト用）
    #[cfg(test)]
    pub fn from_pairs(pairs: &[(i32, &str)]) -> Self {
        Self {
            codes: pairs
                .iter()
                .map(|&(code, description)| (code, description.to_string()))
                .collect(),
        }
    }
}
