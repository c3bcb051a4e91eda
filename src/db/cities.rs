// =============================================================================
// 都市ディレクトリ
// =============================================================================
// citiesテーブルに対する読み取り専用クエリ
// =============================================================================

use sqlx::SqlitePool;

use super::models::City;

/// 全都市を名前順で取得する
///
/// 並び順はSQLiteのBINARY照合（コードポイント順）。同じデータに対して
/// 常に同じ順序を返す。
pub async fn list_cities(pool: &SqlitePool) -> Result<Vec<City>, sqlx::Error> {
    sqlx::query_as::<_, City>("SELECT id, name, latitude, longitude FROM cities ORDER BY name")
        .fetch_all(pool)
        .await
}

/// 名前で都市を検索する
///
/// 完全一致・大文字小文字区別あり。ダイアクリティカルマーク付きの名前
/// （"Plzeň"等）は元のUnicode文字列のまま比較される。
pub async fn find_city_by_name(pool: &SqlitePool, name: &str) -> Result<Option<City>, sqlx::Error> {
    sqlx::query_as::<_, City>("SELECT id, name, latitude, longitude FROM cities WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await
}
