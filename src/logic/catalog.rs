// src/logic/catalog.rs
//! カードカタログ (data.json) を読んで検証するよ。
//!
//! JSON はこんな形:
//! ```json
//! [ { "name": "fox", "image": "img/fox.png" }, ... ]
//! ```

use std::collections::HashSet;

use log::info;

use crate::components::card::CatalogEntry;
use crate::error::CatalogError;

/// JSON 文字列をカタログとして読み込む。読めたら `validate_catalog` も通す。
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    validate_catalog(&entries)?;
    info!("Catalog: loaded {} entries", entries.len());
    Ok(entries)
}

/// カタログが遊べる形になってるかチェック。
///
/// - 空はダメ (ペアが作れない)
/// - 名前の重複もダメ (デッキで 4 枚になってペアの前提が崩れる)
pub fn validate_catalog(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(CatalogError::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}
