// src/error.rs
//! カタログ読み込みのエラー型だよ。
//!
//! このゲームで「失敗」として扱うのはカタログ (カードの一覧データ) の読み込みだけ！
//! 状態に合わない入力や連打は全部ただの no-op なので、ここには出てこないよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

/// カードカタログの読み込み・検証で起きうるエラー。
#[derive(Debug, Error)]
pub enum CatalogError {
    /// fetch 自体が失敗した (オフライン、CORS など)
    #[error("failed to fetch card catalog: {0}")]
    Fetch(String),

    /// サーバーは応答したけど 2xx じゃなかった
    #[error("card catalog request returned HTTP {0}")]
    HttpStatus(u16),

    /// JSON として読めなかった
    #[error("card catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// 中身が空っぽ。ペアが一組も作れない！
    #[error("card catalog is empty")]
    Empty,

    /// 同じ名前が二回出てきた。デッキで 4 枚になっちゃうので NG。
    #[error("card catalog contains duplicate name {0:?}")]
    DuplicateName(String),
}

// wasm の境界では JS の Error オブジェクトとして返す。
impl From<CatalogError> for JsValue {
    fn from(err: CatalogError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
