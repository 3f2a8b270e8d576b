// src/app/init_handler.rs
//! GameApp の初期化に関するロジック。
//! カードカタログを fetch して、読めたら GameApp を組み立てるよ。

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Response};

use crate::app::game_app::GameApp;
use crate::components::CatalogEntry;
use crate::config::GameConfig;
use crate::error::CatalogError;
use crate::logic::catalog::parse_catalog;

/// カタログが読めなかった時にユーザーに出すメッセージ
pub(crate) const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load the game cards. Please check your connection and try again.";

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `url` からカタログ JSON を取ってきてパースする。
pub async fn fetch_catalog(url: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let window = window().ok_or_else(|| CatalogError::Fetch("no window available".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;
    if !response.ok() {
        return Err(CatalogError::HttpStatus(response.status()));
    }

    let text_promise = response.text().map_err(|e| CatalogError::Fetch(js_error_text(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| CatalogError::Fetch(js_error_text(&e)))?
        .as_string()
        .ok_or_else(|| CatalogError::Fetch("response body is not text".to_string()))?;

    parse_catalog(&text)
}

/// 読み込みのどこで失敗したか。ユーザーにアラートを出すのはカタログの失敗だけ。
pub(crate) enum LoadFailure {
    /// カタログが取れなかった・読めなかった
    Catalog(CatalogError),
    /// カタログは読めたけど、ページ側 (DOM) の準備に失敗した
    Setup(JsValue),
}

impl LoadFailure {
    /// アラートに出す文面。ページの不備はユーザーに見せても仕方ないので None。
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LoadFailure::Catalog(_) => Some(LOAD_FAILURE_MESSAGE),
            LoadFailure::Setup(_) => None,
        }
    }
}

impl From<LoadFailure> for JsValue {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::Catalog(e) => e.into(),
            LoadFailure::Setup(value) => value,
        }
    }
}

async fn build_game(config: GameConfig) -> Result<GameApp, LoadFailure> {
    let entries = fetch_catalog(&config.catalog_url).await.map_err(|e| {
        error!("Init: failed to load card catalog: {}", e);
        LoadFailure::Catalog(e)
    })?;
    GameApp::from_catalog(&entries, config).map_err(|e| {
        error!("Init: failed to set up the page: {:?}", e);
        LoadFailure::Setup(e)
    })
}

/// JS 側のエントリーポイント。設定 (JSON, 省略可) を読んで、カタログを取ってきて、GameApp を返す。
///
/// ```js
/// const app = await load_game(JSON.stringify({ catalog_url: "data/data.json" }));
/// ```
#[wasm_bindgen]
pub async fn load_game(config_json: Option<String>) -> Result<GameApp, JsValue> {
    let config = GameConfig::from_optional_json(config_json.as_deref());
    info!("Init: loading catalog from {}", config.catalog_url);

    build_game(config).await.map_err(|failure| {
        if let (Some(message), Some(window)) = (failure.user_message(), window()) {
            // アラートが出せなくてもエラーはそのまま返す
            let _ = window.alert_with_message(message);
        }
        failure.into()
    })
}
