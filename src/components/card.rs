// src/components/card.rs

// serde を使う宣言！カタログの JSON を読んだり、状態を JS に渡す時に使うよ！
use serde::{Deserialize, Serialize};

/// カタログ (data.json) の 1 エントリだよ。
///
/// `name` がペア判定のキーで、`image` は表面に表示する画像のパス。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub image: String,
}

/// 場に並ぶカード 1 枚を表す構造体だよ！🃏
///
/// - `name`: ペア判定のキー。同じ名前のカードがデッキにちょうど 2 枚ある。
/// - `image`: 表面の画像
/// - `is_face_up`: 表向きかどうか (true なら表)
/// - `is_matched`: ペアが揃って確定したかどうか。確定したカードはもう選べない！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub image: String,
    pub is_face_up: bool,
    pub is_matched: bool,
}

impl Card {
    /// カタログのエントリから裏向きのカードを作るよ。
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            image: entry.image.clone(),
            is_face_up: false,
            is_matched: false,
        }
    }

    /// 同じペアかどうか (名前で判定)
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.name == other.name
    }

    /// 表裏とマッチ状態を最初に戻す。
    pub fn reset(&mut self) {
        self.is_face_up = false;
        self.is_matched = false;
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry { name: name.to_string(), image: format!("img/{}.png", name) }
    }

    #[test]
    fn card_from_entry_starts_face_down() {
        let card = Card::from_entry(&entry("fox"));
        assert_eq!(card.name, "fox");
        assert_eq!(card.image, "img/fox.png");
        assert!(!card.is_face_up);
        assert!(!card.is_matched);
        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn pairs_with_compares_names_only() {
        let a = Card::from_entry(&entry("fox"));
        let mut b = Card::from_entry(&entry("fox"));
        b.is_face_up = true;
        let c = Card::from_entry(&entry("owl"));
        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
    }

    #[test]
    fn reset_clears_flags() {
        let mut card = Card::from_entry(&entry("fox"));
        card.is_face_up = true;
        card.is_matched = true;
        card.reset();
        assert_eq!(card, Card::from_entry(&entry("fox")));
    }

    #[test]
    fn catalog_entry_reads_json() {
        let parsed: CatalogEntry =
            serde_json::from_str(r#"{ "name": "fox", "image": "img/fox.png" }"#).unwrap();
        assert_eq!(parsed, entry("fox"));
    }
}
