// src/logic/deck.rs

use crate::components::card::{Card, CatalogEntry};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

/// カタログからデッキを作る関数だよ！🃏
///
/// カタログの各エントリを 2 枚ずつ使うので、返り値の長さは `2 × catalog.len()`。
/// 並びは「カタログ全部 → もう一度カタログ全部」で、シャッフル前の
/// `[A, B]` なら `[A, B, A, B]` になる。全部裏向き！
pub fn create_deck(catalog: &[CatalogEntry]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(catalog.len() * 2);
    for _ in 0..2 {
        deck.extend(catalog.iter().map(Card::from_entry));
    }
    deck
}

/// 乱数生成器を指定してシャッフル。中身は Fisher–Yates (`SliceRandom::shuffle`)。
pub fn shuffle_deck_with<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// 全カードを裏向き・未マッチに戻す。並び順はそのまま。
pub fn reset_cards(deck: &mut [Card]) {
    deck.iter_mut().for_each(Card::reset);
}

/// どの名前もちょうど 2 回ずつ出てくるかチェック。
pub fn has_exact_pairs(deck: &[Card]) -> bool {
    deck.iter().map(|card| card.name.as_str()).counts().values().all(|&count| count == 2)
}

/// ペアの数 (= カタログの大きさ)
pub fn pair_count(deck: &[Card]) -> usize {
    deck.len() / 2
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn catalog(names: &[&str]) -> Vec<CatalogEntry> {
        names
            .iter()
            .map(|name| CatalogEntry { name: name.to_string(), image: format!("img/{}.png", name) })
            .collect()
    }

    fn names(deck: &[Card]) -> Vec<String> {
        deck.iter().map(|card| card.name.clone()).collect()
    }

    fn sorted_names(deck: &[Card]) -> Vec<String> {
        names(deck).into_iter().sorted().collect()
    }

    #[test]
    fn deck_creation() {
        for size in 1..=12 {
            let names: Vec<String> = (0..size).map(|i| format!("card{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let deck = create_deck(&catalog(&refs));

            // 1. 枚数は 2N
            assert_eq!(deck.len(), size * 2);
            // 2. どの名前もちょうど 2 枚
            assert!(has_exact_pairs(&deck), "サイズ {} のデッキでペアが崩れてる！", size);
            // 3. 全部裏向き
            assert!(deck.iter().all(|card| !card.is_face_up && !card.is_matched));
        }
        println!("create_deck のテスト、成功！🎉");
    }

    #[test]
    fn unshuffled_deck_repeats_catalog_order() {
        let deck = create_deck(&catalog(&["A", "B"]));
        assert_eq!(names(&deck), vec!["A", "B", "A", "B"]);
        assert_eq!(pair_count(&deck), 2);
    }

    #[test]
    fn shuffle_keeps_the_same_multiset() {
        let original = create_deck(&catalog(&["A", "B", "C", "D", "E", "F", "G", "H"]));
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = original.clone();
        for _ in 0..50 {
            shuffle_deck_with(&mut shuffled, &mut rng);
            assert_eq!(shuffled.len(), original.len());
            assert_eq!(sorted_names(&shuffled), sorted_names(&original));
            assert!(has_exact_pairs(&shuffled));
        }
    }

    #[test]
    fn shuffle_reaches_every_arrangement() {
        // [A, A, B, B] の並べ方は 4!/(2!2!) = 6 通り。
        // 一様なら 6000 回で各 1000 回前後になるはず。
        let base = create_deck(&catalog(&["A", "B"]));
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..6000 {
            let mut deck = base.clone();
            shuffle_deck_with(&mut deck, &mut rng);
            *seen.entry(names(&deck)).or_default() += 1;
        }
        assert_eq!(seen.len(), 6, "出てこない並びがある: {:?}", seen);
        for (arrangement, count) in &seen {
            assert!(
                (800..=1200).contains(count),
                "{:?} が {} 回、偏りすぎ！",
                arrangement,
                count
            );
        }
    }

    #[test]
    fn reset_cards_keeps_order() {
        let mut deck = create_deck(&catalog(&["A", "B", "C"]));
        let mut rng = StdRng::seed_from_u64(1);
        shuffle_deck_with(&mut deck, &mut rng);
        let order = names(&deck);
        deck[0].is_face_up = true;
        deck[3].is_matched = true;
        reset_cards(&mut deck);
        assert_eq!(names(&deck), order);
        assert!(deck.iter().all(|card| !card.is_face_up && !card.is_matched));
    }

    #[test]
    fn has_exact_pairs_detects_broken_decks() {
        let mut deck = create_deck(&catalog(&["A", "B"]));
        deck.pop();
        assert!(!has_exact_pairs(&deck));
        let tripled = create_deck(&catalog(&["A", "A"]));
        assert!(!has_exact_pairs(&tripled));
    }
}
