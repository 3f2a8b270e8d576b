//! カードをめくっていいかどうかの判定だよ。

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;

/// めくれなかった理由。全部「何もしない」で終わるけど、ログに出すために分けてる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickRejection {
    NotRunning,
    Locked,
    OutOfRange,
    AlreadyMatched,
    AlreadyFirstPick,
}

/// `index` のカードをめくれるか判定する。
///
/// 判定の順番: 状態 → 判定待ちロック → index の範囲 → マッチ済み → 1 枚目と同じカード。
pub fn validate_pick(
    status: GameStatus,
    locked: bool,
    deck: &[Card],
    selection: &Selection,
    index: usize,
) -> Result<(), PickRejection> {
    if !status.accepts_picks() {
        return Err(PickRejection::NotRunning);
    }
    if locked {
        return Err(PickRejection::Locked);
    }
    let card = deck.get(index).ok_or(PickRejection::OutOfRange)?;
    if card.is_matched {
        return Err(PickRejection::AlreadyMatched);
    }
    if selection.first == Some(index) {
        return Err(PickRejection::AlreadyFirstPick);
    }
    Ok(())
}
