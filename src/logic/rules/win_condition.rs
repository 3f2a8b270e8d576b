//! ゲームの勝利条件判定ロジックを定義するよ。

/// 揃ったペア数が全ペア数に達したらクリア。
/// ペアが 0 組のデッキはそもそも遊べないので、クリア扱いにしない。
pub fn check_win_condition(matched_pairs: usize, total_pairs: usize) -> bool {
    total_pairs > 0 && matched_pairs == total_pairs
}
