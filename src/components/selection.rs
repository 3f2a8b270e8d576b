// src/components/selection.rs

use serde::{Deserialize, Serialize};

/// 今のターンでめくったカード (デッキの index) を覚えておく構造体。
///
/// ターンの合間はどっちも `None`。1 枚目をめくると `first`、
/// 2 枚目で `second` が埋まって、判定が終わったら両方クリアされる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl Selection {
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}
