// src/logic/rules/mod.rs
//! 神経衰弱のルール関連モジュールをまとめるよ！

pub mod pick_validation;
pub mod win_condition;


pub use pick_validation::*;
pub use win_condition::*;
