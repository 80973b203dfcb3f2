//! Модуль оценки силы покерных рук.
//!
//! Основная функция:
//!   `evaluate_best_hand(hole, board) -> HandRank`
//!
//! Варианты подключают оценщик через трейт `HandEvaluator`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

use core::fmt::Debug;

use crate::domain::card::Card;

pub use evaluator::{evaluate_best_hand, evaluate_pool, OmahaEvaluator, StandardEvaluator};
pub use hand_rank::{HandCategory, HandRank};

/// Стратегия оценки руки для конкретного варианта.
pub trait HandEvaluator: Debug {
    fn name(&self) -> &'static str;

    /// Лучшая 5-карточная рука из карманных карт и борда.
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandRank;
}
