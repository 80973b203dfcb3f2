//! Граница с внешним источником решений (человек, бот, UI).

use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::player::Player;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::context::RoundSnapshot;

/// Сбой на стороне провайдера. Для движка это неявный fold, а не ошибка раздачи.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("игрок не ответил вовремя")]
    TimedOut,

    #[error("провайдер решений недоступен: {0}")]
    Unavailable(String),
}

/// Кто принимает решения за игроков.
///
/// Вызовы блокирующие: движок ждёт ответа. Таймаут, если он нужен,
/// реализует сам провайдер и возвращает `DecisionError::TimedOut`.
/// Снимок – копия, живое состояние провайдеру недоступно.
pub trait DecisionProvider {
    fn request_action(
        &mut self,
        player: &Player,
        snapshot: &RoundSnapshot,
        legal: &[ActionType],
    ) -> Result<PlayerActionKind, DecisionError>;

    /// Какие карманные карты сбросить на обмене. Пустой список – стоим.
    fn request_discards(
        &mut self,
        player: &Player,
        snapshot: &RoundSnapshot,
    ) -> Result<Vec<Card>, DecisionError> {
        let _ = (player, snapshot);
        Ok(Vec::new())
    }
}

impl<T: DecisionProvider + ?Sized> DecisionProvider for Box<T> {
    fn request_action(
        &mut self,
        player: &Player,
        snapshot: &RoundSnapshot,
        legal: &[ActionType],
    ) -> Result<PlayerActionKind, DecisionError> {
        (**self).request_action(player, snapshot, legal)
    }

    fn request_discards(
        &mut self,
        player: &Player,
        snapshot: &RoundSnapshot,
    ) -> Result<Vec<Card>, DecisionError> {
        (**self).request_discards(player, snapshot)
    }
}
