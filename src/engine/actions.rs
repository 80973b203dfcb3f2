use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Тип действия без суммы – из таких собирается набор легальных действий.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

/// Решение игрока.
///
/// Суммы у Bet/Raise – итоговая ставка игрока на улице ("raise to"),
/// а не добавка к ней.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Bet на улице, где ставок ещё нет.
    Bet(Chips),
    /// Raise существующей ставки.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

impl PlayerActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerActionKind::Fold => ActionType::Fold,
            PlayerActionKind::Check => ActionType::Check,
            PlayerActionKind::Call => ActionType::Call,
            PlayerActionKind::Bet(_) => ActionType::Bet,
            PlayerActionKind::Raise(_) => ActionType::Raise,
            PlayerActionKind::AllIn => ActionType::AllIn,
        }
    }
}

/// Запись о применённом действии. После создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// В каком месте он сидит.
    pub seat: SeatIndex,
    pub action: ActionType,
    /// Сколько фишек реально ушло в банк этим действием (0 для fold/check).
    pub amount: Chips,
    pub timestamp: DateTime<Utc>,
}

impl PlayerAction {
    pub fn new(player_id: PlayerId, seat: SeatIndex, action: ActionType, amount: Chips) -> Self {
        Self {
            player_id,
            seat,
            action,
            amount,
            timestamp: Utc::now(),
        }
    }
}
