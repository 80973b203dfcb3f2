use crate::domain::{Chips, PlayerId};

use thiserror::Error;

/// Ошибки движка покера.
///
/// `IllegalBet` движок ловит сам (неявный fold), остальные – фатальные
/// для текущей раздачи и пробрасываются наружу.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Колода пуста – конфигурация фаз раздаёт больше 52 карт")]
    EmptyDeck,

    #[error("Игрок {player}: недостаточно фишек (нужно {needed}, в стеке {stack})")]
    InsufficientChips {
        player: PlayerId,
        needed: Chips,
        stack: Chips,
    },

    #[error("Недопустимая ставка: {0}")]
    IllegalBet(String),

    #[error("Внутренняя ошибка: в банке #{pot_index} нет претендентов с шоудауна")]
    NoEligibleWinner { pot_index: usize },

    #[error("Недостаточно активных игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Игрок {0} не найден за столом")]
    PlayerNotSeated(PlayerId),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfig(String),
}
