use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::hand_history::HandHistory;
use crate::eval::HandRank;

/// Результат конкретного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub player_id: PlayerId,
    /// Итоговый ранг руки (если дошёл до шоудауна).
    pub rank: Option<HandRank>,
    /// Сколько вложил за раздачу.
    pub contributed: Chips,
    /// Сколько забрал из банка.
    pub won: Chips,
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи. Уходит в персистентность.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub hand_id: HandId,
    pub variant: String,
    pub button: SeatIndex,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// true – был шоудаун, false – все, кроме одного, сфолдили.
    pub went_to_showdown: bool,
    pub results: Vec<PlayerHandResult>,
    pub history: HandHistory,
}

impl HandRecord {
    pub fn winners(&self) -> impl Iterator<Item = &PlayerHandResult> {
        self.results.iter().filter(|r| r.is_winner)
    }

    pub fn won_by(&self, player: PlayerId) -> Chips {
        self.results
            .iter()
            .find(|r| r.player_id == player)
            .map(|r| r.won)
            .unwrap_or(Chips::ZERO)
    }
}
