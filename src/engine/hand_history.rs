use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::actions::ActionType;
use crate::eval::HandRank;

/// Вид обязательной ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForcedBetKind {
    SmallBlind,
    BigBlind,
    Ante,
}

/// Поставленная обязательная ставка (уже ограниченная стеком).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForcedBet {
    pub player_id: PlayerId,
    pub kind: ForcedBetKind,
    pub amount: Chips,
}

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        hand_id: HandId,
        button: SeatIndex,
        dealt_in: Vec<PlayerId>,
    },

    /// Блайнды/анте.
    ForcedBetsPosted { bets: Vec<ForcedBet> },

    PhaseStarted { name: String },

    /// Игрок получил карманные карты.
    HoleCardsDealt { player_id: PlayerId, cards: Vec<Card> },

    /// Открыты общие карты на борде.
    BoardDealt { cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        action: ActionType,
        amount: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Обмен на дро: сколько сброшено и получено.
    CardsDrawn {
        player_id: PlayerId,
        discarded: Vec<Card>,
        received: Vec<Card>,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата банка(ов).
    PotAwarded { player_id: PlayerId, amount: Chips },

    /// Раздача завершена.
    HandFinished { hand_id: HandId, total_pot: Chips },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    /// Только действия игроков, в порядке применения.
    pub fn actions(&self) -> impl Iterator<Item = (PlayerId, ActionType, Chips)> + '_ {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::PlayerActed {
                player_id,
                action,
                amount,
                ..
            } => Some((*player_id, *action, *amount)),
            _ => None,
        })
    }
}
