use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;

/// Участник сессии за столом.
///
/// Создаётся один раз на сессию со стартовым стеком; флаги и карты
/// меняются каждую раздачу, стек: на каждой ставке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Текущий стек. Никогда не уходит в минус.
    pub stack: Chips,
    /// Карманные карты (0 до первой раздачи).
    pub hole_cards: Vec<Card>,
    pub folded: bool,
    /// Стек обнулился ставками в этой раздаче (или был нулевым на старте).
    pub all_in: bool,
    pub sitting_out: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hole_cards: Vec::new(),
            folded: false,
            all_in: stack.is_zero(),
            sitting_out: false,
        }
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hole_cards.push(card);
    }

    /// Списать фишки со стека. Стек обнулился → all-in.
    pub fn bet(&mut self, amount: Chips) -> Result<(), EngineError> {
        let rest = self
            .stack
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientChips {
                player: self.id,
                needed: amount,
                stack: self.stack,
            })?;
        self.stack = rest;
        if self.stack.is_zero() {
            self.all_in = true;
        }
        Ok(())
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: Chips) {
        self.stack += amount;
    }

    /// Сброс перед новой раздачей: карты и fold уходят,
    /// all-in остаётся только при нулевом стеке.
    pub fn clear_hand(&mut self) {
        self.hole_cards.clear();
        self.folded = false;
        self.all_in = self.stack.is_zero();
    }

    /// Ещё претендует на банк.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Может делать ставки на текущей улице.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && !self.sitting_out
    }

    /// Может быть раздан в следующую раздачу.
    pub fn is_live(&self) -> bool {
        !self.stack.is_zero() && !self.sitting_out
    }
}
