use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Учёт ставок на текущей улице.
///
/// Общие параметры улицы (current_bet, min_raise) живут в `RoundContext`,
/// здесь – только то, что нужно циклу ставок: вклады за улицу и
/// кто уже походил после последнего повышения.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Сколько игрок поставил на этой улице (включая блайнды на первой).
    pub street_bets: BTreeMap<PlayerId, Chips>,
    /// Кто уже действовал после последнего повышения.
    pub acted: BTreeSet<PlayerId>,
    /// Последний агрессор (bet/raise/all-in выше текущей ставки).
    pub last_aggressor: Option<PlayerId>,
}

impl BettingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Новая раздача: всем по нулям.
    pub fn start_hand(&mut self, players: impl IntoIterator<Item = PlayerId>) {
        self.street_bets = players.into_iter().map(|id| (id, Chips::ZERO)).collect();
        self.acted.clear();
        self.last_aggressor = None;
    }

    /// Новая улица: вклады за улицу обнуляются, очередь действий пустая.
    pub fn reset_street(&mut self) {
        for bet in self.street_bets.values_mut() {
            *bet = Chips::ZERO;
        }
        self.acted.clear();
        self.last_aggressor = None;
    }

    pub fn street_bet(&self, player: PlayerId) -> Chips {
        self.street_bets.get(&player).copied().unwrap_or(Chips::ZERO)
    }

    pub fn add_street_bet(&mut self, player: PlayerId, amount: Chips) -> Chips {
        let entry = self.street_bets.entry(player).or_insert(Chips::ZERO);
        *entry += amount;
        *entry
    }

    pub fn mark_acted(&mut self, player: PlayerId) {
        self.acted.insert(player);
    }

    /// Повышение: все остальные должны походить снова.
    pub fn reopen(&mut self, aggressor: PlayerId) {
        self.acted.clear();
        self.acted.insert(aggressor);
        self.last_aggressor = Some(aggressor);
    }

    /// Улица закрыта: каждый, кто ещё может ставить, походил после
    /// последнего повышения и уравнял текущую ставку.
    pub fn is_settled<'a>(
        &self,
        actionable: impl IntoIterator<Item = &'a PlayerId>,
        current_bet: Chips,
    ) -> bool {
        actionable
            .into_iter()
            .all(|id| self.acted.contains(id) && self.street_bet(*id) >= current_bet)
    }
}
