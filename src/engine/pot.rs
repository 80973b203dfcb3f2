use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::side_pots::{compute_side_pots, settle_side_pots, SidePot};
use crate::eval::HandRank;

/// Учёт вкладов за раздачу: кто сколько внёс во все улицы (включая анте).
///
/// Из этого журнала при расчёте строятся сайд-поты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotLedger {
    pub contributions: BTreeMap<PlayerId, Chips>,
    pub total: Chips,
}

impl PotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Новая раздача: у всех участников по нулям.
    pub fn start_hand(&mut self, players: impl IntoIterator<Item = PlayerId>) {
        self.contributions = players.into_iter().map(|id| (id, Chips::ZERO)).collect();
        self.total = Chips::ZERO;
    }

    /// Записать вклад. Корректность суммы проверяет структура ставок.
    pub fn record_contribution(&mut self, player: PlayerId, amount: Chips) {
        *self.contributions.entry(player).or_insert(Chips::ZERO) += amount;
        self.total += amount;
    }

    pub fn total(&self) -> Chips {
        self.total
    }

    pub fn contribution(&self, player: PlayerId) -> Chips {
        self.contributions.get(&player).copied().unwrap_or(Chips::ZERO)
    }

    /// Слои банка по текущему журналу. Журнал не меняется.
    pub fn build_side_pots(&self, folded: &BTreeSet<PlayerId>) -> Vec<SidePot> {
        compute_side_pots(&self.contributions, folded)
    }

    /// Кто сколько выиграл по итогам шоудауна.
    pub fn settle(
        &self,
        showdown: &BTreeMap<PlayerId, HandRank>,
        folded: &BTreeSet<PlayerId>,
        odd_chip_order: &[PlayerId],
    ) -> Result<BTreeMap<PlayerId, Chips>, EngineError> {
        let pots = self.build_side_pots(folded);
        settle_side_pots(&pots, showdown, odd_chip_order)
    }
}
