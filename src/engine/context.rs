use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex, Table};
use crate::engine::betting::BettingState;

/// Живое состояние раунда. Меняет только оркестратор.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundContext {
    /// Общий размер банка (все улицы, включая анте).
    pub pot_total: Chips,
    /// Текущая наибольшая ставка за улицу.
    pub current_bet: Chips,
    /// Минимальный шаг полного рейза.
    pub min_raise: Chips,
    /// Общие карты борда.
    pub community_cards: Vec<Card>,
    /// Кто ещё в раздаче (не сфолдил), в порядке мест.
    pub active_players: Vec<PlayerId>,
    pub acting_player: Option<PlayerId>,
    /// Название текущей фазы (из конфигурации варианта).
    pub phase: String,
    /// Номер раунда ставок в раздаче (0 = первый).
    pub betting_round: usize,
    /// Сколько bet/raise было на этой улице (для лимитных структур).
    pub raises_this_street: u32,
}

impl RoundContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сброс перед новой раздачей.
    pub fn reset_for_hand(&mut self) {
        *self = Self::default();
    }

    /// Сброс параметров ставок на новой улице.
    pub fn reset_for_street(&mut self, min_raise: Chips) {
        self.current_bet = Chips::ZERO;
        self.min_raise = min_raise;
        self.raises_this_street = 0;
    }

    pub fn refresh_active(&mut self, table: &Table) {
        self.active_players = table
            .seats
            .iter()
            .filter(|p| p.is_in_hand())
            .map(|p| p.id)
            .collect();
    }

    /// Копия для внешних участников: живое состояние наружу не отдаём.
    pub fn snapshot(&self, table: &Table, betting: &BettingState) -> RoundSnapshot {
        RoundSnapshot {
            context: self.clone(),
            button: table.button,
            seats: table
                .seats
                .iter()
                .enumerate()
                .map(|(i, p)| SeatView {
                    seat: i as SeatIndex,
                    player_id: p.id,
                    name: p.name.clone(),
                    stack: p.stack,
                    street_bet: betting.street_bet(p.id),
                    folded: p.folded,
                    all_in: p.all_in,
                    sitting_out: p.sitting_out,
                })
                .collect(),
        }
    }
}

/// Публичное состояние одного места (без карманных карт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatView {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub name: String,
    pub stack: Chips,
    pub street_bet: Chips,
    pub folded: bool,
    pub all_in: bool,
    pub sitting_out: bool,
}

/// Неизменяемый снимок раунда для провайдера решений и наблюдателей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub context: RoundContext,
    pub button: SeatIndex,
    pub seats: Vec<SeatView>,
}

impl RoundSnapshot {
    pub fn seat_of(&self, player: PlayerId) -> Option<&SeatView> {
        self.seats.iter().find(|s| s.player_id == player)
    }

    /// Сколько игроку нужно доплатить до текущей ставки.
    pub fn to_call(&self, player: PlayerId) -> Chips {
        let bet = self.seat_of(player).map(|s| s.street_bet).unwrap_or(Chips::ZERO);
        self.context.current_bet.saturating_sub(bet)
    }
}
