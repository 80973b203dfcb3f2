use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Индекс места за столом (0..seat_count-1).
pub type SeatIndex = u8;

/// Максимум мест за одним столом.
pub const MAX_SEATS: usize = 10;

/// Рассадка и дилерская кнопка.
///
/// Места фиксированы на всю сессию: индекс вектора = SeatIndex.
/// Арифметика позиций: в `engine::positions`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub seats: Vec<Player>,
    /// Место дилерской кнопки.
    pub button: SeatIndex,
}

impl Table {
    pub fn new(players: Vec<Player>) -> Self {
        let button = players
            .iter()
            .position(Player::is_live)
            .unwrap_or(0) as SeatIndex;
        Self {
            seats: players,
            button,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn player_at(&self, seat: SeatIndex) -> &Player {
        &self.seats[seat as usize % self.seats.len()]
    }

    pub fn player_at_mut(&mut self, seat: SeatIndex) -> &mut Player {
        let n = self.seats.len();
        &mut self.seats[seat as usize % n]
    }

    /// Линейный поиск места по id (мест ≤ 10).
    pub fn seat_of(&self, player: PlayerId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|p| p.id == player)
            .map(|i| i as SeatIndex)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.seats.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.seats.iter_mut().find(|p| p.id == id)
    }

    /// Сколько игроков с фишками.
    pub fn players_with_chips(&self) -> usize {
        self.seats.iter().filter(|p| !p.stack.is_zero()).count()
    }

    /// Сколько игроков ещё не сфолдили в текущей раздаче.
    pub fn players_in_hand(&self) -> usize {
        self.seats.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Сколько игроков ещё могут делать ставки.
    pub fn actionable_players(&self) -> usize {
        self.seats.iter().filter(|p| p.can_act()).count()
    }
}
