//! Простые провайдеры решений для dev-CLI, тестов и стресс-прогонов.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::context::RoundSnapshot;
use crate::engine::decision::{DecisionError, DecisionProvider};

/// Никогда не повышает: чек, если можно, иначе колл. На обмене стоит.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckCallBot;

impl DecisionProvider for CheckCallBot {
    fn request_action(
        &mut self,
        _player: &Player,
        _snapshot: &RoundSnapshot,
        legal: &[ActionType],
    ) -> Result<PlayerActionKind, DecisionError> {
        if legal.contains(&ActionType::Check) {
            Ok(PlayerActionKind::Check)
        } else if legal.contains(&ActionType::Call) {
            Ok(PlayerActionKind::Call)
        } else {
            Ok(PlayerActionKind::Fold)
        }
    }
}

/// Случайный бот с воспроизводимым seed.
///
/// `aggression` – вероятность повысить, `fold_rate` – вероятность
/// сбросить при ставке против себя.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: StdRng,
    pub aggression: f64,
    pub fold_rate: f64,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            aggression: 0.2,
            fold_rate: 0.15,
        }
    }

    /// Итоговая сумма повышения: от минимального рейза до трёх минимальных.
    fn raise_to(&mut self, snapshot: &RoundSnapshot) -> Chips {
        let ctx = &snapshot.context;
        let step = if ctx.min_raise.is_zero() {
            Chips(1)
        } else {
            ctx.min_raise
        };
        let mult = self.rng.gen_range(1..=3u64);
        ctx.current_bet + Chips(step.0 * mult)
    }
}

impl DecisionProvider for RandomBot {
    fn request_action(
        &mut self,
        player: &Player,
        snapshot: &RoundSnapshot,
        legal: &[ActionType],
    ) -> Result<PlayerActionKind, DecisionError> {
        let facing_bet = legal.contains(&ActionType::Call);

        if facing_bet && self.rng.gen_bool(self.fold_rate) {
            return Ok(PlayerActionKind::Fold);
        }

        if self.rng.gen_bool(self.aggression) {
            let to = self.raise_to(snapshot);
            let street_bet = snapshot
                .seat_of(player.id)
                .map(|s| s.street_bet)
                .unwrap_or(Chips::ZERO);
            if to.saturating_sub(street_bet) >= player.stack {
                return Ok(PlayerActionKind::AllIn);
            }
            return Ok(if facing_bet {
                PlayerActionKind::Raise(to)
            } else {
                PlayerActionKind::Bet(to)
            });
        }

        Ok(if facing_bet {
            PlayerActionKind::Call
        } else {
            PlayerActionKind::Check
        })
    }

    fn request_discards(
        &mut self,
        player: &Player,
        _snapshot: &RoundSnapshot,
    ) -> Result<Vec<Card>, DecisionError> {
        let count = self.rng.gen_range(0..=3usize).min(player.hole_cards.len());
        let mut cards = player.hole_cards.clone();
        cards.shuffle(&mut self.rng);
        cards.truncate(count);
        Ok(cards)
    }
}
