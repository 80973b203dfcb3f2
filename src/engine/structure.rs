//! Структуры ставок: No-Limit, Pot-Limit, Fixed-Limit.
//!
//! Структура отвечает только за размеры: минимальный рейз, максимальная
//! ставка и проверка конкретной ставки. Кто и когда ходит – дело движка.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::actions::ActionType;
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;

/// Предлагаемая ставка после ограничения стеком игрока.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProposedBet {
    pub action: ActionType,
    /// Ставка игрока на улице до действия.
    pub street_bet: Chips,
    /// Сколько фишек добавляется этим действием.
    pub added: Chips,
    /// Стек до действия.
    pub stack: Chips,
}

impl ProposedBet {
    /// Итоговая ставка на улице после действия.
    pub fn total(&self) -> Chips {
        self.street_bet + self.added
    }

    pub fn is_all_in(&self) -> bool {
        self.added == self.stack
    }
}

pub trait BettingStructure: Debug {
    fn name(&self) -> &'static str;

    /// Шаг минимального рейза в начале улицы (до первой ставки).
    fn opening_increment(&self, ctx: &RoundContext) -> Chips;

    /// До какой суммы минимум должен дотянуться рейз.
    fn min_raise_to(&self, ctx: &RoundContext) -> Chips {
        ctx.current_bet + ctx.min_raise
    }

    /// Максимальная итоговая ставка на улице. None – без ограничения.
    fn max_bet_to(&self, ctx: &RoundContext, street_bet: Chips) -> Option<Chips>;

    /// Проверка ставки. Fold легален всегда.
    fn validate(&self, bet: &ProposedBet, ctx: &RoundContext) -> Result<(), EngineError> {
        if bet.action == ActionType::Fold {
            return Ok(());
        }
        if bet.added > bet.stack {
            return Err(EngineError::IllegalBet(format!(
                "ставка {} больше стека {}",
                bet.added, bet.stack
            )));
        }
        if matches!(bet.action, ActionType::Check | ActionType::Call) {
            return Ok(());
        }

        let total = bet.total();
        let all_in = bet.is_all_in();

        if let Some(max) = self.max_bet_to(ctx, bet.street_bet) {
            if total > max {
                return Err(EngineError::IllegalBet(format!(
                    "{}: ставка до {} выше максимума {}",
                    self.name(),
                    total,
                    max
                )));
            }
        }

        if bet.added.is_zero() {
            return Err(EngineError::IllegalBet("пустая ставка".into()));
        }

        // Короткий all-in разрешён даже ниже минимального рейза.
        if !all_in {
            if total <= ctx.current_bet {
                return Err(EngineError::IllegalBet(format!(
                    "ставка до {} не превышает текущую {}",
                    total, ctx.current_bet
                )));
            }
            let min_to = self.min_raise_to(ctx);
            if total < min_to {
                return Err(EngineError::IllegalBet(format!(
                    "рейз до {} меньше минимального {}",
                    total, min_to
                )));
            }
        }

        Ok(())
    }
}

/// No-Limit: ставка ограничена только стеком.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoLimit {
    /// Минимальная открывающая ставка (обычно BB).
    pub min_bet: Chips,
}

impl NoLimit {
    pub fn new(min_bet: Chips) -> Self {
        Self { min_bet }
    }
}

impl BettingStructure for NoLimit {
    fn name(&self) -> &'static str {
        "No-Limit"
    }

    fn opening_increment(&self, _ctx: &RoundContext) -> Chips {
        self.min_bet
    }

    fn max_bet_to(&self, _ctx: &RoundContext, _street_bet: Chips) -> Option<Chips> {
        None
    }
}

/// Pot-Limit: рейз не больше банка после колла.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PotLimit {
    pub min_bet: Chips,
}

impl PotLimit {
    pub fn new(min_bet: Chips) -> Self {
        Self { min_bet }
    }
}

impl BettingStructure for PotLimit {
    fn name(&self) -> &'static str {
        "Pot-Limit"
    }

    fn opening_increment(&self, _ctx: &RoundContext) -> Chips {
        self.min_bet
    }

    fn max_bet_to(&self, ctx: &RoundContext, street_bet: Chips) -> Option<Chips> {
        let to_call = ctx.current_bet.saturating_sub(street_bet);
        Some(ctx.current_bet + ctx.pot_total + to_call)
    }
}

/// Fixed-Limit: фиксированный шаг, малый на первых двух раундах ставок,
/// большой дальше. Не больше `max_raises` повышений за улицу.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedLimit {
    pub small_bet: Chips,
    pub big_bet: Chips,
    pub max_raises: u32,
}

impl FixedLimit {
    pub fn new(small_bet: Chips, big_bet: Chips, max_raises: u32) -> Self {
        Self {
            small_bet,
            big_bet,
            max_raises,
        }
    }

    pub fn increment(&self, ctx: &RoundContext) -> Chips {
        if ctx.betting_round < 2 {
            self.small_bet
        } else {
            self.big_bet
        }
    }
}

impl BettingStructure for FixedLimit {
    fn name(&self) -> &'static str {
        "Fixed-Limit"
    }

    fn opening_increment(&self, ctx: &RoundContext) -> Chips {
        self.increment(ctx)
    }

    fn min_raise_to(&self, ctx: &RoundContext) -> Chips {
        ctx.current_bet + self.increment(ctx)
    }

    fn max_bet_to(&self, ctx: &RoundContext, _street_bet: Chips) -> Option<Chips> {
        if ctx.raises_this_street >= self.max_raises {
            Some(ctx.current_bet)
        } else {
            Some(ctx.current_bet + self.increment(ctx))
        }
    }
}

/// Конфигурация структуры ставок (данные → объект).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum StructureConfig {
    #[default]
    NoLimit,
    PotLimit,
    FixedLimit {
        small_bet: Chips,
        big_bet: Chips,
        #[serde(default = "default_max_raises")]
        max_raises: u32,
    },
}

fn default_max_raises() -> u32 {
    4
}

impl StructureConfig {
    /// `min_bet` – минимальная открывающая ставка для NL/PL.
    pub fn build(&self, min_bet: Chips) -> Box<dyn BettingStructure> {
        match self {
            StructureConfig::NoLimit => Box::new(NoLimit::new(min_bet)),
            StructureConfig::PotLimit => Box::new(PotLimit::new(min_bet)),
            StructureConfig::FixedLimit {
                small_bet,
                big_bet,
                max_raises,
            } => Box::new(FixedLimit::new(*small_bet, *big_bet, *max_raises)),
        }
    }
}
