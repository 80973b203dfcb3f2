use crate::domain::chips::Chips;
use crate::domain::Table;
use crate::engine::betting::BettingState;
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::ForcedBet;
use crate::engine::pot::PotLedger;
use crate::engine::structure::{BettingStructure, NoLimit};
use crate::eval::{HandEvaluator, StandardEvaluator};

use super::{post_classic_antes, GameVariant, PhaseConfig};

/// Пятикарточное дро: анте, раздача, торговля, обмен, торговля.
#[derive(Debug)]
pub struct FiveCardDraw {
    name: String,
    ante: Chips,
    phases: Vec<PhaseConfig>,
    evaluator: StandardEvaluator,
    structure: Box<dyn BettingStructure>,
}

impl FiveCardDraw {
    /// No-Limit дро; минимальная ставка = анте.
    pub fn no_limit(ante: Chips) -> Self {
        let structure = Box::new(NoLimit::new(ante));
        Self::with_structure(ante, structure)
    }

    pub fn with_structure(ante: Chips, structure: Box<dyn BettingStructure>) -> Self {
        Self {
            name: format!("{} Five Card Draw", structure.name()),
            ante,
            phases: vec![
                PhaseConfig::new("Initial Deal", 0, 5, false, false),
                PhaseConfig::new("Pre-Draw Betting", 0, 0, true, false),
                PhaseConfig::new("The Draw", 0, 0, false, true),
                PhaseConfig::new("Post-Draw Betting", 0, 0, true, false),
            ],
            evaluator: StandardEvaluator,
            structure,
        }
    }
}

impl GameVariant for FiveCardDraw {
    fn name(&self) -> &str {
        &self.name
    }

    fn phases(&self) -> &[PhaseConfig] {
        &self.phases
    }

    fn evaluator(&self) -> &dyn HandEvaluator {
        &self.evaluator
    }

    fn betting_structure(&self) -> &dyn BettingStructure {
        self.structure.as_ref()
    }

    /// Только анте, ставки первой улицы нет.
    fn post_forced_bets(
        &self,
        table: &mut Table,
        ledger: &mut PotLedger,
        ctx: &mut RoundContext,
        betting: &mut BettingState,
    ) -> Result<Vec<ForcedBet>, EngineError> {
        let posted = post_classic_antes(table, self.ante, ledger, betting)?;
        ctx.current_bet = Chips::ZERO;
        ctx.min_raise = self.structure.opening_increment(ctx);
        ctx.pot_total = ledger.total();
        Ok(posted)
    }
}
