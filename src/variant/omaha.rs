use crate::domain::{Stakes, Table};
use crate::engine::betting::BettingState;
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::ForcedBet;
use crate::engine::pot::PotLedger;
use crate::engine::structure::{BettingStructure, PotLimit};
use crate::eval::{HandEvaluator, OmahaEvaluator};

use super::holdem::board_phases;
use super::{post_blinds, GameVariant, PhaseConfig};

/// Омаха: 4 карманные, в комбинации ровно 2 из них и 3 с борда.
#[derive(Debug)]
pub struct Omaha {
    name: String,
    stakes: Stakes,
    phases: Vec<PhaseConfig>,
    evaluator: OmahaEvaluator,
    structure: Box<dyn BettingStructure>,
}

impl Omaha {
    /// Классическая Pot-Limit Omaha.
    pub fn pot_limit(stakes: Stakes) -> Self {
        let structure = Box::new(PotLimit::new(stakes.big_blind));
        Self::with_structure(stakes, structure)
    }

    pub fn with_structure(stakes: Stakes, structure: Box<dyn BettingStructure>) -> Self {
        Self {
            name: format!("{} Omaha", structure.name()),
            stakes,
            phases: board_phases(4),
            evaluator: OmahaEvaluator,
            structure,
        }
    }
}

impl GameVariant for Omaha {
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

    fn post_forced_bets(
        &self,
        table: &mut Table,
        ledger: &mut PotLedger,
        ctx: &mut RoundContext,
        betting: &mut BettingState,
    ) -> Result<Vec<ForcedBet>, EngineError> {
        post_blinds(&self.stakes, table, ledger, ctx, betting)
    }
}
