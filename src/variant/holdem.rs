use crate::domain::{Stakes, Table};
use crate::engine::betting::BettingState;
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::ForcedBet;
use crate::engine::pot::PotLedger;
use crate::engine::structure::{BettingStructure, NoLimit};
use crate::eval::{HandEvaluator, StandardEvaluator};

use super::{post_blinds, GameVariant, PhaseConfig};

/// Техасский холдем: 2 карманные, флоп-тёрн-ривер, блайнды.
#[derive(Debug)]
pub struct TexasHoldem {
    name: String,
    stakes: Stakes,
    phases: Vec<PhaseConfig>,
    evaluator: StandardEvaluator,
    structure: Box<dyn BettingStructure>,
}

impl TexasHoldem {
    /// No-Limit холдем с минимальной ставкой = BB.
    pub fn no_limit(stakes: Stakes) -> Self {
        let structure = Box::new(NoLimit::new(stakes.big_blind));
        Self::with_structure(stakes, structure)
    }

    pub fn with_structure(stakes: Stakes, structure: Box<dyn BettingStructure>) -> Self {
        Self {
            name: format!("{} Texas Hold'em", structure.name()),
            stakes,
            phases: board_phases(2),
            evaluator: StandardEvaluator,
            structure,
        }
    }

    pub fn stakes(&self) -> &Stakes {
        &self.stakes
    }
}

/// Пре-флоп с `hole_cards` карманными, затем флоп (3), тёрн (1), ривер (1).
pub(crate) fn board_phases(hole_cards: usize) -> Vec<PhaseConfig> {
    vec![
        PhaseConfig::new("Pre-Flop", 0, hole_cards, true, false),
        PhaseConfig::new("The Flop", 3, 0, true, false),
        PhaseConfig::new("The Turn", 1, 0, true, false),
        PhaseConfig::new("The River", 1, 0, true, false),
    ]
}

impl GameVariant for TexasHoldem {
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
