use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::Stakes;
use crate::engine::structure::StructureConfig;

use super::{FiveCardDraw, GameVariant, Omaha, TexasHoldem};

/// Вариант игры как данные (из JSON-конфига).
///
/// ```json
/// { "type": "TexasHoldem", "stakes": { "small_blind": 5, "big_blind": 10 },
///   "structure": { "type": "NoLimit" } }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum VariantConfig {
    TexasHoldem {
        stakes: Stakes,
        #[serde(default)]
        structure: StructureConfig,
    },
    Omaha {
        stakes: Stakes,
        #[serde(default = "pot_limit")]
        structure: StructureConfig,
    },
    FiveCardDraw {
        ante: Chips,
        #[serde(default)]
        structure: StructureConfig,
    },
}

fn pot_limit() -> StructureConfig {
    StructureConfig::PotLimit
}

impl VariantConfig {
    pub fn validate(&self) -> Result<(), String> {
        let structure = match self {
            VariantConfig::TexasHoldem { stakes, structure }
            | VariantConfig::Omaha { stakes, structure } => {
                stakes.validate()?;
                structure
            }
            VariantConfig::FiveCardDraw { ante, structure } => {
                if ante.is_zero() {
                    return Err("FiveCardDraw: ante = 0".into());
                }
                structure
            }
        };

        if let StructureConfig::FixedLimit {
            small_bet,
            big_bet,
            max_raises,
        } = structure
        {
            if small_bet.is_zero() || big_bet < small_bet {
                return Err(format!(
                    "FixedLimit: некорректные шаги {small_bet}/{big_bet}"
                ));
            }
            if *max_raises == 0 {
                return Err("FixedLimit: max_raises = 0".into());
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Box<dyn GameVariant> {
        match self {
            VariantConfig::TexasHoldem { stakes, structure } => Box::new(
                TexasHoldem::with_structure(stakes.clone(), structure.build(stakes.big_blind)),
            ),
            VariantConfig::Omaha { stakes, structure } => Box::new(Omaha::with_structure(
                stakes.clone(),
                structure.build(stakes.big_blind),
            )),
            VariantConfig::FiveCardDraw { ante, structure } => {
                Box::new(FiveCardDraw::with_structure(*ante, structure.build(*ante)))
            }
        }
    }
}
