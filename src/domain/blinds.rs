// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Тип анте.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnteType {
    /// Без анте.
    #[default]
    None,
    /// Классическое анте с каждого игрока.
    Classic,
    /// Big Blind Ante – анте платит только биг-блайнд.
    BigBlind,
}

/// Размеры обязательных ставок для блайндовых вариантов.
/// Пример: SB = 5, BB = 10, ante = 1, ante_type = Classic.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub ante_type: AnteType,
    #[serde(default)]
    pub ante: Chips,
}

impl Stakes {
    pub fn new(sb: Chips, bb: Chips, ante_type: AnteType, ante: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
            ante_type,
            ante,
        }
    }

    /// Блайнды без анте.
    pub fn blinds(sb: u64, bb: u64) -> Self {
        Self::new(Chips(sb), Chips(bb), AnteType::None, Chips::ZERO)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.0 == 0 {
            return Err("Stakes: small_blind = 0".into());
        }
        if self.big_blind.0 < self.small_blind.0 {
            return Err(format!(
                "Stakes: big_blind ({}) < small_blind ({})",
                self.big_blind.0, self.small_blind.0
            ));
        }
        if self.ante_type != AnteType::None && self.ante.is_zero() {
            return Err("Stakes: ante_type задан, но ante = 0".into());
        }
        Ok(())
    }
}
