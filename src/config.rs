//! Конфигурация сессии: вариант, рассадка, лимит раздач, seed.
//!
//! ```json
//! {
//!   "variant": { "type": "TexasHoldem", "stakes": { "small_blind": 5, "big_blind": 10 } },
//!   "seats": [ { "name": "alice", "stack": 1000 }, { "name": "bob", "stack": 1000 } ],
//!   "max_hands": 50,
//!   "seed": 7
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{Player, Stakes, Table, MAX_SEATS};
use crate::engine::decision::DecisionProvider;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::GameEngine;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::variant::VariantConfig;

/// Одно место за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub stack: Chips,
    #[serde(default)]
    pub sitting_out: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: VariantConfig,
    pub seats: Vec<SeatConfig>,
    /// None – играть до последнего стека.
    #[serde(default)]
    pub max_hands: Option<u32>,
    /// Seed для детерминированной тасовки.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// Шесть игроков по 1000, NL холдем 5/10, 100 раздач.
    fn default() -> Self {
        Self {
            variant: VariantConfig::TexasHoldem {
                stakes: Stakes::blinds(5, 10),
                structure: Default::default(),
            },
            seats: ["alice", "bob", "carol", "dave", "erin", "frank"]
                .iter()
                .map(|name| SeatConfig {
                    name: name.to_string(),
                    stack: Chips(1_000),
                    sitting_out: false,
                })
                .collect(),
            max_hands: Some(100),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let cfg: GameConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(format!("JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| EngineError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.seats.len() < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "нужно минимум 2 места, задано {}",
                self.seats.len()
            )));
        }
        if self.seats.len() > MAX_SEATS {
            return Err(EngineError::InvalidConfig(format!(
                "максимум {MAX_SEATS} мест, задано {}",
                self.seats.len()
            )));
        }
        for (i, a) in self.seats.iter().enumerate() {
            if self.seats[i + 1..].iter().any(|b| b.name == a.name) {
                return Err(EngineError::InvalidConfig(format!(
                    "имя '{}' повторяется",
                    a.name
                )));
            }
        }
        self.variant.validate().map_err(EngineError::InvalidConfig)
    }

    /// Рассадить игроков; id выдаются по порядку мест.
    pub fn build_table(&self) -> Table {
        let ids = IdGenerator::new();
        let players = self
            .seats
            .iter()
            .map(|s| {
                let mut p = Player::new(ids.next_player_id(), s.name.clone(), s.stack);
                p.sitting_out = s.sitting_out;
                p
            })
            .collect();
        Table::new(players)
    }

    pub fn build_engine<R: RandomSource>(
        &self,
        decisions: Box<dyn DecisionProvider>,
        rng: R,
    ) -> Result<GameEngine<R>, EngineError> {
        self.validate()?;
        Ok(GameEngine::new(
            self.build_table(),
            self.variant.build(),
            decisions,
            rng,
        ))
    }
}
