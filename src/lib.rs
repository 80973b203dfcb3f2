//! Многовариантный покерный движок: холдем, омаха, пятикарточное дро.
//!
//! Слои:
//!   - `domain` – карты, колода, фишки, игроки, стол;
//!   - `eval` – оценка рук;
//!   - `engine` – позиции, структуры ставок, банк и сайд-поты, машина раздачи;
//!   - `variant` – правила конкретных игр (фазы + стратегии);
//!   - `infra` – RNG, id, хранилище, боты;
//!   - `config` – конфигурация сессии из JSON.

pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod variant;

pub use config::{GameConfig, SeatConfig};
pub use engine::{EngineError, GameEngine};
