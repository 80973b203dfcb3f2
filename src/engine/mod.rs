//! Покерный движок: позиции, ставки, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `play_hand` – сыграть одну раздачу целиком
//!   - `run_session` – играть раздачи, пока есть хотя бы двое с фишками
//!
//! Решения игроков приходят через `DecisionProvider`, события уходят
//! подписчикам `GameObserver`.

pub mod actions;
pub mod betting;
pub mod context;
pub mod decision;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod observer;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod structure;
pub mod validation;

pub use actions::{ActionType, PlayerAction, PlayerActionKind};
pub use betting::BettingState;
pub use context::{RoundContext, RoundSnapshot, SeatView};
pub use decision::{DecisionError, DecisionProvider};
pub use errors::EngineError;
pub use game_loop::{GameEngine, HandState, SessionOutcome};
pub use hand_history::{ForcedBet, ForcedBetKind, HandEvent, HandEventKind, HandHistory};
pub use observer::GameObserver;
pub use pot::PotLedger;
pub use side_pots::SidePot;
pub use structure::{BettingStructure, FixedLimit, NoLimit, PotLimit, ProposedBet, StructureConfig};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
