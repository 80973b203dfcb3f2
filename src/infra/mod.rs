//! Инфраструктурный слой вокруг покерного движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - хранение стеков и истории раздач;
//! - простые боты-провайдеры решений.

pub mod bots;
pub mod ids;
pub mod persistence;
pub mod rng;

pub use bots::{CheckCallBot, RandomBot};
pub use ids::IdGenerator;
pub use persistence::{GameStateStore, InMemoryStore, JsonLinesStore, StoreError};
pub use rng::{DeterministicRng, SystemRng};
