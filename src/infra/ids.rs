use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{HandId, PlayerId};

/// Простая генерация ID на основе монотонных счётчиков.
///
/// Id игроков раздаёт конфиг при рассадке, id раздач – движок.
#[derive(Debug)]
pub struct IdGenerator {
    player_counter: AtomicU64,
    hand_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            player_counter: AtomicU64::new(1),
            hand_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_hand_id(&self) -> HandId {
        self.hand_counter.fetch_add(1, Ordering::Relaxed)
    }
}
