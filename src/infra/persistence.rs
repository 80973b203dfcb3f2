use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::HandRecord;
use crate::domain::player::Player;

/// Ошибки хранилища. Движок их логирует и продолжает игру.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("ошибка (де)сериализации: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Абстракция хранилища сессии: стеки по имени игрока и лог раздач.
///
/// Отсутствие хранилища (или его сбой) на игру не влияет.
pub trait GameStateStore {
    fn save_player_chips(&mut self, players: &[Player]) -> Result<(), StoreError>;

    fn load_player_chips(&self) -> Result<BTreeMap<String, Chips>, StoreError>;

    fn append_hand(&mut self, record: &HandRecord) -> Result<(), StoreError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub chips: BTreeMap<String, Chips>,
    pub hands: Vec<HandRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStateStore for InMemoryStore {
    fn save_player_chips(&mut self, players: &[Player]) -> Result<(), StoreError> {
        self.chips = players
            .iter()
            .map(|p| (p.name.clone(), p.stack))
            .collect();
        Ok(())
    }

    fn load_player_chips(&self) -> Result<BTreeMap<String, Chips>, StoreError> {
        Ok(self.chips.clone())
    }

    fn append_hand(&mut self, record: &HandRecord) -> Result<(), StoreError> {
        self.hands.push(record.clone());
        Ok(())
    }
}

/// Файловое хранилище в каталоге:
/// - `chips.json` – последние стеки (перезаписывается);
/// - `hands.jsonl` – по одной раздаче в строке (дописывается).
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    dir: PathBuf,
}

impl JsonLinesStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn chips_path(&self) -> PathBuf {
        self.dir.join("chips.json")
    }

    pub fn hands_path(&self) -> PathBuf {
        self.dir.join("hands.jsonl")
    }
}

impl GameStateStore for JsonLinesStore {
    fn save_player_chips(&mut self, players: &[Player]) -> Result<(), StoreError> {
        let chips: BTreeMap<&str, Chips> =
            players.iter().map(|p| (p.name.as_str(), p.stack)).collect();
        let json = serde_json::to_string_pretty(&chips)?;
        fs::write(self.chips_path(), json)?;
        Ok(())
    }

    fn load_player_chips(&self) -> Result<BTreeMap<String, Chips>, StoreError> {
        let path = self.chips_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn append_hand(&mut self, record: &HandRecord) -> Result<(), StoreError> {
        let line = serde_json::to_string(record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.hands_path())?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
