use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Категория покерной руки по силе.
///
/// Числовое значение = "сила" категории, сравнение идёт по нему.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    pub const fn power(self) -> u8 {
        self as u8
    }

    pub fn describe(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

/// Результат оценки руки.
///
/// Сравнивается только по (категория, кикеры по позициям).
/// `best_five` в сравнении не участвует: две руки с разными мастями,
/// но одинаковыми рангами – это честный сплит.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandRank {
    pub category: HandCategory,
    /// Ранги для тай-брейка, от самого значимого к наименее значимому.
    pub kickers: Vec<Rank>,
    /// Конкретные 5 карт, из которых собрана рука.
    pub best_five: Vec<Card>,
}

impl HandRank {
    pub fn new(category: HandCategory, kickers: Vec<Rank>, best_five: Vec<Card>) -> Self {
        Self {
            category,
            kickers,
            best_five,
        }
    }

    pub fn describe(&self) -> String {
        let ranks: Vec<String> = self.kickers.iter().map(|r| r.to_string()).collect();
        format!("{} [{}]", self.category.describe(), ranks.join(" "))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .power()
            .cmp(&other.category.power())
            .then_with(|| {
                // Сравниваем кикеры попозиционно по общей длине.
                self.kickers
                    .iter()
                    .zip(other.kickers.iter())
                    .map(|(a, b)| a.cmp(b))
                    .find(|o| *o != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.best_five.iter().map(|c| c.to_string()).collect();
        write!(f, "{} ({})", self.category.describe(), cards.join(" "))
    }
}
