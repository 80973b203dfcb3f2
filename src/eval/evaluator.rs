use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::{HandCategory, HandRank};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};
use super::HandEvaluator;

/// Классическая оценка "лучшие 5 из N" (холдем, дро).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl HandEvaluator for StandardEvaluator {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandRank {
        evaluate_best_hand(hole, board)
    }
}

/// Омаха: ровно 2 карманные + ровно 3 с борда.
#[derive(Clone, Copy, Debug, Default)]
pub struct OmahaEvaluator;

impl HandEvaluator for OmahaEvaluator {
    fn name(&self) -> &'static str {
        "omaha"
    }

    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandRank {
        if hole.len() < 2 || board.len() < 3 {
            // Неполная раздача – оцениваем что есть.
            return evaluate_best_hand(hole, board);
        }

        let mut best: Option<HandRank> = None;
        for a in 0..hole.len() - 1 {
            for b in (a + 1)..hole.len() {
                for c in 0..board.len() - 2 {
                    for d in (c + 1)..board.len() - 1 {
                        for e in (d + 1)..board.len() {
                            let five = [hole[a], hole[b], board[c], board[d], board[e]];
                            let r = evaluate_pool(&five);
                            if best.as_ref().map_or(true, |br| r > *br) {
                                best = Some(r);
                            }
                        }
                    }
                }
            }
        }

        match best {
            Some(r) => r,
            None => evaluate_best_hand(hole, board),
        }
    }
}

/// Главная функция: вычислить лучшую 5-карточную руку из hole + board.
///
/// Обычно 5–7 карт, но меньшее количество не паникует: кикеры
/// просто короче.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate_pool(&all_cards)
}

/// Оценка общего пула карт. Категории проверяются сверху вниз,
/// первая подходящая выигрывает.
pub fn evaluate_pool(cards: &[Card]) -> HandRank {
    // По убыванию: ранг, затем масть.
    let mut pool = cards.to_vec();
    pool.sort_by(|a, b| b.cmp(a));

    // Straight flush / royal / flush.
    if let Some(flush_cards) = flush_group(&pool) {
        if let Some(run) = detect_straight(mask_of(&flush_cards)) {
            let hand = cards_for_ranks(&flush_cards, &run);
            // Wheel начинается с пятёрки, так что туз сверху только у broadway.
            let category = if run[0] == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRank::new(category, run.to_vec(), hand);
        }

        let top: Vec<Card> = flush_cards.iter().take(5).copied().collect();
        let kickers = top.iter().map(|c| c.rank).collect();
        return HandRank::new(HandCategory::Flush, kickers, top);
    }

    let groups = rank_groups(&pool);

    // Four of a kind.
    if let Some(&(quad, _)) = groups.iter().find(|(_, n)| *n == 4) {
        let kickers = best_kickers(&pool, 1, &[quad]);
        let hand = collect_cards(&pool, &[(quad, 4)], &kickers);
        return HandRank::new(HandCategory::FourOfAKind, with_head(&[quad], &kickers), hand);
    }

    // Full house: ровно 3 одного ранга + ещё хотя бы 2 другого.
    // Вторая тройка тоже годится как пара.
    if let Some(&(trips, _)) = groups.iter().find(|(_, n)| *n == 3) {
        let pair = groups
            .iter()
            .filter(|(r, n)| *r != trips && *n >= 2)
            .map(|(r, _)| *r)
            .max();
        if let Some(pair) = pair {
            let hand = collect_cards(&pool, &[(trips, 3), (pair, 2)], &[]);
            return HandRank::new(HandCategory::FullHouse, vec![trips, pair], hand);
        }
    }

    // Straight.
    if let Some(run) = detect_straight(mask_of(&pool)) {
        let hand = cards_for_ranks(&pool, &run);
        return HandRank::new(HandCategory::Straight, run.to_vec(), hand);
    }

    // Three of a kind.
    if let Some(&(trips, _)) = groups.iter().find(|(_, n)| *n == 3) {
        let kickers = best_kickers(&pool, 2, &[trips]);
        let hand = collect_cards(&pool, &[(trips, 3)], &kickers);
        return HandRank::new(HandCategory::ThreeOfAKind, with_head(&[trips], &kickers), hand);
    }

    // Пары: groups отсортированы (кол-во desc, ранг desc) → первые пары самые старшие.
    let pairs: Vec<Rank> = groups
        .iter()
        .filter(|(_, n)| *n == 2)
        .map(|(r, _)| *r)
        .collect();

    // Two pair.
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let kickers = best_kickers(&pool, 1, &[high, low]);
        let hand = collect_cards(&pool, &[(high, 2), (low, 2)], &kickers);
        return HandRank::new(HandCategory::TwoPair, with_head(&[high, low], &kickers), hand);
    }

    // One pair.
    if let Some(&pair) = pairs.first() {
        let kickers = best_kickers(&pool, 3, &[pair]);
        let hand = collect_cards(&pool, &[(pair, 2)], &kickers);
        return HandRank::new(HandCategory::OnePair, with_head(&[pair], &kickers), hand);
    }

    // High card.
    let kickers = best_kickers(&pool, 5, &[]);
    let hand = collect_cards(&pool, &[], &kickers);
    HandRank::new(HandCategory::HighCard, kickers, hand)
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Самая большая одномастная группа из ≥5 карт (в порядке пула).
fn flush_group(pool: &[Card]) -> Option<Vec<Card>> {
    let mut by_suit: [Vec<Card>; 4] = Default::default();
    for card in pool {
        by_suit[suit_index(card.suit)].push(*card);
    }
    by_suit
        .into_iter()
        .filter(|g| g.len() >= 5)
        .max_by_key(|g| g.len())
}

fn mask_of(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |m, c| m | rank_to_bit(c.rank))
}

/// (ранг, количество), отсортировано по количеству desc, затем по рангу desc.
fn rank_groups(pool: &[Card]) -> Vec<(Rank, usize)> {
    let mut counts = [0usize; 15];
    for card in pool {
        counts[card.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(Rank, usize)> = Rank::ALL
        .iter()
        .filter(|r| counts[r.value() as usize] > 0)
        .map(|r| (*r, counts[r.value() as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    groups
}

/// Старшие различные ранги пула, кроме уже занятых комбинацией.
fn best_kickers(pool: &[Card], count: usize, exclude: &[Rank]) -> Vec<Rank> {
    let mut out: Vec<Rank> = Vec::with_capacity(count);
    for card in pool {
        if out.len() == count {
            break;
        }
        if !exclude.contains(&card.rank) && !out.contains(&card.rank) {
            out.push(card.rank);
        }
    }
    out
}

fn with_head(head: &[Rank], kickers: &[Rank]) -> Vec<Rank> {
    head.iter().chain(kickers.iter()).copied().collect()
}

/// Первая карта пула для каждого ранга (для стритов).
fn cards_for_ranks(pool: &[Card], ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .filter_map(|r| pool.iter().find(|c| c.rank == *r).copied())
        .collect()
}

/// Собрать конкретные карты: сначала наборы (каре/сет/пары), потом кикеры.
/// Дубли рангов разрешаются в пользу карты, которая в пуле раньше.
fn collect_cards(pool: &[Card], sets: &[(Rank, usize)], kickers: &[Rank]) -> Vec<Card> {
    let mut hand: Vec<Card> = Vec::with_capacity(5);

    for &(rank, needed) in sets {
        hand.extend(pool.iter().filter(|c| c.rank == rank).take(needed).copied());
    }

    for &rank in kickers {
        if let Some(card) = pool.iter().find(|c| c.rank == rank && !hand.contains(c)) {
            hand.push(*card);
        }
    }

    hand
}
