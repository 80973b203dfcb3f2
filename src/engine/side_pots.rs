use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, PlayerId};
use crate::engine::errors::EngineError;
use crate::eval::HandRank;

/// Сайд-пот: часть банка, в которую участвуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Кто может выиграть этот слой (не сфолдившие вкладчики), по id.
    pub eligible: Vec<PlayerId>,
}

/// Посчитать сайд-поты из сумм, которые внесли игроки.
///
/// Вход: contributions[player] = сколько суммарно фишек поставил игрок за раздачу.
/// Выход: слои "от младших к старшим" – первый покрывает самый короткий стек.
///
/// Уровень слоя – наименьший остаток среди не сфолдивших. Если у них
/// ничего не осталось, добираем мёртвые деньги сфолдивших по наибольшему
/// остатку. Слой без претендентов вливается в предыдущий.
pub fn compute_side_pots(
    contributions: &BTreeMap<PlayerId, Chips>,
    folded: &BTreeSet<PlayerId>,
) -> Vec<SidePot> {
    let mut remaining: BTreeMap<PlayerId, Chips> = contributions
        .iter()
        .filter(|(_, c)| !c.is_zero())
        .map(|(id, c)| (*id, *c))
        .collect();

    let mut pots: Vec<SidePot> = Vec::new();

    while !remaining.is_empty() {
        let live_floor = remaining
            .iter()
            .filter(|(id, _)| !folded.contains(id))
            .map(|(_, c)| *c)
            .min();

        let floor = match live_floor {
            Some(floor) => floor,
            None => match remaining.values().copied().max() {
                Some(floor) => floor,
                None => break,
            },
        };

        let mut amount = Chips::ZERO;
        let mut eligible = Vec::new();
        for (id, left) in remaining.iter_mut() {
            let part = (*left).min(floor);
            amount += part;
            *left = left.saturating_sub(part);
            if !folded.contains(id) && !part.is_zero() {
                eligible.push(*id);
            }
        }
        remaining.retain(|_, c| !c.is_zero());

        match pots.last_mut() {
            Some(prev) if eligible.is_empty() => prev.amount += amount,
            _ => pots.push(SidePot { amount, eligible }),
        }
    }

    pots
}

/// Распределить слои между участниками шоудауна.
///
/// Внутри слоя побеждает максимальный HandRank среди тех, кто и в шоудауне,
/// и в списке претендентов. Ничья – делим поровну; остаток целиком уходит
/// первому победителю в порядке `odd_chip_order`. Игроки с нулевым
/// выигрышем в результат не попадают.
pub fn settle_side_pots(
    pots: &[SidePot],
    showdown: &BTreeMap<PlayerId, HandRank>,
    odd_chip_order: &[PlayerId],
) -> Result<BTreeMap<PlayerId, Chips>, EngineError> {
    let mut winnings: BTreeMap<PlayerId, Chips> = BTreeMap::new();

    for (pot_index, pot) in pots.iter().enumerate() {
        if pot.amount.is_zero() {
            continue;
        }

        let contenders: Vec<(PlayerId, &HandRank)> = pot
            .eligible
            .iter()
            .filter_map(|id| showdown.get(id).map(|rank| (*id, rank)))
            .collect();

        let best = contenders
            .iter()
            .map(|(_, rank)| *rank)
            .max()
            .ok_or(EngineError::NoEligibleWinner { pot_index })?;

        let mut winners: Vec<PlayerId> = contenders
            .iter()
            .filter(|(_, rank)| *rank == best)
            .map(|(id, _)| *id)
            .collect();

        // Победители в порядке "слева от кнопки"; кого нет в порядке – в конец.
        winners.sort_by_key(|id| {
            odd_chip_order
                .iter()
                .position(|o| o == id)
                .unwrap_or(usize::MAX)
        });

        let count = winners.len() as u64;
        let share = Chips(pot.amount.0 / count);
        let remainder = Chips(pot.amount.0 % count);

        for (i, id) in winners.iter().enumerate() {
            let mut won = share;
            if i == 0 {
                won += remainder;
            }
            if !won.is_zero() {
                *winnings.entry(*id).or_insert(Chips::ZERO) += won;
            }
        }
    }

    debug_assert_eq!(
        winnings.values().sum::<Chips>(),
        pots.iter().map(|p| p.amount).sum::<Chips>(),
        "распределение должно сохранять фишки"
    );

    Ok(winnings)
}
