//! Side pot / settlement tests для poker-core.
//!
//! Здесь мы проверяем:
//! - формирование side pots по contributions (2, 3, 4 all-in);
//! - корректный состав eligible;
//! - мёртвые деньги сфолдивших;
//! - распределение: слои, сплит, нечётная фишка.

use std::collections::{BTreeMap, BTreeSet};

use poker_core::domain::card::parse_cards;
use poker_core::domain::chips::Chips;
use poker_core::domain::PlayerId;
use poker_core::engine::pot::PotLedger;
use poker_core::engine::side_pots::{compute_side_pots, settle_side_pots, SidePot};
use poker_core::engine::EngineError;
use poker_core::eval::{evaluate_pool, HandRank};

/// Утилита: собрать contributions из (player, amount).
fn make_contributions(pairs: &[(PlayerId, u64)]) -> BTreeMap<PlayerId, Chips> {
    pairs.iter().map(|(id, amount)| (*id, Chips(*amount))).collect()
}

fn folded(ids: &[PlayerId]) -> BTreeSet<PlayerId> {
    ids.iter().copied().collect()
}

/// Утилита: достать (amount, eligible) из SidePot.
fn pot_info(p: &SidePot) -> (u64, Vec<PlayerId>) {
    (p.amount.0, p.eligible.clone())
}

fn rank(cards: &str) -> HandRank {
    evaluate_pool(&parse_cards(cards).expect("валидные карты"))
}

//
// ====================== SIDE POTS: 2, 3, 4 ALL-IN ======================
//

/// 2 игрока, оба внесли по 100 фишек.
/// Ожидаем один общий пот 200, eligible = {1, 2}.
#[test]
fn side_pots_two_players_equal_all_in() {
    let pots = compute_side_pots(&make_contributions(&[(1, 100), (2, 100)]), &BTreeSet::new());

    assert_eq!(pots.len(), 1, "Должен быть один общий пот");
    assert_eq!(pot_info(&pots[0]), (200, vec![1, 2]));
}

/// 3 игрока: 100, 100, 50. Два слоя: 150 на всех, 100 на двоих.
#[test]
fn side_pots_three_players_short_all_in() {
    let pots = compute_side_pots(
        &make_contributions(&[(1, 100), (2, 100), (3, 50)]),
        &BTreeSet::new(),
    );

    assert_eq!(pots.len(), 2);
    assert_eq!(pot_info(&pots[0]), (150, vec![1, 2, 3]));
    assert_eq!(pot_info(&pots[1]), (100, vec![1, 2]));
}

/// 4 игрока, все в all-in на разные суммы: 25, 50, 75, 100.
#[test]
fn side_pots_four_different_all_ins() {
    let pots = compute_side_pots(
        &make_contributions(&[(1, 25), (2, 50), (3, 75), (4, 100)]),
        &BTreeSet::new(),
    );

    let info: Vec<(u64, Vec<PlayerId>)> = pots.iter().map(pot_info).collect();
    assert_eq!(
        info,
        vec![
            (100, vec![1, 2, 3, 4]),
            (75, vec![2, 3, 4]),
            (50, vec![3, 4]),
            (25, vec![4]),
        ]
    );
}

/// Сфолдивший вложил 30 и вышел: его фишки попадают в первый слой,
/// но выиграть он ничего не может.
#[test]
fn folded_contribution_is_dead_money() {
    let pots = compute_side_pots(
        &make_contributions(&[(1, 100), (2, 100), (3, 30)]),
        &folded(&[3]),
    );

    assert_eq!(pots.len(), 1);
    assert_eq!(pot_info(&pots[0]), (230, vec![1, 2]));
}

/// Игроки с нулевым вкладом не создают "мусорных" слоёв.
#[test]
fn zero_contributions_are_ignored() {
    let pots = compute_side_pots(
        &make_contributions(&[(1, 0), (2, 40), (3, 40)]),
        &BTreeSet::new(),
    );
    assert_eq!(pots.len(), 1);
    assert_eq!(pot_info(&pots[0]), (80, vec![2, 3]));

    assert!(compute_side_pots(&BTreeMap::new(), &BTreeSet::new()).is_empty());
}

//
// ====================== SETTLEMENT ======================
//

/// {100, 100, 50}, у короткого стека лучшая рука:
/// он забирает только первый слой (150), второй (100) – лучший из двоих.
#[test]
fn short_stack_with_best_hand_wins_only_main_pot() {
    let mut ledger = PotLedger::new();
    ledger.start_hand([1, 2, 3]);
    ledger.record_contribution(1, Chips(100));
    ledger.record_contribution(2, Chips(100));
    ledger.record_contribution(3, Chips(50));

    let mut showdown = BTreeMap::new();
    showdown.insert(1, rank("Kc Kd 7h 4s 2c")); // пара королей
    showdown.insert(2, rank("Qc Qd 7s 4h 2d")); // пара дам
    showdown.insert(3, rank("Ac Ad 7c 4d 2h")); // пара тузов

    let won = ledger.settle(&showdown, &BTreeSet::new(), &[1, 2, 3]).unwrap();

    assert_eq!(won.get(&3), Some(&Chips(150)));
    assert_eq!(won.get(&1), Some(&Chips(100)));
    assert_eq!(won.get(&2), None, "проигравший отсутствует в результате");
    assert_eq!(won.values().copied().sum::<Chips>(), ledger.total());
}

/// Сплит нечётного банка: лишняя фишка первому слева от кнопки.
#[test]
fn split_pot_odd_chip_follows_seat_order() {
    let pots = vec![SidePot {
        amount: Chips(101),
        eligible: vec![1, 2, 3],
    }];

    let mut showdown = BTreeMap::new();
    showdown.insert(1, rank("Ah Kh 9c 5d 3s"));
    showdown.insert(2, rank("As Ks 9d 5c 3h"));
    showdown.insert(3, rank("2c 2d 9h 5s 3c"));

    // Пара двоек сильнее старшей карты: 3 забирает всё.
    let won = settle_side_pots(&pots, &showdown, &[1, 2, 3]).unwrap();
    assert_eq!(won.get(&3), Some(&Chips(101)));

    // Без игрока 3 – сплит между 1 и 2, порядок "слева от кнопки" 2, 1.
    showdown.remove(&3);
    let won = settle_side_pots(&pots, &showdown, &[2, 3, 1]).unwrap();
    assert_eq!(won.get(&2), Some(&Chips(51)));
    assert_eq!(won.get(&1), Some(&Chips(50)));
}

/// Слой, в котором нет ни одного участника шоудауна, – это баг, а не сплит.
#[test]
fn layer_without_showdown_contender_is_reported() {
    let pots = vec![
        SidePot {
            amount: Chips(60),
            eligible: vec![1, 2],
        },
        SidePot {
            amount: Chips(40),
            eligible: vec![2],
        },
    ];
    let mut showdown = BTreeMap::new();
    showdown.insert(1, rank("Ah Kh 9c 5d 3s"));

    let res = settle_side_pots(&pots, &showdown, &[1, 2]);
    assert!(matches!(res, Err(EngineError::NoEligibleWinner { pot_index: 1 })));
}
