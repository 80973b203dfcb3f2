//! Сценарные тесты машины раздачи через публичный API `GameEngine`.
//!
//! Колода не тасуется (`NoShuffle`), решения – по скрипту, так что каждая
//! раздача полностью воспроизводима:
//! верх колоды = As, Ks, Qs, Js, Ts, 9s, ... , 2s, Ah, Kh, ...

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use poker_core::domain::card::{parse_cards, Card};
use poker_core::domain::chips::Chips;
use poker_core::domain::player::Player;
use poker_core::domain::hand::HandRecord;
use poker_core::domain::{PlayerId, Stakes, Table};
use poker_core::engine::{
    ActionType, DecisionError, DecisionProvider, FixedLimit, ForcedBet, ForcedBetKind, GameEngine,
    GameObserver, HandEventKind, PlayerAction, PlayerActionKind, PotLimit, RandomSource,
    RoundSnapshot,
};
use poker_core::infra::{GameStateStore, InMemoryStore, StoreError};
use poker_core::variant::{FiveCardDraw, GameVariant, TexasHoldem};

/// RNG без перемешивания: порядок колоды известен заранее.
struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

type Asked = Rc<RefCell<BTreeMap<PlayerId, usize>>>;

/// Скриптованный провайдер: очередь ответов на игрока, дальше – чек/колл.
#[derive(Default)]
struct Script {
    actions: BTreeMap<PlayerId, VecDeque<Result<PlayerActionKind, DecisionError>>>,
    discards: BTreeMap<PlayerId, Vec<Card>>,
    asked: Asked,
}

impl Script {
    fn act(mut self, player: PlayerId, action: PlayerActionKind) -> Self {
        self.actions.entry(player).or_default().push_back(Ok(action));
        self
    }

    fn fail(mut self, player: PlayerId, err: DecisionError) -> Self {
        self.actions.entry(player).or_default().push_back(Err(err));
        self
    }

    fn discard(mut self, player: PlayerId, cards: &str) -> Self {
        self.discards
            .insert(player, parse_cards(cards).expect("валидные карты"));
        self
    }
}

impl DecisionProvider for Script {
    fn request_action(
        &mut self,
        player: &Player,
        _snapshot: &RoundSnapshot,
        legal: &[ActionType],
    ) -> Result<PlayerActionKind, DecisionError> {
        *self.asked.borrow_mut().entry(player.id).or_insert(0) += 1;
        if let Some(next) = self.actions.get_mut(&player.id).and_then(|q| q.pop_front()) {
            return next;
        }
        if legal.contains(&ActionType::Check) {
            Ok(PlayerActionKind::Check)
        } else {
            Ok(PlayerActionKind::Call)
        }
    }

    fn request_discards(
        &mut self,
        player: &Player,
        _snapshot: &RoundSnapshot,
    ) -> Result<Vec<Card>, DecisionError> {
        Ok(self.discards.remove(&player.id).unwrap_or_default())
    }
}

/// Наблюдатель, который просто всё записывает.
#[derive(Default)]
struct Recorder {
    phases: Vec<String>,
    actions: Vec<PlayerAction>,
    timeouts: Vec<PlayerId>,
    hands_ended: usize,
    session_winner: Option<Option<PlayerId>>,
}

impl GameObserver for Recorder {
    fn on_phase_started(&mut self, phase: &str) {
        self.phases.push(phase.to_string());
    }

    fn on_player_action(&mut self, action: &PlayerAction) {
        self.actions.push(action.clone());
    }

    fn on_hand_ended(&mut self, _winnings: &BTreeMap<PlayerId, Chips>) {
        self.hands_ended += 1;
    }

    fn on_player_timeout(&mut self, player: PlayerId) {
        self.timeouts.push(player);
    }

    fn on_session_ended(&mut self, winner: Option<&Player>) {
        self.session_winner = Some(winner.map(|p| p.id));
    }
}

/// Утилита: стол с игроками id = 1..=n, кнопка на месте 0.
fn table(stacks: &[u64]) -> Table {
    Table::new(
        stacks
            .iter()
            .enumerate()
            .map(|(i, s)| Player::new(i as u64 + 1, format!("p{}", i + 1), Chips(*s)))
            .collect(),
    )
}

fn engine_with(
    table: Table,
    variant: Box<dyn GameVariant>,
    script: Script,
) -> (GameEngine<NoShuffle>, Rc<RefCell<Recorder>>) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let mut engine = GameEngine::new(table, variant, Box::new(script), NoShuffle);
    engine.register_observer(Box::new(recorder.clone()));
    (engine, recorder)
}

fn holdem(stacks: &[u64], script: Script) -> (GameEngine<NoShuffle>, Rc<RefCell<Recorder>>) {
    engine_with(
        table(stacks),
        Box::new(TexasHoldem::no_limit(Stakes::blinds(5, 10))),
        script,
    )
}

fn stack(engine: &GameEngine<NoShuffle>, id: PlayerId) -> Chips {
    engine.table().player(id).map(|p| p.stack).unwrap_or(Chips::ZERO)
}

/// Утилита: обязательные ставки раздачи из истории.
fn forced_bets(record: &HandRecord) -> Vec<ForcedBet> {
    record
        .history
        .events
        .iter()
        .find_map(|e| match &e.kind {
            HandEventKind::ForcedBetsPosted { bets } => Some(bets.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn blind_payer(record: &HandRecord, kind: ForcedBetKind) -> Option<PlayerId> {
    forced_bets(record)
        .iter()
        .find(|b| b.kind == kind)
        .map(|b| b.player_id)
}

/// Утилита: (игрок, действие, добавлено фишек) в порядке ходов.
fn acted(recorder: &Rc<RefCell<Recorder>>) -> Vec<(PlayerId, ActionType, Chips)> {
    recorder
        .borrow()
        .actions
        .iter()
        .map(|a| (a.player_id, a.action, a.amount))
        .collect()
}

//
// ====================== БЛАЙНДЫ / ПОЗИЦИИ ======================
//

/// Хедз-ап: кнопка ставит SB и ходит первой на префлопе.
#[test]
fn heads_up_button_posts_small_blind_and_acts_first() {
    let (mut engine, recorder) = holdem(&[1_000, 1_000], Script::default());
    let record = engine.play_hand().unwrap();

    let forced = record
        .history
        .events
        .iter()
        .find_map(|e| match &e.kind {
            HandEventKind::ForcedBetsPosted { bets } => Some(bets.clone()),
            _ => None,
        })
        .expect("блайнды должны быть в истории");

    let sb = forced.iter().find(|b| b.kind == ForcedBetKind::SmallBlind).unwrap();
    let bb = forced.iter().find(|b| b.kind == ForcedBetKind::BigBlind).unwrap();
    assert_eq!((sb.player_id, sb.amount), (1, Chips(5)), "кнопка = SB");
    assert_eq!((bb.player_id, bb.amount), (2, Chips(10)));

    let first = recorder.borrow().actions[0].clone();
    assert_eq!(first.player_id, 1, "на префлопе хедз-ап первой ходит кнопка");
    assert_eq!(first.action, ActionType::Call);
}

/// Игрок в sit-out не получает карт и не платит блайнды.
#[test]
fn sitting_out_player_is_skipped() {
    let mut t = table(&[1_000, 1_000, 1_000]);
    t.seats[2].sitting_out = true;
    let (mut engine, _recorder) = engine_with(
        t,
        Box::new(TexasHoldem::no_limit(Stakes::blinds(5, 10))),
        Script::default(),
    );

    let record = engine.play_hand().unwrap();

    assert!(engine.table().player(3).unwrap().hole_cards.is_empty());
    assert_eq!(stack(&engine, 3), Chips(1_000));
    assert!(record.results.iter().all(|r| r.player_id != 3));
    assert_eq!(record.total_pot, Chips(20));
}

/// Кнопка в sit-out: SB всё равно button+1, BB – button+2,
/// первым на префлопе ходит следующий после BB.
#[test]
fn blinds_follow_button_that_sits_out() {
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000, 1_000], Script::default());
    engine.set_sitting_out(1, true).unwrap();

    let record = engine.play_hand().unwrap();

    assert_eq!(engine.table().button, 0);
    assert_eq!(blind_payer(&record, ForcedBetKind::SmallBlind), Some(2));
    assert_eq!(blind_payer(&record, ForcedBetKind::BigBlind), Some(3));
    assert_eq!(recorder.borrow().actions[0].player_id, 4);
    assert_eq!(stack(&engine, 1), Chips(1_000));
    assert_eq!(record.total_pot, Chips(30));
}

//
// ====================== ЦИКЛ СТАВОК ======================
//

/// 4 игрока, UTG идёт all-in: улица закрывается после коллов остальных,
/// all-in игрока больше не спрашивают.
#[test]
fn betting_loop_closes_without_asking_all_in_player_again() {
    let script = Script::default().act(4, PlayerActionKind::AllIn);
    let asked = script.asked.clone();
    let (mut engine, _recorder) = holdem(&[1_000, 1_000, 1_000, 100], script);
    let before = engine.chips_in_play();

    let record = engine.play_hand().unwrap();

    assert_eq!(asked.borrow()[&4], 1, "all-in игрок ходит ровно один раз");
    assert_eq!(record.total_pot, Chips(400));
    assert!(record.went_to_showdown);
    assert_eq!(engine.chips_in_play(), before);
}

/// Рейз меньше минимального → неявный fold, раздача продолжается.
#[test]
fn illegal_raise_becomes_fold() {
    let script = Script::default().act(1, PlayerActionKind::Raise(Chips(15)));
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], script);

    let record = engine.play_hand().unwrap();

    assert!(engine.table().player(1).unwrap().folded);
    let first = recorder.borrow().actions[0].clone();
    assert_eq!((first.player_id, first.action), (1, ActionType::Fold));
    assert_eq!(record.total_pot, Chips(20));
    assert_eq!(stack(&engine, 1), Chips(1_000));
}

/// Действие вне легального набора (чек против ставки) → fold.
#[test]
fn action_outside_legal_set_becomes_fold() {
    let script = Script::default().act(1, PlayerActionKind::Check);
    let (mut engine, _recorder) = holdem(&[1_000, 1_000, 1_000], script);

    engine.play_hand().unwrap();
    assert!(engine.table().player(1).unwrap().folded);
}

/// Таймаут провайдера = fold + событие наблюдателю.
#[test]
fn timeout_is_reported_and_folds() {
    let script = Script::default().fail(1, DecisionError::TimedOut);
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], script);

    engine.play_hand().unwrap();

    assert_eq!(recorder.borrow().timeouts, vec![1]);
    assert!(engine.table().player(1).unwrap().folded);
}

/// Все сфолдили до BB: он забирает блайнды без вскрытия.
#[test]
fn everyone_folds_to_big_blind_walk() {
    let script = Script::default()
        .act(1, PlayerActionKind::Fold)
        .act(2, PlayerActionKind::Fold);
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], script);

    let record = engine.play_hand().unwrap();

    assert!(!record.went_to_showdown);
    assert_eq!(record.won_by(3), Chips(15));
    assert_eq!(stack(&engine, 3), Chips(1_005));
    assert_eq!(stack(&engine, 2), Chips(995));
    assert_eq!(recorder.borrow().phases, vec!["Pre-Flop".to_string()]);
    assert!(record.board.is_empty(), "после walk борд не раздаётся");
}

/// Повышение BB переоткрывает торговлю: уже походившие отвечают снова.
/// BB уже уравнял ставку, поэтому для него это `Bet`, а не `Raise`.
#[test]
fn big_blind_option_reopens_action_for_previous_callers() {
    let script = Script::default().act(3, PlayerActionKind::Bet(Chips(40)));
    let asked = script.asked.clone();
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], script);

    let record = engine.play_hand().unwrap();

    // Префлоп: 1 колл, 2 колл, 3 повышает до 40, 1 колл, 2 колл.
    let preflop: Vec<(PlayerId, ActionType)> = recorder
        .borrow()
        .actions
        .iter()
        .take(5)
        .map(|a| (a.player_id, a.action))
        .collect();
    assert_eq!(
        preflop,
        vec![
            (1, ActionType::Call),
            (2, ActionType::Call),
            (3, ActionType::Bet),
            (1, ActionType::Call),
            (2, ActionType::Call),
        ]
    );
    assert_eq!(record.total_pot, Chips(120));
    assert!(asked.borrow()[&1] >= 2);
}

/// Рейз выше стека урезается до all-in, а не превращается в fold.
#[test]
fn raise_above_stack_goes_all_in() {
    let script = Script::default().act(1, PlayerActionKind::Raise(Chips(5_000)));
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], script);
    let before = engine.chips_in_play();

    engine.play_hand().unwrap();

    assert_eq!(acted(&recorder)[0], (1, ActionType::AllIn, Chips(1_000)));
    assert!(!engine.table().player(1).unwrap().folded);
    assert_eq!(engine.chips_in_play(), before);
}

/// Стол для проверки короткого all-in: кнопка (id1) с 55 фишками,
/// UTG (id4) открывает рейзом до 40 (шаг 30).
fn short_all_in_hand(sb_raise_to: u64) -> (GameEngine<NoShuffle>, Rc<RefCell<Recorder>>) {
    let script = Script::default()
        .act(4, PlayerActionKind::Raise(Chips(40)))
        .act(1, PlayerActionKind::AllIn)
        .act(2, PlayerActionKind::Raise(Chips(sb_raise_to)));
    holdem(&[55, 1_000, 1_000, 1_000], script)
}

/// Короткий all-in (55 против 40, прибавка 15 < 30) поднимает ставку,
/// но не меняет шаг рейза: следующий рейз минимум до 55 + 30 = 85.
#[test]
fn short_all_in_keeps_previous_min_raise() {
    let (mut engine, recorder) = short_all_in_hand(85);
    engine.play_hand().unwrap();

    let actions = acted(&recorder);
    assert_eq!(
        actions[..3],
        [
            (4, ActionType::Raise, Chips(40)),
            (1, ActionType::AllIn, Chips(55)),
            (2, ActionType::Raise, Chips(80)),
        ]
    );
    assert!(!engine.table().player(2).unwrap().folded);
}

#[test]
fn raise_one_chip_below_min_after_short_all_in_folds() {
    let (mut engine, recorder) = short_all_in_hand(84);
    engine.play_hand().unwrap();

    assert_eq!(acted(&recorder)[2], (2, ActionType::Fold, Chips::ZERO));
    assert!(engine.table().player(2).unwrap().folded);
}

/// Pot-Limit: рейз максимум до текущая ставка + банк + колл.
#[test]
fn pot_limit_caps_raises_at_pot_size() {
    // Префлоп 5/10: банк 15, у UTG колл 10 → максимум 10 + 15 + 10 = 35.
    // Дальше у SB: банк 50, колл 30 → максимум 35 + 50 + 30 = 115.
    // BB all-in: колл 25 → урезается до 35 + 50 + 25 = 110.
    let script = Script::default()
        .act(1, PlayerActionKind::Raise(Chips(35)))
        .act(2, PlayerActionKind::Raise(Chips(116)))
        .act(3, PlayerActionKind::AllIn);
    let (mut engine, recorder) = engine_with(
        table(&[1_000, 1_000, 1_000]),
        Box::new(TexasHoldem::with_structure(
            Stakes::blinds(5, 10),
            Box::new(PotLimit::new(Chips(10))),
        )),
        script,
    );

    engine.play_hand().unwrap();

    assert_eq!(
        acted(&recorder)[..4],
        [
            (1, ActionType::Raise, Chips(35)),
            (2, ActionType::Fold, Chips::ZERO),
            (3, ActionType::Raise, Chips(100)),
            (1, ActionType::Call, Chips(75)),
        ]
    );
    assert_eq!(stack(&engine, 3) + stack(&engine, 1) + stack(&engine, 2), Chips(3_000));
}

/// Fixed-Limit: шаг 10 на префлопе и не больше двух повышений за улицу.
#[test]
fn fixed_limit_stops_raising_at_cap() {
    let script = Script::default()
        .act(1, PlayerActionKind::Raise(Chips(20)))
        .act(2, PlayerActionKind::Raise(Chips(30)))
        .act(3, PlayerActionKind::AllIn)
        .act(1, PlayerActionKind::Raise(Chips(40)));
    let (mut engine, recorder) = engine_with(
        table(&[1_000, 1_000, 1_000]),
        Box::new(TexasHoldem::with_structure(
            Stakes::blinds(5, 10),
            Box::new(FixedLimit::new(Chips(10), Chips(20), 2)),
        )),
        script,
    );

    let record = engine.play_hand().unwrap();

    assert_eq!(
        acted(&recorder)[..4],
        [
            (1, ActionType::Raise, Chips(20)),
            (2, ActionType::Raise, Chips(25)),
            // all-in упирается в лимит повышений и становится коллом
            (3, ActionType::Call, Chips(20)),
            (1, ActionType::Fold, Chips::ZERO),
        ]
    );
    assert!(record.went_to_showdown);
    assert_eq!(record.won_by(1), Chips::ZERO);
}

/// Один игрок может ходить, но должен доплатить до all-in блайнда:
/// раунд всё равно идёт, и его спрашивают ровно один раз.
#[test]
fn lone_actor_facing_all_in_blind_still_acts() {
    let script = Script::default();
    let asked = script.asked.clone();
    let (mut engine, recorder) = holdem(&[1_000, 10], script);

    engine.play_hand().unwrap();

    assert_eq!(acted(&recorder), vec![(1, ActionType::Call, Chips(5))]);
    assert_eq!(asked.borrow().get(&2), None);
}

/// Никто не должен доплачивать и ходить может один: раунд пропускается.
#[test]
fn betting_round_is_skipped_when_nobody_can_respond() {
    let script = Script::default();
    let asked = script.asked.clone();
    // SB (кнопка) ставит весь стек 5, BB доплачивать нечего.
    let (mut engine, recorder) = holdem(&[5, 1_000], script);

    engine.play_hand().unwrap();

    assert!(acted(&recorder).is_empty());
    assert!(asked.borrow().is_empty());
}

//
// ====================== ДРО ======================
//

/// Обмен: некорректные карты игнорируются, остальные меняются один к одному.
#[test]
fn draw_phase_replaces_discarded_cards() {
    // Раздача по одной слева от кнопки: id2 получает As Qs Ts 8s 6s,
    // id1 – Ks Js 9s 7s 5s. Следующие в колоде: 4s, 3s.
    let script = Script::default().discard(1, "Ks Js Ah");
    let (mut engine, recorder) = engine_with(
        table(&[500, 500]),
        Box::new(FiveCardDraw::no_limit(Chips(10))),
        script,
    );
    let before = engine.chips_in_play();

    let record = engine.play_hand().unwrap();

    let hand = &engine.table().player(1).unwrap().hole_cards;
    assert_eq!(hand.len(), 5);
    assert_eq!(hand, &parse_cards("9s 7s 5s 4s 3s").unwrap());

    let drawn = record
        .history
        .events
        .iter()
        .find_map(|e| match &e.kind {
            HandEventKind::CardsDrawn { player_id, discarded, .. } => Some((*player_id, discarded.len())),
            _ => None,
        });
    assert_eq!(drawn, Some((1, 2)));

    assert_eq!(
        recorder.borrow().phases,
        vec!["Initial Deal", "Pre-Draw Betting", "The Draw", "Post-Draw Betting"]
    );
    assert_eq!(record.total_pot, Chips(20));
    assert_eq!(engine.chips_in_play(), before);
}

/// Игрок, ушедший в all-in на анте, всё равно меняет карты.
#[test]
fn all_in_player_still_draws() {
    // id2 (слева от кнопки) получает As Qs Ts 8s 6s и сбрасывает туза;
    // следующая карта колоды – 4s.
    let script = Script::default().discard(2, "As");
    let (mut engine, _recorder) = engine_with(
        table(&[500, 10]),
        Box::new(FiveCardDraw::no_limit(Chips(10))),
        script,
    );

    let record = engine.play_hand().unwrap();

    let drawn: Vec<_> = record
        .history
        .events
        .iter()
        .filter_map(|e| match &e.kind {
            HandEventKind::CardsDrawn {
                player_id,
                discarded,
                received,
            } => Some((*player_id, discarded.clone(), received.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        drawn,
        vec![(2, parse_cards("As").unwrap(), parse_cards("4s").unwrap())]
    );
    assert_eq!(
        engine.table().player(2).unwrap().hole_cards,
        parse_cards("Qs Ts 8s 6s 4s").unwrap()
    );
    assert_eq!(record.total_pot, Chips(20));
    assert_eq!(engine.chips_in_play(), Chips(510));
}

//
// ====================== СЕССИЯ ======================
//

/// Короткий BB в all-in, кнопка коллирует и выигрывает: сессия окончена.
#[test]
fn session_ends_when_one_player_has_all_chips() {
    let (mut engine, recorder) = holdem(&[1_000, 10], Script::default());

    let outcome = engine.run_session(None).unwrap();

    assert_eq!(outcome.hands_played, 1);
    assert_eq!(outcome.winner, Some(1));
    assert_eq!(stack(&engine, 1), Chips(1_010));
    assert_eq!(recorder.borrow().session_winner, Some(Some(1)));
}

/// Лимит раздач: победителя нет, кнопка двигается.
#[test]
fn session_stops_at_hand_limit() {
    let (mut engine, recorder) = holdem(&[1_000, 1_000, 1_000], Script::default());
    let before = engine.chips_in_play();

    let outcome = engine.run_session(Some(3)).unwrap();

    assert_eq!(outcome.hands_played, 3);
    assert_eq!(outcome.winner, None);
    assert_eq!(recorder.borrow().hands_ended, 3);
    assert_eq!(recorder.borrow().session_winner, Some(None));
    assert_eq!(engine.table().button, 0, "3 раздачи на 3 местах – кнопка сделала круг");
    assert_eq!(engine.chips_in_play(), before);
}

//
// ====================== ХРАНИЛИЩЕ ======================
//

/// Общий доступ к in-memory хранилищу из теста.
struct SharedStore(Rc<RefCell<InMemoryStore>>);

impl GameStateStore for SharedStore {
    fn save_player_chips(&mut self, players: &[Player]) -> Result<(), StoreError> {
        self.0.borrow_mut().save_player_chips(players)
    }

    fn load_player_chips(&self) -> Result<BTreeMap<String, Chips>, StoreError> {
        self.0.borrow().load_player_chips()
    }

    fn append_hand(&mut self, record: &HandRecord) -> Result<(), StoreError> {
        self.0.borrow_mut().append_hand(record)
    }
}

/// Хранилище, которое всегда падает.
struct BrokenStore;

impl GameStateStore for BrokenStore {
    fn save_player_chips(&mut self, _players: &[Player]) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "диск отвалился").into())
    }

    fn load_player_chips(&self) -> Result<BTreeMap<String, Chips>, StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "диск отвалился").into())
    }

    fn append_hand(&mut self, _record: &HandRecord) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "диск отвалился").into())
    }
}

#[test]
fn completed_hands_and_stacks_are_persisted() {
    let shared = Rc::new(RefCell::new(InMemoryStore::new()));
    let (engine, _recorder) = holdem(&[1_000, 1_000, 1_000], Script::default());
    let mut engine = engine.with_store(Box::new(SharedStore(shared.clone())));

    engine.run_session(Some(2)).unwrap();

    let store = shared.borrow();
    assert_eq!(store.hands.len(), 2);
    assert!(store.hands[0].hand_id < store.hands[1].hand_id);
    let saved: Chips = store.chips.values().copied().sum();
    assert_eq!(saved, Chips(3_000));
    assert_eq!(store.chips["p1"], stack(&engine, 1));
}

#[test]
fn broken_store_does_not_affect_play() {
    let (engine, _recorder) = holdem(&[1_000, 1_000], Script::default());
    let mut engine = engine.with_store(Box::new(BrokenStore));

    let outcome = engine.run_session(Some(3)).unwrap();

    assert_eq!(outcome.hands_played, 3);
    assert_eq!(engine.chips_in_play(), Chips(2_000));
    assert_eq!(engine.restore_stacks(), 0);
}

#[test]
fn stacks_are_restored_by_name() {
    let shared = Rc::new(RefCell::new(InMemoryStore::new()));
    shared.borrow_mut().chips.insert("p2".to_string(), Chips(250));
    shared.borrow_mut().chips.insert("stranger".to_string(), Chips(9_999));

    let (engine, _recorder) = holdem(&[1_000, 1_000], Script::default());
    let mut engine = engine.with_store(Box::new(SharedStore(shared)));

    assert_eq!(engine.restore_stacks(), 1);
    assert_eq!(stack(&engine, 1), Chips(1_000));
    assert_eq!(stack(&engine, 2), Chips(250));
}
