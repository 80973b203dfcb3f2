//! Оркестратор раздачи: машина состояний
//! `HandInit → ForcedBets → Phase* → Showdown | Walk → HandComplete`.
//!
//! Один стол, одна раздача, один ходящий игрок за раз. Единственная точка
//! ожидания – вызов провайдера решений.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandRecord, PlayerHandResult};
use crate::domain::player::Player;
use crate::domain::{HandId, PlayerId, SeatIndex, Table};
use crate::engine::actions::{ActionType, PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::context::{RoundContext, RoundSnapshot};
use crate::engine::decision::{DecisionError, DecisionProvider};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{ForcedBetKind, HandEventKind, HandHistory};
use crate::engine::observer::GameObserver;
use crate::engine::positions::{advance_button, next_eligible_actor, odd_chip_order, seats_left_of_button};
use crate::engine::pot::PotLedger;
use crate::engine::structure::ProposedBet;
use crate::engine::validation::{legal_actions, resolve_action};
use crate::engine::RandomSource;
use crate::eval::HandRank;
use crate::infra::ids::IdGenerator;
use crate::infra::persistence::GameStateStore;
use crate::variant::GameVariant;

/// Состояние машины раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandState {
    HandInit,
    ForcedBets,
    /// Индекс фазы в списке варианта.
    Phase(usize),
    Showdown,
    Walk,
    HandComplete,
}

/// Итог сессии.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub hands_played: u32,
    /// Единственный игрок со стеком. None – сессию остановил лимит раздач.
    pub winner: Option<PlayerId>,
}

fn notify<F>(observers: &mut [Box<dyn GameObserver>], mut f: F)
where
    F: FnMut(&mut dyn GameObserver),
{
    for observer in observers.iter_mut() {
        f(observer.as_mut());
    }
}

pub struct GameEngine<R: RandomSource> {
    table: Table,
    variant: Box<dyn GameVariant>,
    decisions: Box<dyn DecisionProvider>,
    store: Option<Box<dyn GameStateStore>>,
    observers: Vec<Box<dyn GameObserver>>,
    rng: R,
    ids: IdGenerator,

    state: HandState,
    hand_id: HandId,
    deck: Deck,
    ledger: PotLedger,
    context: RoundContext,
    betting: BettingState,
    history: HandHistory,
    /// Место BB в текущей раздаче (если вариант блайндовый).
    big_blind: Option<SeatIndex>,
    /// Первый раунд ставок ещё не начинался: блайнды остаются в улице.
    first_betting_pending: bool,
    showdown: BTreeMap<PlayerId, HandRank>,
    winnings: BTreeMap<PlayerId, Chips>,
}

impl<R: RandomSource> GameEngine<R> {
    pub fn new(
        table: Table,
        variant: Box<dyn GameVariant>,
        decisions: Box<dyn DecisionProvider>,
        mut rng: R,
    ) -> Self {
        let deck = Deck::shuffled(&mut rng);
        Self {
            table,
            variant,
            decisions,
            store: None,
            observers: Vec::new(),
            rng,
            ids: IdGenerator::new(),
            state: HandState::HandComplete,
            hand_id: 0,
            deck,
            ledger: PotLedger::new(),
            context: RoundContext::new(),
            betting: BettingState::new(),
            history: HandHistory::new(),
            big_blind: None,
            first_betting_pending: true,
            showdown: BTreeMap::new(),
            winnings: BTreeMap::new(),
        }
    }

    /// Подключить хранилище стеков и истории.
    pub fn with_store(mut self, store: Box<dyn GameStateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Подписчики вызываются в порядке регистрации.
    pub fn register_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn variant(&self) -> &dyn GameVariant {
        self.variant.as_ref()
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    pub fn context(&self) -> &RoundContext {
        &self.context
    }

    /// История последней (или текущей) раздачи.
    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    /// Стеки всех игроков плюс живой банк. Постоянно в течение сессии.
    pub fn chips_in_play(&self) -> Chips {
        self.table.seats.iter().map(|p| p.stack).sum::<Chips>() + self.ledger.total()
    }

    /// Посадить игрока в sit-out (или вернуть). Только между раздачами.
    pub fn set_sitting_out(&mut self, player: PlayerId, sitting_out: bool) -> Result<(), EngineError> {
        let p = self
            .table
            .player_mut(player)
            .ok_or(EngineError::PlayerNotSeated(player))?;
        p.sitting_out = sitting_out;
        debug!("Игрок {} ({}): sitting_out = {}", p.id, p.name, sitting_out);
        Ok(())
    }

    /// Восстановить стеки из хранилища (по именам). Возвращает, скольким
    /// игрокам стек обновлён. Сбой хранилища – 0 и предупреждение в лог.
    pub fn restore_stacks(&mut self) -> usize {
        let Some(store) = self.store.as_ref() else {
            return 0;
        };
        let saved = match store.load_player_chips() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Не удалось загрузить стеки: {e}");
                return 0;
            }
        };

        let mut restored = 0;
        for p in self.table.seats.iter_mut() {
            if let Some(stack) = saved.get(&p.name) {
                p.stack = *stack;
                p.all_in = stack.is_zero();
                restored += 1;
            }
        }
        restored
    }

    /// Сыграть раздачи, пока за столом хотя бы двое с фишками
    /// (и не исчерпан лимит `max_hands`).
    pub fn run_session(&mut self, max_hands: Option<u32>) -> Result<SessionOutcome, EngineError> {
        let mut hands_played = 0u32;

        loop {
            let live = self.table.seats.iter().filter(|p| p.is_live()).count();
            if live < 2 {
                break;
            }
            if max_hands.is_some_and(|max| hands_played >= max) {
                break;
            }
            self.play_hand()?;
            hands_played += 1;
            advance_button(&mut self.table);
        }

        let with_chips: Vec<&Player> = self
            .table
            .seats
            .iter()
            .filter(|p| !p.stack.is_zero())
            .collect();
        let winner = match with_chips.as_slice() {
            [only] => Some(*only),
            _ => None,
        };

        match winner {
            Some(p) => info!("Сессия окончена после {hands_played} раздач, победитель: {} ({})", p.name, p.stack),
            None => info!("Сессия остановлена после {hands_played} раздач"),
        }
        notify(&mut self.observers, |o| o.on_session_ended(winner));

        Ok(SessionOutcome {
            hands_played,
            winner: winner.map(|p| p.id),
        })
    }

    /// Сыграть одну раздачу от начала до конца.
    pub fn play_hand(&mut self) -> Result<HandRecord, EngineError> {
        let live = self.table.seats.iter().filter(|p| p.is_live()).count();
        if live < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        self.state = HandState::HandInit;
        loop {
            debug!("Раздача #{}: {:?}", self.hand_id, self.state);
            self.state = match self.state {
                HandState::HandInit => {
                    self.init_hand();
                    HandState::ForcedBets
                }
                HandState::ForcedBets => {
                    self.post_forced_bets()?;
                    self.after_phase(None)
                }
                HandState::Phase(index) => {
                    self.run_phase(index)?;
                    self.after_phase(Some(index))
                }
                HandState::Showdown => {
                    self.showdown()?;
                    HandState::HandComplete
                }
                HandState::Walk => {
                    self.walk();
                    HandState::HandComplete
                }
                HandState::HandComplete => return Ok(self.complete_hand()),
            };
        }
    }

    fn snapshot(&self) -> RoundSnapshot {
        self.context.snapshot(&self.table, &self.betting)
    }

    /// Куда идти после фазы `done` (None – после обязательных ставок).
    fn after_phase(&self, done: Option<usize>) -> HandState {
        if self.table.players_in_hand() < 2 {
            return HandState::Walk;
        }
        let next = done.map_or(0, |i| i + 1);
        if next < self.variant.phases().len() {
            HandState::Phase(next)
        } else {
            HandState::Showdown
        }
    }

    // ---------- HandInit ----------

    fn init_hand(&mut self) {
        self.hand_id = self.ids.next_hand_id();
        self.deck.reset_and_shuffle(&mut self.rng);
        self.context.reset_for_hand();
        self.history = HandHistory::new();
        self.big_blind = None;
        self.first_betting_pending = true;
        self.showdown.clear();
        self.winnings.clear();

        // Кто без фишек или в sit-out – вне раздачи.
        for p in self.table.seats.iter_mut() {
            p.clear_hand();
            if !p.is_live() {
                p.folded = true;
            }
        }

        let dealt_in: Vec<PlayerId> = self
            .table
            .seats
            .iter()
            .filter(|p| p.is_in_hand())
            .map(|p| p.id)
            .collect();
        self.ledger.start_hand(dealt_in.iter().copied());
        self.betting.start_hand(dealt_in.iter().copied());
        self.context.refresh_active(&self.table);

        debug!(
            "Раздача #{}: кнопка на месте {}, в игре {:?}",
            self.hand_id, self.table.button, dealt_in
        );
        self.history.push(HandEventKind::HandStarted {
            hand_id: self.hand_id,
            button: self.table.button,
            dealt_in,
        });

        let snapshot = self.snapshot();
        notify(&mut self.observers, |o| o.on_hand_started(&snapshot));
    }

    // ---------- ForcedBets ----------

    fn post_forced_bets(&mut self) -> Result<(), EngineError> {
        let posted = self.variant.post_forced_bets(
            &mut self.table,
            &mut self.ledger,
            &mut self.context,
            &mut self.betting,
        )?;
        self.context.pot_total = self.ledger.total();
        self.context.refresh_active(&self.table);

        self.big_blind = posted
            .iter()
            .find(|b| b.kind == ForcedBetKind::BigBlind)
            .and_then(|b| self.table.seat_of(b.player_id));

        for bet in &posted {
            debug!("{:?}: игрок {} ставит {}", bet.kind, bet.player_id, bet.amount);
        }
        self.history.push(HandEventKind::ForcedBetsPosted { bets: posted });

        let total = self.ledger.total();
        notify(&mut self.observers, |o| o.on_pot_updated(total));
        Ok(())
    }

    // ---------- Phase ----------

    fn run_phase(&mut self, index: usize) -> Result<(), EngineError> {
        let phase = self.variant.phases()[index].clone();
        debug!("Раздача #{}: фаза '{}'", self.hand_id, phase.name);

        self.context.phase = phase.name.clone();
        self.history.push(HandEventKind::PhaseStarted {
            name: phase.name.clone(),
        });
        notify(&mut self.observers, |o| o.on_phase_started(&phase.name));

        if phase.hole_cards > 0 {
            self.deal_hole_cards(phase.hole_cards)?;
        }
        if phase.community_cards > 0 {
            self.deal_community(phase.community_cards)?;
        }
        if phase.draw_round {
            self.run_draw()?;
        }
        if phase.betting_round && self.table.players_in_hand() >= 2 {
            if self.first_betting_pending {
                self.first_betting_pending = false;
            } else {
                self.betting.reset_street();
                let increment = self.variant.betting_structure().opening_increment(&self.context);
                self.context.reset_for_street(increment);
            }
            self.run_betting_round()?;
            self.context.betting_round += 1;
        }
        Ok(())
    }

    /// Раздать по `count` карт каждому в раздаче, по одной по кругу слева от кнопки.
    fn deal_hole_cards(&mut self, count: usize) -> Result<(), EngineError> {
        let order: Vec<SeatIndex> = seats_left_of_button(&self.table)
            .into_iter()
            .filter(|&seat| self.table.player_at(seat).is_in_hand())
            .collect();

        for _ in 0..count {
            for &seat in &order {
                let card = self.deck.deal()?;
                self.table.player_at_mut(seat).receive_card(card);
            }
        }

        for &seat in &order {
            let player = self.table.player_at(seat);
            let dealt = player.hole_cards[player.hole_cards.len() - count..].to_vec();
            let player_id = player.id;
            self.history.push(HandEventKind::HoleCardsDealt {
                player_id,
                cards: dealt,
            });
            notify(&mut self.observers, |o| o.on_hole_cards_dealt(player_id, count));
        }
        Ok(())
    }

    fn deal_community(&mut self, count: usize) -> Result<(), EngineError> {
        let cards = self.deck.deal_n(count)?;
        debug!("Борд: +{:?}", cards);
        self.context.community_cards.extend_from_slice(&cards);
        self.history.push(HandEventKind::BoardDealt {
            cards: cards.clone(),
        });
        notify(&mut self.observers, |o| o.on_community_dealt(&cards));
        Ok(())
    }

    /// Обмен: каждый в раздаче по кругу слева от кнопки сбрасывает
    /// и добирает столько же карт.
    fn run_draw(&mut self) -> Result<(), EngineError> {
        for seat in seats_left_of_button(&self.table) {
            if !self.table.player_at(seat).is_in_hand() {
                continue;
            }

            let snapshot = self.snapshot();
            let player = self.table.player_at(seat);
            let player_id = player.id;
            let requested = match self.decisions.request_discards(player, &snapshot) {
                Ok(cards) => cards,
                Err(DecisionError::TimedOut) => {
                    warn!("Игрок {player_id}: таймаут на обмене, карты остаются");
                    notify(&mut self.observers, |o| o.on_player_timeout(player_id));
                    Vec::new()
                }
                Err(e) => {
                    warn!("Игрок {player_id}: {e}, карты остаются");
                    Vec::new()
                }
            };

            let discards = self.accept_discards(seat, requested);
            if discards.is_empty() {
                continue;
            }

            let received = self.deck.deal_n(discards.len())?;
            let player = self.table.player_at_mut(seat);
            player.hole_cards.retain(|c| !discards.contains(c));
            player.hole_cards.extend_from_slice(&received);

            debug!("Игрок {player_id} меняет {} карт", discards.len());
            let count = received.len();
            self.history.push(HandEventKind::CardsDrawn {
                player_id,
                discarded: discards,
                received,
            });
            notify(&mut self.observers, |o| o.on_hole_cards_dealt(player_id, count));
        }
        Ok(())
    }

    /// Оставить только карты, которые реально на руке, без повторов,
    /// и не больше, чем осталось в колоде.
    fn accept_discards(&self, seat: SeatIndex, requested: Vec<Card>) -> Vec<Card> {
        let player = self.table.player_at(seat);
        let mut discards: Vec<Card> = Vec::with_capacity(requested.len());
        for card in requested {
            if !player.hole_cards.contains(&card) || discards.contains(&card) {
                warn!("Игрок {}: некорректный сброс {card}, пропускаем", player.id);
                continue;
            }
            discards.push(card);
        }

        if discards.len() > self.deck.len() {
            warn!(
                "Игрок {}: в колоде {} карт, сброс урезан с {}",
                player.id,
                self.deck.len(),
                discards.len()
            );
            discards.truncate(self.deck.len());
        }
        discards
    }

    // ---------- BettingRound ----------

    /// Есть ли игрок, который ещё может ставить и не уравнял ставку.
    fn someone_owes(&self) -> bool {
        self.table
            .seats
            .iter()
            .any(|p| p.can_act() && self.betting.street_bet(p.id) < self.context.current_bet)
    }

    fn street_settled(&self) -> bool {
        let actionable: Vec<PlayerId> = self
            .table
            .seats
            .iter()
            .filter(|p| p.can_act())
            .map(|p| p.id)
            .collect();
        self.betting.is_settled(&actionable, self.context.current_bet)
    }

    fn run_betting_round(&mut self) -> Result<(), EngineError> {
        if self.table.actionable_players() < 2 && !self.someone_owes() {
            debug!("Раунд ставок пропущен: действовать некому");
            return Ok(());
        }

        let start_after = match (self.context.betting_round, self.big_blind) {
            (0, Some(bb)) => bb,
            _ => self.table.button,
        };

        let mut actor = next_eligible_actor(&self.table, start_after);
        while let Some(seat) = actor {
            self.context.acting_player = Some(self.table.player_at(seat).id);
            self.take_turn(seat)?;

            if self.table.players_in_hand() < 2 || self.street_settled() {
                break;
            }
            actor = next_eligible_actor(&self.table, seat);
        }

        self.context.acting_player = None;
        Ok(())
    }

    /// Спросить решение, проверить и применить. Всё нелегальное – fold.
    fn take_turn(&mut self, seat: SeatIndex) -> Result<(), EngineError> {
        let snapshot = self.snapshot();
        let player = self.table.player_at(seat);
        let player_id = player.id;
        let street_bet = self.betting.street_bet(player_id);
        let legal = legal_actions(street_bet, &self.context);

        let decision = match self.decisions.request_action(player, &snapshot, &legal) {
            Ok(kind) if legal.contains(&kind.action_type()) => kind,
            Ok(kind) => {
                warn!("Игрок {player_id}: {kind:?} вне набора {legal:?}, считаем fold");
                PlayerActionKind::Fold
            }
            Err(DecisionError::TimedOut) => {
                warn!("Игрок {player_id}: таймаут, считаем fold");
                notify(&mut self.observers, |o| o.on_player_timeout(player_id));
                PlayerActionKind::Fold
            }
            Err(e) => {
                warn!("Игрок {player_id}: {e}, считаем fold");
                PlayerActionKind::Fold
            }
        };

        let player = self.table.player_at(seat);
        let bet = match resolve_action(
            player,
            &decision,
            street_bet,
            &self.context,
            self.variant.betting_structure(),
        ) {
            Ok(bet) => bet,
            Err(EngineError::IllegalBet(reason)) => {
                warn!("Игрок {player_id}: {reason}, считаем fold");
                ProposedBet {
                    action: ActionType::Fold,
                    street_bet,
                    added: Chips::ZERO,
                    stack: player.stack,
                }
            }
            Err(e) => return Err(e),
        };

        self.apply_bet(seat, player_id, bet)
    }

    fn apply_bet(&mut self, seat: SeatIndex, player_id: PlayerId, bet: ProposedBet) -> Result<(), EngineError> {
        if bet.action == ActionType::Fold {
            self.table.player_at_mut(seat).fold();
        } else {
            if !bet.added.is_zero() {
                self.table.player_at_mut(seat).bet(bet.added)?;
                self.ledger.record_contribution(player_id, bet.added);
                self.context.pot_total = self.ledger.total();
            }

            let previous = self.context.current_bet;
            let total = self.betting.add_street_bet(player_id, bet.added);
            if total > previous {
                let increase = total.saturating_sub(previous);
                if increase >= self.context.min_raise {
                    self.context.min_raise = increase;
                }
                self.context.current_bet = total;
                self.context.raises_this_street += 1;
                self.betting.reopen(player_id);
            }
        }
        self.betting.mark_acted(player_id);
        self.context.refresh_active(&self.table);

        let action = PlayerAction::new(player_id, seat, bet.action, bet.added);
        let new_stack = self.table.player_at(seat).stack;
        let pot_after = self.ledger.total();
        debug!(
            "Игрок {player_id}: {:?} {} (стек {new_stack}, банк {pot_after})",
            bet.action, bet.added
        );
        self.history.push(HandEventKind::PlayerActed {
            player_id,
            action: bet.action,
            amount: bet.added,
            new_stack,
            pot_after,
        });

        notify(&mut self.observers, |o| o.on_player_action(&action));
        if !bet.added.is_zero() {
            notify(&mut self.observers, |o| o.on_pot_updated(pot_after));
        }
        Ok(())
    }

    // ---------- Showdown / Walk ----------

    fn showdown(&mut self) -> Result<(), EngineError> {
        let evaluator = self.variant.evaluator();
        let board = &self.context.community_cards;

        let mut ranks: BTreeMap<PlayerId, HandRank> = BTreeMap::new();
        for p in self.table.seats.iter().filter(|p| p.is_in_hand()) {
            let rank = evaluator.evaluate(&p.hole_cards, board);
            debug!("Шоудаун: игрок {} – {}", p.id, rank);
            self.history.push(HandEventKind::ShowdownReveal {
                player_id: p.id,
                hole_cards: p.hole_cards.clone(),
                rank: rank.clone(),
            });
            ranks.insert(p.id, rank);
        }
        notify(&mut self.observers, |o| o.on_showdown(&ranks));

        let folded: BTreeSet<PlayerId> = self
            .table
            .seats
            .iter()
            .filter(|p| p.folded)
            .map(|p| p.id)
            .collect();
        self.winnings = self.ledger.settle(&ranks, &folded, &odd_chip_order(&self.table))?;
        self.showdown = ranks;
        Ok(())
    }

    /// Остался один – забирает весь банк без вскрытия.
    fn walk(&mut self) {
        let total = self.ledger.total();
        if let Some(p) = self.table.seats.iter().find(|p| p.is_in_hand()) {
            debug!("Игрок {} забирает банк {} без вскрытия", p.id, total);
            if !total.is_zero() {
                self.winnings.insert(p.id, total);
            }
        }
    }

    // ---------- HandComplete ----------

    fn complete_hand(&mut self) -> HandRecord {
        let total_pot = self.ledger.total();

        for (id, amount) in &self.winnings {
            if let Some(p) = self.table.player_mut(*id) {
                p.add_chips(*amount);
            }
            self.history.push(HandEventKind::PotAwarded {
                player_id: *id,
                amount: *amount,
            });
        }

        let results: Vec<PlayerHandResult> = self
            .ledger
            .contributions
            .iter()
            .map(|(id, contributed)| {
                let won = self.winnings.get(id).copied().unwrap_or(Chips::ZERO);
                PlayerHandResult {
                    player_id: *id,
                    rank: self.showdown.get(id).cloned(),
                    contributed: *contributed,
                    won,
                    is_winner: !won.is_zero(),
                }
            })
            .collect();

        // Банк роздан.
        self.ledger = PotLedger::new();
        self.context.pot_total = Chips::ZERO;

        self.history.push(HandEventKind::HandFinished {
            hand_id: self.hand_id,
            total_pot,
        });
        info!(
            "Раздача #{} окончена: банк {}, выплаты {:?}",
            self.hand_id, total_pot, self.winnings
        );
        notify(&mut self.observers, |o| o.on_hand_ended(&self.winnings));

        let record = HandRecord {
            hand_id: self.hand_id,
            variant: self.variant.name().to_string(),
            button: self.table.button,
            board: self.context.community_cards.clone(),
            total_pot,
            went_to_showdown: !self.showdown.is_empty(),
            results,
            history: self.history.clone(),
        };

        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.save_player_chips(&self.table.seats) {
                warn!("Не удалось сохранить стеки: {e}");
            }
            if let Err(e) = store.append_hand(&record) {
                warn!("Не удалось записать раздачу #{}: {e}", record.hand_id);
            }
        }

        record
    }
}
