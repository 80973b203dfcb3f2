use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerAction;
use crate::engine::context::RoundSnapshot;
use crate::eval::HandRank;

/// Подписчик на события стола (UI, логгер, статистика).
///
/// Вызывается синхронно, в порядке регистрации. Все методы по умолчанию
/// пустые – подписчик реализует только то, что ему нужно.
pub trait GameObserver {
    fn on_hand_started(&mut self, _snapshot: &RoundSnapshot) {}

    fn on_phase_started(&mut self, _phase: &str) {}

    fn on_player_action(&mut self, _action: &PlayerAction) {}

    /// Сколько карманных карт получил игрок (сами карты не раскрываем).
    fn on_hole_cards_dealt(&mut self, _player: PlayerId, _count: usize) {}

    fn on_community_dealt(&mut self, _cards: &[Card]) {}

    fn on_pot_updated(&mut self, _total: Chips) {}

    fn on_showdown(&mut self, _ranks: &BTreeMap<PlayerId, HandRank>) {}

    fn on_hand_ended(&mut self, _winnings: &BTreeMap<PlayerId, Chips>) {}

    fn on_player_timeout(&mut self, _player: PlayerId) {}

    /// Конец сессии. `winner` – единственный оставшийся со стеком,
    /// None если сессию остановил лимит раздач.
    fn on_session_ended(&mut self, _winner: Option<&Player>) {}
}

/// Подписчик, которого снаружи ещё нужно читать (например, в тестах).
impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn on_hand_started(&mut self, snapshot: &RoundSnapshot) {
        self.borrow_mut().on_hand_started(snapshot)
    }

    fn on_phase_started(&mut self, phase: &str) {
        self.borrow_mut().on_phase_started(phase)
    }

    fn on_player_action(&mut self, action: &PlayerAction) {
        self.borrow_mut().on_player_action(action)
    }

    fn on_hole_cards_dealt(&mut self, player: PlayerId, count: usize) {
        self.borrow_mut().on_hole_cards_dealt(player, count)
    }

    fn on_community_dealt(&mut self, cards: &[Card]) {
        self.borrow_mut().on_community_dealt(cards)
    }

    fn on_pot_updated(&mut self, total: Chips) {
        self.borrow_mut().on_pot_updated(total)
    }

    fn on_showdown(&mut self, ranks: &BTreeMap<PlayerId, HandRank>) {
        self.borrow_mut().on_showdown(ranks)
    }

    fn on_hand_ended(&mut self, winnings: &BTreeMap<PlayerId, Chips>) {
        self.borrow_mut().on_hand_ended(winnings)
    }

    fn on_player_timeout(&mut self, player: PlayerId) {
        self.borrow_mut().on_player_timeout(player)
    }

    fn on_session_ended(&mut self, winner: Option<&Player>) {
        self.borrow_mut().on_session_ended(winner)
    }
}
