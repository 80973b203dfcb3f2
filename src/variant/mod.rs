//! Варианты игры: набор фаз, оценщик, структура ставок и обязательные ставки.
//!
//! Движок ничего не знает о холдеме или дро – он исполняет список фаз
//! и вызывает стратегии, которые отдаёт `GameVariant`.

pub mod config;
pub mod draw;
pub mod holdem;
pub mod omaha;

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{AnteType, PlayerId, Stakes, Table};
use crate::engine::betting::BettingState;
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{ForcedBet, ForcedBetKind};
use crate::engine::positions::{big_blind_seat, small_blind_seat};
use crate::engine::pot::PotLedger;
use crate::engine::structure::BettingStructure;
use crate::eval::HandEvaluator;

pub use config::VariantConfig;
pub use draw::FiveCardDraw;
pub use holdem::TexasHoldem;
pub use omaha::Omaha;

/// Описание одной фазы раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseConfig {
    pub name: String,
    pub community_cards: usize,
    pub hole_cards: usize,
    pub betting_round: bool,
    pub draw_round: bool,
}

impl PhaseConfig {
    pub fn new(
        name: impl Into<String>,
        community_cards: usize,
        hole_cards: usize,
        betting_round: bool,
        draw_round: bool,
    ) -> Self {
        Self {
            name: name.into(),
            community_cards,
            hole_cards,
            betting_round,
            draw_round,
        }
    }
}

/// Правила конкретного варианта.
pub trait GameVariant: Debug {
    fn name(&self) -> &str;

    fn phases(&self) -> &[PhaseConfig];

    fn evaluator(&self) -> &dyn HandEvaluator;

    fn betting_structure(&self) -> &dyn BettingStructure;

    /// Блайнды/анте. Вызывается ровно один раз за раздачу, до первой фазы.
    /// Должна оставить в `ctx` текущую ставку и минимальный рейз первой улицы.
    fn post_forced_bets(
        &self,
        table: &mut Table,
        ledger: &mut PotLedger,
        ctx: &mut RoundContext,
        betting: &mut BettingState,
    ) -> Result<Vec<ForcedBet>, EngineError>;
}

/// Списать обязательную ставку (не больше стека) и занести в журнал банка.
///
/// `live` – ставка идёт в текущую улицу (блайнд), иначе мёртвые деньги (анте).
fn post_forced(
    table: &mut Table,
    player_id: PlayerId,
    nominal: Chips,
    kind: ForcedBetKind,
    live: bool,
    ledger: &mut PotLedger,
    betting: &mut BettingState,
) -> Result<Option<ForcedBet>, EngineError> {
    let player = table
        .player_mut(player_id)
        .ok_or(EngineError::PlayerNotSeated(player_id))?;
    let amount = nominal.min(player.stack);
    if amount.is_zero() {
        return Ok(None);
    }
    player.bet(amount)?;
    ledger.record_contribution(player_id, amount);
    if live {
        betting.add_street_bet(player_id, amount);
    }
    Ok(Some(ForcedBet {
        player_id,
        kind,
        amount,
    }))
}

/// Анте с каждого розданного игрока.
fn post_classic_antes(
    table: &mut Table,
    ante: Chips,
    ledger: &mut PotLedger,
    betting: &mut BettingState,
) -> Result<Vec<ForcedBet>, EngineError> {
    let dealt_in: Vec<PlayerId> = table
        .seats
        .iter()
        .filter(|p| p.is_in_hand() && !p.all_in)
        .map(|p| p.id)
        .collect();

    let mut posted = Vec::new();
    for id in dealt_in {
        if let Some(bet) = post_forced(table, id, ante, ForcedBetKind::Ante, false, ledger, betting)? {
            posted.push(bet);
        }
    }
    Ok(posted)
}

/// Анте (если есть), затем SB и BB. Текущая ставка первой улицы – номинальный BB.
fn post_blinds(
    stakes: &Stakes,
    table: &mut Table,
    ledger: &mut PotLedger,
    ctx: &mut RoundContext,
    betting: &mut BettingState,
) -> Result<Vec<ForcedBet>, EngineError> {
    let sb_id = table.player_at(small_blind_seat(table)).id;
    let bb_id = table.player_at(big_blind_seat(table)).id;

    let mut posted = match stakes.ante_type {
        AnteType::None => Vec::new(),
        AnteType::Classic => post_classic_antes(table, stakes.ante, ledger, betting)?,
        AnteType::BigBlind => {
            post_forced(table, bb_id, stakes.ante, ForcedBetKind::Ante, false, ledger, betting)?
                .into_iter()
                .collect()
        }
    };

    posted.extend(post_forced(
        table,
        sb_id,
        stakes.small_blind,
        ForcedBetKind::SmallBlind,
        true,
        ledger,
        betting,
    )?);
    posted.extend(post_forced(
        table,
        bb_id,
        stakes.big_blind,
        ForcedBetKind::BigBlind,
        true,
        ledger,
        betting,
    )?);

    ctx.current_bet = stakes.big_blind;
    ctx.min_raise = stakes.big_blind;
    ctx.pot_total = ledger.total();
    Ok(posted)
}
