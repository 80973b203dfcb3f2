use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::context::RoundContext;
use crate::engine::errors::EngineError;
use crate::engine::structure::{BettingStructure, ProposedBet};

/// Набор легальных действий для игрока.
///
/// Fold и all-in есть всегда. Check и bet – только если игрок уже уравнял
/// текущую ставку, иначе вместо них call и raise.
pub fn legal_actions(street_bet: Chips, ctx: &RoundContext) -> Vec<ActionType> {
    let mut legal = vec![ActionType::Fold];
    if street_bet >= ctx.current_bet {
        legal.push(ActionType::Check);
        legal.push(ActionType::Bet);
    } else {
        legal.push(ActionType::Call);
        legal.push(ActionType::Raise);
    }
    legal.push(ActionType::AllIn);
    legal
}

/// Bet, если игрок уже уравнял текущую ставку, иначе raise (как в `legal_actions`).
fn opening_or_raise(street_bet: Chips, ctx: &RoundContext) -> ActionType {
    if street_bet >= ctx.current_bet {
        ActionType::Bet
    } else {
        ActionType::Raise
    }
}

/// Перевести решение игрока в конкретную ставку и проверить её структурой.
///
/// Всё ограничивается стеком: bet/raise выше стека становится all-in.
/// All-in дополнительно ограничивается максимумом структуры.
/// Метка действия отражает то, что реально произошло: урезанный all-in
/// записывается как bet/raise, а весь стек не выше текущей ставки – как call.
pub fn resolve_action(
    player: &Player,
    kind: &PlayerActionKind,
    street_bet: Chips,
    ctx: &RoundContext,
    structure: &dyn BettingStructure,
) -> Result<ProposedBet, EngineError> {
    let stack = player.stack;
    let to_call = ctx.current_bet.saturating_sub(street_bet);

    let (action, added) = match kind {
        PlayerActionKind::Fold => (ActionType::Fold, Chips::ZERO),
        PlayerActionKind::Check => {
            if !to_call.is_zero() {
                return Err(EngineError::IllegalBet(format!(
                    "чек невозможен: нужно доплатить {to_call}"
                )));
            }
            (ActionType::Check, Chips::ZERO)
        }
        PlayerActionKind::Call => {
            if to_call.is_zero() {
                return Err(EngineError::IllegalBet("нечего уравнивать".into()));
            }
            (ActionType::Call, to_call.min(stack))
        }
        PlayerActionKind::Bet(total) | PlayerActionKind::Raise(total) => {
            let wanted = total.checked_sub(street_bet).ok_or_else(|| {
                EngineError::IllegalBet(format!(
                    "ставка до {total} меньше уже поставленных {street_bet}"
                ))
            })?;
            let added = wanted.min(stack);
            let action = if added < stack {
                kind.action_type()
            } else if street_bet + added > ctx.current_bet {
                ActionType::AllIn
            } else {
                ActionType::Call
            };
            (action, added)
        }
        PlayerActionKind::AllIn => {
            let mut added = stack;
            if let Some(max) = structure.max_bet_to(ctx, street_bet) {
                added = added.min(max.saturating_sub(street_bet));
            }
            if added == stack {
                (ActionType::AllIn, added)
            } else if street_bet + added > ctx.current_bet {
                // Урезан максимумом структуры: обычное повышение, фишки остаются.
                (opening_or_raise(street_bet, ctx), added)
            } else {
                // Повышать уже нельзя: all-in превращается в колл.
                (ActionType::Call, to_call.min(stack))
            }
        }
    };

    let bet = ProposedBet {
        action,
        street_bet,
        added,
        stack,
    };
    structure.validate(&bet, ctx)?;
    Ok(bet)
}
