//! Арифметика позиций: кнопка, блайнды, очередь хода.

use crate::domain::{Player, PlayerId, SeatIndex, Table};

/// Найти следующее место по кругу строго после `start`, удовлетворяющее условию.
fn next_seat_where<F>(table: &Table, start: SeatIndex, pred: F) -> Option<SeatIndex>
where
    F: Fn(&Player) -> bool,
{
    let n = table.seat_count();
    if n == 0 {
        return None;
    }

    (1..=n)
        .map(|i| ((start as usize + i) % n) as SeatIndex)
        .find(|&seat| pred(table.player_at(seat)))
}

/// Места, розданные в текущую раздачу (не сфолдили на старте), по кругу
/// начиная со следующего после кнопки. Кнопка, если роздана, – последняя.
fn dealt_in_after_button(table: &Table) -> Vec<SeatIndex> {
    seats_left_of_button(table)
        .into_iter()
        .filter(|&seat| table.player_at(seat).is_in_hand())
        .collect()
}

/// Хедз-ап с розданной кнопкой: кнопка сама ставит SB.
fn button_posts_small_blind(table: &Table, order: &[SeatIndex]) -> bool {
    order.len() == 2 && table.player_at(table.button).is_in_hand()
}

/// Передвинуть кнопку на следующее место, где игрок с фишками и не sit-out.
///
/// Если таких нет – просто следующее место.
pub fn advance_button(table: &mut Table) {
    let n = table.seat_count();
    if n == 0 {
        return;
    }
    table.button = next_seat_where(table, table.button, Player::is_live)
        .unwrap_or(((table.button as usize + 1) % n) as SeatIndex);
}

/// Место малого блайнда.
///
/// Хедз-ап (ровно 2 в раздаче, кнопка среди них): кнопка сама ставит SB.
/// Иначе – первый розданный игрок после кнопки, даже если сама кнопка
/// в раздаче не участвует.
pub fn small_blind_seat(table: &Table) -> SeatIndex {
    let order = dealt_in_after_button(table);
    if order.is_empty() {
        return table.button;
    }
    if button_posts_small_blind(table, &order) {
        table.button
    } else {
        order[0]
    }
}

/// Место большого блайнда: следующий розданный после SB.
pub fn big_blind_seat(table: &Table) -> SeatIndex {
    let order = dealt_in_after_button(table);
    match order.len() {
        0 => table.button,
        _ if button_posts_small_blind(table, &order) => order[0],
        len => order[1 % len],
    }
}

/// Следующий, кто может ходить, строго после `after`.
///
/// Пропускает folded, all-in и sit-out. None → ходить некому.
pub fn next_eligible_actor(table: &Table, after: SeatIndex) -> Option<SeatIndex> {
    next_seat_where(table, after, Player::can_act)
}

/// Порядок раздачи: по кругу начиная со следующего после кнопки.
pub fn seats_left_of_button(table: &Table) -> Vec<SeatIndex> {
    let n = table.seat_count();
    (1..=n)
        .map(|i| ((table.button as usize + i) % n) as SeatIndex)
        .collect()
}

/// Id игроков в порядке "слева от кнопки" – для нечётной фишки при сплите.
pub fn odd_chip_order(table: &Table) -> Vec<PlayerId> {
    seats_left_of_button(table)
        .into_iter()
        .map(|seat| table.player_at(seat).id)
        .collect()
}
