//! Turn resolution: one card click in, next face-up set out.
//!
//! ## Rules
//!
//! 1. Clicking a face-up card does nothing.
//! 2. Clicking a covered card while a mismatched pair is still showing
//!    dismisses that pair (turns it face-down) and reveals the clicked card.
//! 3. Otherwise the clicked card is revealed. If exactly one other unmatched
//!    card is showing and its value is equal, the two become a found pair.
//! 4. A move completes when the click leaves a positive, even number of cards
//!    face-up (matched cards included) and the clicked card was covered.
//!
//! Rule 2 is decided from the board *before* the click. The clicked card is
//! covered at that point, so dismissal never touches it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::BoardState;
use crate::core::{CardPosition, MemoryError};

/// Outcome of resolving one click.
///
/// Pure data: nothing is applied to the board until
/// [`BoardState::apply`] is called with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Face-up flags after the click.
    pub flipped: Vec<bool>,

    /// True if this click revealed the second card of a pair attempt.
    pub move_completed: bool,

    /// Pair to mark as found: (earlier card, clicked card).
    pub newly_found: Option<(CardPosition, CardPosition)>,
}

/// How a click was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickKind {
    /// Card was already face-up; nothing changed.
    Ignored,
    /// Card was revealed.
    Revealed,
    /// A mismatched pair was turned back down and the card was revealed.
    Dismissed,
    /// Card was revealed and completed a pair.
    Matched,
}

/// Resolve a click on `card` against `board`.
///
/// Returns the [`Resolution`] and how the click was classified. Fails with
/// [`MemoryError::CardOutOfRange`] if `card` is off the board.
///
/// ```
/// use memory_match::board::{BoardState, ValueAssignment};
/// use memory_match::core::CardPosition;
/// use memory_match::rules::{resolve, ClickKind};
///
/// let mut board = BoardState::new(ValueAssignment::from_raw(&[0, 1, 1, 0]).unwrap());
///
/// let (first, kind) = resolve(CardPosition(0), &board).unwrap();
/// assert_eq!(kind, ClickKind::Revealed);
/// assert!(!first.move_completed);
/// board.apply(&first).unwrap();
///
/// let (second, kind) = resolve(CardPosition(3), &board).unwrap();
/// assert_eq!(kind, ClickKind::Matched);
/// assert!(second.move_completed);
/// assert_eq!(second.newly_found, Some((CardPosition(0), CardPosition(3))));
/// ```
pub fn resolve(
    card: CardPosition,
    board: &BoardState,
) -> Result<(Resolution, ClickKind), MemoryError> {
    board.check_position(card)?;

    let was_flipped = board.is_flipped(card);
    let mut flipped = board.flipped().to_vec();

    if was_flipped {
        debug!(%card, "click on face-up card ignored");
        return Ok((
            Resolution {
                flipped,
                move_completed: false,
                newly_found: None,
            },
            ClickKind::Ignored,
        ));
    }

    // Computed before any change: the clicked card is covered here.
    let unresolved = board.unresolved_face_up();
    let k = unresolved.len();

    let mut newly_found = None;
    let kind = if k != 0 && k % 2 == 0 {
        for p in &unresolved {
            flipped[p.index()] = false;
        }
        flipped[card.index()] = true;
        ClickKind::Dismissed
    } else {
        flipped[card.index()] = true;
        match unresolved.as_slice() {
            [other] if board.values().get(*other) == board.values().get(card) => {
                newly_found = Some((*other, card));
                ClickKind::Matched
            }
            _ => ClickKind::Revealed,
        }
    };

    let face_up = flipped.iter().filter(|&&up| up).count();
    let move_completed = face_up > 0 && face_up % 2 == 0;

    debug!(%card, ?kind, face_up, move_completed, "click resolved");

    Ok((
        Resolution {
            flipped,
            move_completed,
            newly_found,
        },
        kind,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ValueAssignment;

    fn board(values: &[u32]) -> BoardState {
        BoardState::new(ValueAssignment::from_raw(values).unwrap())
    }

    fn click(board: &mut BoardState, i: usize) -> (Resolution, ClickKind) {
        let (res, kind) = resolve(CardPosition(i), board).unwrap();
        board.apply(&res).unwrap();
        (res, kind)
    }

    #[test]
    fn test_first_card_reveals() {
        let mut b = board(&[0, 1, 1, 0]);
        let (res, kind) = click(&mut b, 2);

        assert_eq!(kind, ClickKind::Revealed);
        assert_eq!(res.flipped, vec![false, false, true, false]);
        assert!(!res.move_completed);
        assert_eq!(res.newly_found, None);
    }

    #[test]
    fn test_mismatch_completes_move() {
        let mut b = board(&[0, 1, 1, 0]);
        click(&mut b, 0);
        let (res, kind) = click(&mut b, 1);

        assert_eq!(kind, ClickKind::Revealed);
        assert_eq!(res.flipped, vec![true, true, false, false]);
        assert!(res.move_completed);
        assert_eq!(res.newly_found, None);
        assert_eq!(b.found(), &[false; 4]);
    }

    #[test]
    fn test_third_click_dismisses_and_reveals() {
        let mut b = board(&[0, 1, 1, 0]);
        click(&mut b, 0);
        click(&mut b, 1);
        let (res, kind) = click(&mut b, 2);

        assert_eq!(kind, ClickKind::Dismissed);
        assert_eq!(res.flipped, vec![false, false, true, false]);
        assert!(!res.move_completed);
        // Card 2 matches card 1's value, but card 1 was just dismissed.
        assert_eq!(res.newly_found, None);
    }

    #[test]
    fn test_face_up_click_is_noop() {
        let mut b = board(&[0, 1, 1, 0]);
        click(&mut b, 0);
        let before = b.clone();

        let (res, kind) = resolve(CardPosition(0), &b).unwrap();
        assert_eq!(kind, ClickKind::Ignored);
        assert!(!res.move_completed);
        assert_eq!(res.flipped.as_slice(), before.flipped());

        // Also a no-op on a found card
        click(&mut b, 3);
        let (res, kind) = resolve(CardPosition(3), &b).unwrap();
        assert_eq!(kind, ClickKind::Ignored);
        assert_eq!(res.flipped.as_slice(), b.flipped());
    }

    #[test]
    fn test_dismiss_keeps_found_cards() {
        // Pair 0 at (0, 3) already found; 1 and 4 mismatched and showing.
        let mut b = board(&[0, 1, 2, 0, 2, 1]);
        click(&mut b, 0);
        click(&mut b, 3);
        click(&mut b, 1);
        click(&mut b, 4);
        assert_eq!(b.unresolved_face_up().len(), 2);

        let (res, kind) = click(&mut b, 2);
        assert_eq!(kind, ClickKind::Dismissed);
        assert_eq!(res.flipped, vec![true, false, true, true, false, false]);
        // 3 face-up (odd): no move
        assert!(!res.move_completed);
        assert_eq!(b.found(), &[true, false, false, true, false, false]);
    }

    #[test]
    fn test_out_of_range() {
        let b = board(&[0, 0]);
        assert_eq!(
            resolve(CardPosition(2), &b),
            Err(MemoryError::CardOutOfRange {
                position: CardPosition(2),
                card_count: 2
            })
        );
    }
}
