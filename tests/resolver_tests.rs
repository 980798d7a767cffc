//! Turn resolution integration tests.
//!
//! These tests drive `resolve` + `BoardState::apply` directly, without a
//! round controller, to pin down the click rules.

use memory_match::board::{BoardState, ValueAssignment};
use memory_match::core::{CardPosition, MemoryError};
use memory_match::rules::{resolve, ClickKind, Resolution};

fn board(values: &[u32]) -> BoardState {
    BoardState::new(ValueAssignment::from_raw(values).expect("valid pairing"))
}

fn click(board: &mut BoardState, i: usize) -> (Resolution, ClickKind) {
    let (res, kind) = resolve(CardPosition::new(i), board).expect("in range");
    board.apply(&res).expect("resolution applies");
    (res, kind)
}

// =============================================================================
// Single Clicks
// =============================================================================

/// Revealing one card never completes a move.
#[test]
fn test_single_reveal() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    let (res, kind) = click(&mut b, 4);

    assert_eq!(kind, ClickKind::Revealed);
    assert!(!res.move_completed);
    assert_eq!(b.flipped(), &[false, false, false, false, true, false]);
    assert_eq!(b.found(), &[false; 6]);
}

/// A face-up card ignores clicks, matched or not.
#[test]
fn test_face_up_clicks_ignored() {
    let mut b = board(&[0, 0, 1, 1]);
    click(&mut b, 2);

    let before = b.clone();
    let (res, kind) = click(&mut b, 2);
    assert_eq!(kind, ClickKind::Ignored);
    assert!(!res.move_completed);
    assert_eq!(b, before);

    click(&mut b, 3);
    let before = b.clone();
    let (_, kind) = click(&mut b, 3);
    assert_eq!(kind, ClickKind::Ignored);
    assert_eq!(b, before);
}

// =============================================================================
// Pairs
// =============================================================================

/// Revealing the partner of the only unmatched face-up card finds the pair.
#[test]
fn test_match() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    click(&mut b, 1);
    let (res, kind) = click(&mut b, 4);

    assert_eq!(kind, ClickKind::Matched);
    assert!(res.move_completed);
    assert_eq!(res.newly_found, Some((CardPosition::new(1), CardPosition::new(4))));
    assert!(b.is_found(CardPosition::new(1)));
    assert!(b.is_found(CardPosition::new(4)));
    assert!(b.unresolved_face_up().is_empty());
}

/// A mismatch leaves both cards face-up and unmatched.
#[test]
fn test_mismatch() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    click(&mut b, 0);
    let (res, kind) = click(&mut b, 2);

    assert_eq!(kind, ClickKind::Revealed);
    assert!(res.move_completed);
    assert_eq!(res.newly_found, None);
    assert_eq!(
        b.unresolved_face_up().as_slice(),
        &[CardPosition::new(0), CardPosition::new(2)]
    );
}

/// After a match, the next revealed card starts a new attempt.
#[test]
fn test_match_then_new_attempt() {
    let mut b = board(&[0, 0, 1, 1]);
    click(&mut b, 0);
    click(&mut b, 1);

    let (res, kind) = click(&mut b, 3);
    assert_eq!(kind, ClickKind::Revealed);
    // 3 face-up: odd, no move
    assert!(!res.move_completed);

    let (res, kind) = click(&mut b, 2);
    assert_eq!(kind, ClickKind::Matched);
    assert!(res.move_completed);
    assert!(b.is_complete());
}

// =============================================================================
// Third Click
// =============================================================================

/// Clicking a third card dismisses the mismatched pair and shows only the new card.
#[test]
fn test_third_click_dismisses_pair() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    click(&mut b, 0);
    click(&mut b, 1);

    let (res, kind) = click(&mut b, 3);
    assert_eq!(kind, ClickKind::Dismissed);
    assert!(!res.move_completed);
    assert_eq!(b.flipped(), &[false, false, false, true, false, false]);
    assert_eq!(b.found(), &[false; 6]);
}

/// The dismissing click can be followed by a match with its partner.
#[test]
fn test_dismiss_then_match() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    click(&mut b, 0);
    click(&mut b, 1);
    click(&mut b, 2);

    let (res, kind) = click(&mut b, 3);
    assert_eq!(kind, ClickKind::Matched);
    assert!(res.move_completed);
    assert_eq!(res.newly_found, Some((CardPosition::new(2), CardPosition::new(3))));
}

/// The dismissed pair never matches the card that dismissed it.
#[test]
fn test_dismissing_card_does_not_match_dismissed() {
    let mut b = board(&[0, 1, 2, 2, 1, 0]);
    click(&mut b, 0);
    click(&mut b, 1);

    // Card 4 has value 1, same as dismissed card 1.
    let (res, kind) = click(&mut b, 4);
    assert_eq!(kind, ClickKind::Dismissed);
    assert_eq!(res.newly_found, None);
    assert!(!b.is_found(CardPosition::new(1)));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_out_of_range_click() {
    let b = board(&[0, 0, 1, 1]);
    let err = resolve(CardPosition::new(4), &b).unwrap_err();
    assert_eq!(
        err,
        MemoryError::CardOutOfRange {
            position: CardPosition::new(4),
            card_count: 4
        }
    );
}

#[test]
fn test_apply_rejects_wrong_length() {
    let mut b = board(&[0, 0, 1, 1]);
    let res = Resolution {
        flipped: vec![true, false],
        move_completed: false,
        newly_found: None,
    };
    assert_eq!(
        b.apply(&res),
        Err(MemoryError::LengthMismatch {
            expected: 4,
            actual: 2
        })
    );
}

/// A resolution computed before a pair was found can't cover that pair.
#[test]
fn test_apply_rejects_stale_resolution() {
    let mut b = board(&[0, 0, 1, 1]);
    click(&mut b, 0);

    // Resolved against the board with only card 0 showing.
    let (stale, _) = resolve(CardPosition::new(2), &b).unwrap();
    assert_eq!(stale.flipped, vec![true, false, true, false]);

    click(&mut b, 1);
    assert!(b.is_found(CardPosition::new(1)));
    let before = b.clone();

    assert_eq!(
        b.apply(&stale),
        Err(MemoryError::FoundNotFaceUp {
            position: CardPosition::new(1)
        })
    );
    assert_eq!(b, before);
    assert!(b.holds_found_invariant());
}
