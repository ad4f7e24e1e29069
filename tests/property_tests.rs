//! Property-based tests for board bookkeeping, rule derivation and pushing.

use proptest::prelude::*;

use rule_grid::board::{Board, BoardBuilder};
use rule_grid::core::{Direction, Position, MAX_COLS, MAX_ROWS};
use rule_grid::movement::MovementResolver;
use rule_grid::rules::RuleDeriver;
use rule_grid::tokens::{Property, PropertySet, TokenKind};

fn any_kind() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

fn any_property() -> impl Strategy<Value = Property> {
    prop::sample::select(Property::ALL.to_vec())
}

/// A board size plus `count` positions on it.
fn board_and_positions(count: usize) -> impl Strategy<Value = (i32, i32, Vec<(i32, i32)>)> {
    (1..=MAX_COLS, 1..=MAX_ROWS).prop_flat_map(move |(w, h)| {
        (Just(w), Just(h), prop::collection::vec((0..w, 0..h), count))
    })
}

/// A random board scattered with tokens of any kind.
fn random_board() -> impl Strategy<Value = Board> {
    (1..=12i32, 1..=8i32)
        .prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec((any_kind(), 0..w, 0..h), 0..60),
            )
        })
        .prop_map(|(w, h, objects)| {
            objects
                .into_iter()
                .fold(BoardBuilder::new(w, h), |b, (kind, col, row)| b.object(kind, col, row))
                .build()
                .unwrap()
        })
}

fn registry_state(board: &Board) -> Vec<PropertySet> {
    TokenKind::ALL.iter().map(|&k| board.registry().get(k)).collect()
}

proptest! {
    /// After a transfer the object is at the destination and not the origin.
    #[test]
    fn transfer_moves_object((w, h, cells) in board_and_positions(2), kind in any_kind()) {
        let from = Position::new(cells[0].0, cells[0].1);
        let to = Position::new(cells[1].0, cells[1].1);
        prop_assume!(from != to);

        let mut board = Board::new(w, h).unwrap();
        let object = board.spawn_at(kind, from).unwrap();
        board.transfer(object, from, to).unwrap();

        prop_assert!(board.objects_at(to).unwrap().contains(&object));
        prop_assert!(!board.objects_at(from).unwrap().contains(&object));
        prop_assert_eq!(board.object_count(), 1);
    }

    /// Setting a property through one object's kind shows on every object
    /// of that kind, including ones placed later.
    #[test]
    fn properties_are_kind_scoped(
        (w, h, cells) in board_and_positions(4),
        kind in any_kind(),
        property in any_property(),
    ) {
        let mut board = Board::new(w, h).unwrap();
        let placed: Vec<_> = cells[..3]
            .iter()
            .map(|&(c, r)| board.spawn_at(kind, Position::new(c, r)).unwrap())
            .collect();

        board.registry_mut().set(placed[0].kind, property, true);
        let later = board.spawn_at(kind, Position::new(cells[3].0, cells[3].1)).unwrap();

        for object in placed.iter().chain(std::iter::once(&later)) {
            prop_assert!(board.object_has(*object, property));
        }
    }

    /// Two derivation passes in a row leave the same property state.
    #[test]
    fn derivation_is_idempotent(mut board in random_board()) {
        let first_rules = RuleDeriver::derive(&mut board);
        let first = registry_state(&board);
        let second_rules = RuleDeriver::derive(&mut board);
        let second = registry_state(&board);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_rules, second_rules);
    }

    /// Word kinds are always pushable, whatever the board says.
    #[test]
    fn words_stay_pushable(mut board in random_board()) {
        RuleDeriver::derive(&mut board);
        for kind in TokenKind::ALL.iter().filter(|k| k.rep().is_some() || k.as_property().is_some()) {
            prop_assert!(board.registry().has(*kind, Property::Push));
        }
        prop_assert!(board.registry().has(TokenKind::Is, Property::Push));
    }

    /// A push chain moves entirely or not at all.
    #[test]
    fn push_chain_all_or_nothing(rocks in 1..10i32, gap in 0..4i32, wall in any::<bool>()) {
        // `gap == 0` puts the last rock against the east edge.
        let width = rocks + gap + 1;
        let wall = wall && gap > 0;
        let mut builder = BoardBuilder::new(width, 1)
            .object(TokenKind::SprBaba, 0, 0)
            .property(TokenKind::SprBaba, Property::You)
            .property(TokenKind::SprRock, Property::Push)
            .property(TokenKind::SprWall, Property::Stop);
        for col in 1..=rocks {
            builder = builder.object(TokenKind::SprRock, col, 0);
        }
        if wall {
            builder = builder.object(TokenKind::SprWall, rocks + 1, 0);
        }
        let mut board = builder.build().unwrap();

        let report = MovementResolver::move_all(&mut board, Direction::East).unwrap();

        // Room beyond the chain: no wall, and the column past the last rock is in bounds.
        let free = !wall && rocks + 1 < width;
        let offset = i32::from(free);
        prop_assert_eq!(report.moved.len(), usize::from(free));
        prop_assert!(board.has_token(Position::new(offset, 0), TokenKind::SprBaba));
        for col in 1..=rocks {
            prop_assert!(board.has_token(Position::new(col + offset, 0), TokenKind::SprRock));
        }
        prop_assert_eq!(board.object_count(), (rocks + 1 + i32::from(wall)) as usize);
    }
}
