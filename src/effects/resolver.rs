//! Elimination resolution over the whole board.

use tracing::debug;

use super::{Elimination, Fired};
use crate::board::Board;
use crate::core::{PlacedObject, Position};
use crate::error::Result;
use crate::rules::{read_sentences, Predicate};
use crate::tokens::{Category, Property, TokenKind};

/// Applies elimination effects to a board.
///
/// ## Example
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::core::Position;
/// use rule_grid::effects::EliminationEngine;
/// use rule_grid::tokens::{Property, TokenKind};
///
/// let mut board = BoardBuilder::new(2, 2)
///     .object(TokenKind::SprWater, 0, 0)
///     .object(TokenKind::SprRock, 0, 0)
///     .property(TokenKind::SprWater, Property::Sink)
///     .build()
///     .unwrap();
///
/// let fired = EliminationEngine::apply(&mut board).unwrap();
/// assert_eq!(fired.len(), 1);
/// assert_eq!(board.count_at(Position::new(0, 0)).unwrap(), 0);
/// ```
pub struct EliminationEngine;

impl EliminationEngine {
    /// Run all five effects in order. Returns everything that fired.
    pub fn apply(board: &mut Board) -> Result<Vec<Fired>> {
        let mut fired = Vec::new();
        for effect in Elimination::ORDER {
            fired.extend(Self::apply_effect(board, effect)?);
        }
        Ok(fired)
    }

    /// Run a single effect over the board.
    pub fn apply_effect(board: &mut Board, effect: Elimination) -> Result<Vec<Fired>> {
        let positions: Vec<Position> = board.positions().collect();
        let mut fired = Vec::new();

        for pos in positions {
            let record = match effect {
                Elimination::Explosion => Self::explode(board, pos)?,
                Elimination::Conversion => {
                    fired.extend(Self::convert(board, pos)?);
                    continue;
                }
                Elimination::Sink => Self::sink(board, pos)?,
                Elimination::Melt => Self::melt(board, pos)?,
                Elimination::Defeat => Self::defeat(board, pos)?,
            };

            if let Some(record) = record {
                debug!(effect = %record.effect, at = %record.at, removed = record.removed.len(), "elimination fired");
                fired.push(record);
            }
        }

        Ok(fired)
    }

    // === Effects ===

    fn explode(board: &mut Board, pos: Position) -> Result<Option<Fired>> {
        if !board.has_property(pos, Property::Boom) || board.count_at(pos)? <= 1 {
            return Ok(None);
        }

        let mut removed = Vec::new();
        for cell in pos.neighborhood() {
            if board.contains(cell) {
                removed.extend(board.clear(cell)?);
            }
        }
        Ok(Some(Fired::removal(Elimination::Explosion, pos, removed)))
    }

    fn convert(board: &mut Board, pos: Position) -> Result<Vec<Fired>> {
        let mut fired = Vec::new();

        for sentence in read_sentences(board, pos, Category::Noun) {
            let Some(rule) = sentence.rule() else {
                continue;
            };
            let Predicate::Becomes(target) = rule.predicate else {
                continue;
            };
            // X IS X would never reach a fixed point.
            if rule.subject == target {
                continue;
            }

            let (removed, created) = Self::replace_all(board, rule.subject, target)?;
            if !removed.is_empty() {
                debug!(%rule, at = %pos, converted = removed.len(), "sprites converted");
                fired.push(Fired {
                    effect: Elimination::Conversion,
                    at: pos,
                    removed,
                    created,
                });
            }
        }

        Ok(fired)
    }

    /// Replace every `from` sprite on the board with a fresh `to` sprite in
    /// the same cell, until none are left.
    fn replace_all(
        board: &mut Board,
        from: TokenKind,
        to: TokenKind,
    ) -> Result<(Vec<PlacedObject>, Vec<PlacedObject>)> {
        let mut removed = Vec::new();
        let mut created = Vec::new();

        loop {
            let found = board.find_kind(from);
            if found.is_empty() {
                break;
            }
            for (cell, object) in found {
                board.remove(object, cell)?;
                let fresh = board.spawn(to);
                board.place(fresh, cell)?;
                removed.push(object);
                created.push(fresh);
            }
        }

        Ok((removed, created))
    }

    fn sink(board: &mut Board, pos: Position) -> Result<Option<Fired>> {
        if !board.has_property(pos, Property::Sink) || board.count_at(pos)? <= 1 {
            return Ok(None);
        }
        let removed = board.clear(pos)?;
        Ok(Some(Fired::removal(Elimination::Sink, pos, removed)))
    }

    fn melt(board: &mut Board, pos: Position) -> Result<Option<Fired>> {
        Self::remove_when(board, pos, Elimination::Melt, Property::Hot, Property::Melt)
    }

    fn defeat(board: &mut Board, pos: Position) -> Result<Option<Fired>> {
        Self::remove_when(board, pos, Elimination::Defeat, Property::Defeat, Property::You)
    }

    /// Remove the `victim` objects of a cell that also holds `trigger`.
    fn remove_when(
        board: &mut Board,
        pos: Position,
        effect: Elimination,
        trigger: Property,
        victim: Property,
    ) -> Result<Option<Fired>> {
        if !board.has_property(pos, trigger) || !board.has_property(pos, victim) {
            return Ok(None);
        }

        let removed = board.objects_with_property(pos, victim)?;
        for &object in &removed {
            board.remove(object, pos)?;
        }
        Ok(Some(Fired::removal(effect, pos, removed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn p(col: i32, row: i32) -> Position {
        Position::new(col, row)
    }

    #[test]
    fn test_lone_boom_does_not_explode() {
        let mut board = BoardBuilder::new(3, 3)
            .object(TokenKind::SprBomb, 1, 1)
            .object(TokenKind::SprRock, 0, 0)
            .property(TokenKind::SprBomb, Property::Boom)
            .build()
            .unwrap();

        let fired = EliminationEngine::apply_effect(&mut board, Elimination::Explosion).unwrap();

        assert!(fired.is_empty());
        assert_eq!(board.object_count(), 2);
    }

    #[test]
    fn test_explosion_clears_neighbourhood() {
        let mut board = BoardBuilder::new(4, 4)
            .object(TokenKind::SprBomb, 1, 1)
            .object(TokenKind::SprBaba, 1, 1)
            .object(TokenKind::SprRock, 0, 0)
            .object(TokenKind::SprRock, 2, 2)
            .object(TokenKind::SprRock, 3, 3)
            .property(TokenKind::SprBomb, Property::Boom)
            .build()
            .unwrap();

        let fired = EliminationEngine::apply_effect(&mut board, Elimination::Explosion).unwrap();

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].removed.len(), 4);
        assert_eq!(board.object_count(), 1);
        assert!(board.has_token(p(3, 3), TokenKind::SprRock));
    }

    #[test]
    fn test_explosion_at_corner() {
        let mut board = BoardBuilder::new(2, 2)
            .object(TokenKind::SprBomb, 0, 0)
            .object(TokenKind::SprRock, 0, 0)
            .object(TokenKind::SprRock, 1, 1)
            .property(TokenKind::SprBomb, Property::Boom)
            .build()
            .unwrap();

        EliminationEngine::apply_effect(&mut board, Elimination::Explosion).unwrap();
        assert_eq!(board.object_count(), 0);
    }

    #[test]
    fn test_conversion() {
        let mut board = BoardBuilder::new(4, 2)
            .sentence(0, 0, &[TokenKind::NounRock, TokenKind::Is, TokenKind::NounFlag])
            .object(TokenKind::SprRock, 0, 1)
            .object(TokenKind::SprRock, 3, 1)
            .build()
            .unwrap();

        let fired = EliminationEngine::apply_effect(&mut board, Elimination::Conversion).unwrap();

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].at, p(1, 0));
        assert_eq!(fired[0].created.len(), 2);
        assert!(board.find_kind(TokenKind::SprRock).is_empty());
        assert!(board.has_token(p(0, 1), TokenKind::SprFlag));
        assert!(board.has_token(p(3, 1), TokenKind::SprFlag));
    }

    #[test]
    fn test_conversion_makes_fresh_objects() {
        let mut board = BoardBuilder::new(3, 2)
            .sentence(0, 0, &[TokenKind::NounRock, TokenKind::Is, TokenKind::NounFlag])
            .object(TokenKind::SprRock, 0, 1)
            .build()
            .unwrap();
        let old = board.first_of_kind(p(0, 1), TokenKind::SprRock).unwrap();

        EliminationEngine::apply_effect(&mut board, Elimination::Conversion).unwrap();

        let new = board.first_of_kind(p(0, 1), TokenKind::SprFlag).unwrap();
        assert_ne!(old.id, new.id);
    }

    #[test]
    fn test_self_conversion_is_ignored() {
        let mut board = BoardBuilder::new(3, 2)
            .sentence(0, 0, &[TokenKind::NounRock, TokenKind::Is, TokenKind::NounRock])
            .object(TokenKind::SprRock, 0, 1)
            .build()
            .unwrap();
        let old = board.first_of_kind(p(0, 1), TokenKind::SprRock).unwrap();

        let fired = EliminationEngine::apply_effect(&mut board, Elimination::Conversion).unwrap();

        assert!(fired.is_empty());
        assert_eq!(board.first_of_kind(p(0, 1), TokenKind::SprRock), Some(old));
    }

    #[test]
    fn test_chained_conversions_follow_scan_order() {
        // Rock -> Flag at column 1, Flag -> Wall at column 1 (vertical, lower down).
        let mut board = BoardBuilder::new(3, 6)
            .sentence(0, 0, &[TokenKind::NounRock, TokenKind::Is, TokenKind::NounFlag])
            .vertical_sentence(1, 2, &[TokenKind::NounFlag, TokenKind::Is, TokenKind::NounWall])
            .object(TokenKind::SprRock, 0, 5)
            .build()
            .unwrap();

        EliminationEngine::apply_effect(&mut board, Elimination::Conversion).unwrap();

        assert!(board.has_token(p(0, 5), TokenKind::SprWall));
    }

    #[test]
    fn test_sink_needs_company() {
        let mut board = BoardBuilder::new(2, 1)
            .object(TokenKind::SprWater, 0, 0)
            .object(TokenKind::SprWater, 1, 0)
            .object(TokenKind::SprBaba, 1, 0)
            .property(TokenKind::SprWater, Property::Sink)
            .build()
            .unwrap();

        let fired = EliminationEngine::apply_effect(&mut board, Elimination::Sink).unwrap();

        assert_eq!(fired.len(), 1);
        assert_eq!(board.count_at(p(0, 0)).unwrap(), 1);
        assert_eq!(board.count_at(p(1, 0)).unwrap(), 0);
    }

    #[test]
    fn test_melt_keeps_hot() {
        let mut board = BoardBuilder::new(1, 1)
            .object(TokenKind::SprLava, 0, 0)
            .object(TokenKind::SprBaba, 0, 0)
            .object(TokenKind::SprRock, 0, 0)
            .property(TokenKind::SprLava, Property::Hot)
            .property(TokenKind::SprBaba, Property::Melt)
            .build()
            .unwrap();

        EliminationEngine::apply_effect(&mut board, Elimination::Melt).unwrap();

        let kinds: Vec<_> = board.objects_at(p(0, 0)).unwrap().iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![TokenKind::SprLava, TokenKind::SprRock]);
    }

    #[test]
    fn test_defeat_removes_you() {
        let mut board = BoardBuilder::new(1, 1)
            .object(TokenKind::SprSkull, 0, 0)
            .object(TokenKind::SprBaba, 0, 0)
            .property(TokenKind::SprSkull, Property::Defeat)
            .property(TokenKind::SprBaba, Property::You)
            .build()
            .unwrap();

        EliminationEngine::apply_effect(&mut board, Elimination::Defeat).unwrap();

        assert!(board.has_token(p(0, 0), TokenKind::SprSkull));
        assert!(!board.has_token(p(0, 0), TokenKind::SprBaba));
        assert!(board.lost());
    }

    #[test]
    fn test_explosion_preempts_sink() {
        let mut board = BoardBuilder::new(2, 1)
            .object(TokenKind::SprBomb, 0, 0)
            .object(TokenKind::SprRock, 0, 0)
            .object(TokenKind::SprWater, 1, 0)
            .object(TokenKind::SprBaba, 1, 0)
            .property(TokenKind::SprBomb, Property::Boom)
            .property(TokenKind::SprWater, Property::Sink)
            .build()
            .unwrap();

        let fired = EliminationEngine::apply(&mut board).unwrap();

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].effect, Elimination::Explosion);
        assert_eq!(board.object_count(), 0);
    }
}
