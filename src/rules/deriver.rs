//! Rule derivation: recompute sprite properties from the board.

use tracing::debug;

use super::sentence::{read_sentences, Predicate, Rule, Sentence};
use crate::board::Board;
use crate::tokens::Category;

/// Derives sprite properties from the `NOUN IS PROPERTY` sentences on a board.
///
/// A pass first clears every sprite kind's flags, then applies each sentence
/// found in column-major scan order. Nothing survives from one pass to the
/// next, so running a pass twice on an unchanged board is idempotent.
///
/// ## Example
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::rules::RuleDeriver;
/// use rule_grid::tokens::{Property, TokenKind};
///
/// let mut board = BoardBuilder::new(3, 1)
///     .sentence(0, 0, &[TokenKind::NounWall, TokenKind::Is, TokenKind::Stop])
///     .build()
///     .unwrap();
///
/// RuleDeriver::derive(&mut board);
/// assert!(board.registry().has(TokenKind::SprWall, Property::Stop));
/// ```
pub struct RuleDeriver;

impl RuleDeriver {
    /// Every `NOUN IS PROPERTY` rule currently spelled on the board, in scan
    /// order. Does not touch the registry.
    #[must_use]
    pub fn rules(board: &Board) -> Vec<Rule> {
        board
            .positions()
            .flat_map(|pos| read_sentences(board, pos, Category::Property))
            .filter_map(|sentence: Sentence| sentence.rule())
            .collect()
    }

    /// Run one derivation pass. Returns the rules that were applied.
    pub fn derive(board: &mut Board) -> Vec<Rule> {
        board.registry_mut().reset_sprite_properties();

        let rules = Self::rules(board);
        for rule in &rules {
            if let Predicate::Property(property) = rule.predicate {
                board.registry_mut().set(rule.subject, property, true);
                debug!(%rule, "rule derived");
            }
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::tokens::{Property, TokenKind};

    #[test]
    fn test_derive_horizontal() {
        let mut board = BoardBuilder::new(3, 1)
            .sentence(0, 0, &[TokenKind::NounWall, TokenKind::Is, TokenKind::Stop])
            .build()
            .unwrap();

        let rules = RuleDeriver::derive(&mut board);

        assert_eq!(rules.len(), 1);
        assert!(board.registry().has(TokenKind::SprWall, Property::Stop));
    }

    #[test]
    fn test_derive_vertical() {
        let mut board = BoardBuilder::new(1, 3)
            .vertical_sentence(0, 0, &[TokenKind::NounBaba, TokenKind::Is, TokenKind::You])
            .build()
            .unwrap();

        RuleDeriver::derive(&mut board);
        assert!(board.registry().has(TokenKind::SprBaba, Property::You));
    }

    #[test]
    fn test_derive_clears_stale_sprite_properties() {
        let mut board = BoardBuilder::new(3, 1)
            .property(TokenKind::SprRock, Property::Push)
            .build()
            .unwrap();

        RuleDeriver::derive(&mut board);
        assert!(!board.registry().has(TokenKind::SprRock, Property::Push));
    }

    #[test]
    fn test_derive_keeps_word_push() {
        let mut board = BoardBuilder::new(3, 1)
            .sentence(0, 0, &[TokenKind::NounWall, TokenKind::Is, TokenKind::Stop])
            .build()
            .unwrap();

        RuleDeriver::derive(&mut board);

        for kind in [TokenKind::NounWall, TokenKind::Is, TokenKind::Stop] {
            assert!(board.registry().has(kind, Property::Push), "{kind}");
        }
    }

    #[test]
    fn test_first_match_per_side() {
        let mut board = BoardBuilder::new(3, 1)
            .sentence(0, 0, &[TokenKind::NounWall, TokenKind::Is, TokenKind::Stop])
            .object(TokenKind::NounRock, 0, 0)
            .object(TokenKind::Push, 2, 0)
            .build()
            .unwrap();

        RuleDeriver::derive(&mut board);

        let registry = board.registry();
        assert!(registry.has(TokenKind::SprWall, Property::Stop));
        assert!(!registry.has(TokenKind::SprWall, Property::Push));
        assert!(!registry.has(TokenKind::SprRock, Property::Stop));
    }

    #[test]
    fn test_noun_noun_not_applied_as_property() {
        let mut board = BoardBuilder::new(3, 1)
            .sentence(0, 0, &[TokenKind::NounLava, TokenKind::Is, TokenKind::NounWater])
            .build()
            .unwrap();

        let rules = RuleDeriver::derive(&mut board);
        assert!(rules.is_empty());
        assert!(board.registry().get(TokenKind::SprLava).is_empty());
        assert!(RuleDeriver::rules(&board).is_empty());
    }
}
