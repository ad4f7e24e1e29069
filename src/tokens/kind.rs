//! The token catalog.
//!
//! Every word or sprite that can appear on a board is a [`TokenKind`]. The set
//! is closed: there is no way to add kinds at runtime.
//!
//! Kinds fall into four categories:
//! - **Noun** words name a sprite kind (`nounWall` names `sprWall`)
//! - the **Operator** word `Is`
//! - **Property** words (`You`, `Stop`, ...)
//! - **Sprites**, the things rules talk about

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::error::EngineError;

/// Category tag of a token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Noun,
    Operator,
    Property,
    Sprite,
}

/// Category of a token kind, with the data each category carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A noun word and the sprite kind it names.
    Noun { rep: TokenKind },
    /// The `Is` operator.
    Operator,
    /// A property word.
    Property(Property),
    /// A sprite.
    Sprite,
}

impl TokenClass {
    /// The plain category tag.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            TokenClass::Noun { .. } => Category::Noun,
            TokenClass::Operator => Category::Operator,
            TokenClass::Property(_) => Category::Property,
            TokenClass::Sprite => Category::Sprite,
        }
    }
}

/// Catalog of every word and sprite kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    // Properties
    You,
    Win,
    Stop,
    Push,
    Melt,
    Hot,
    Defeat,
    Sink,
    Boom,

    // Operators
    Is,

    // Sprites
    SprBaba,
    SprFlag,
    SprWall,
    SprWater,
    SprSkull,
    SprLava,
    SprRock,
    SprBomb,
    SprTile,
    SprGrass,
    SprFlower,
    SprBrick,

    // Nouns
    NounBaba,
    NounFlag,
    NounWall,
    NounWater,
    NounSkull,
    NounLava,
    NounRock,
    NounBomb,
}

impl TokenKind {
    /// Every kind in catalog order.
    pub const ALL: [TokenKind; 30] = [
        TokenKind::You,
        TokenKind::Win,
        TokenKind::Stop,
        TokenKind::Push,
        TokenKind::Melt,
        TokenKind::Hot,
        TokenKind::Defeat,
        TokenKind::Sink,
        TokenKind::Boom,
        TokenKind::Is,
        TokenKind::SprBaba,
        TokenKind::SprFlag,
        TokenKind::SprWall,
        TokenKind::SprWater,
        TokenKind::SprSkull,
        TokenKind::SprLava,
        TokenKind::SprRock,
        TokenKind::SprBomb,
        TokenKind::SprTile,
        TokenKind::SprGrass,
        TokenKind::SprFlower,
        TokenKind::SprBrick,
        TokenKind::NounBaba,
        TokenKind::NounFlag,
        TokenKind::NounWall,
        TokenKind::NounWater,
        TokenKind::NounSkull,
        TokenKind::NounLava,
        TokenKind::NounRock,
        TokenKind::NounBomb,
    ];

    /// Category and category data of this kind.
    #[must_use]
    pub const fn class(self) -> TokenClass {
        use TokenKind::*;
        match self {
            You => TokenClass::Property(Property::You),
            Win => TokenClass::Property(Property::Win),
            Stop => TokenClass::Property(Property::Stop),
            Push => TokenClass::Property(Property::Push),
            Melt => TokenClass::Property(Property::Melt),
            Hot => TokenClass::Property(Property::Hot),
            Defeat => TokenClass::Property(Property::Defeat),
            Sink => TokenClass::Property(Property::Sink),
            Boom => TokenClass::Property(Property::Boom),

            Is => TokenClass::Operator,

            SprBaba | SprFlag | SprWall | SprWater | SprSkull | SprLava | SprRock | SprBomb
            | SprTile | SprGrass | SprFlower | SprBrick => TokenClass::Sprite,

            NounBaba => TokenClass::Noun { rep: SprBaba },
            NounFlag => TokenClass::Noun { rep: SprFlag },
            NounWall => TokenClass::Noun { rep: SprWall },
            NounWater => TokenClass::Noun { rep: SprWater },
            NounSkull => TokenClass::Noun { rep: SprSkull },
            NounLava => TokenClass::Noun { rep: SprLava },
            NounRock => TokenClass::Noun { rep: SprRock },
            NounBomb => TokenClass::Noun { rep: SprBomb },
        }
    }

    /// Category tag of this kind.
    #[must_use]
    pub const fn category(self) -> Category {
        self.class().category()
    }

    /// The sprite kind a noun names, or `None` for other categories.
    ///
    /// ```
    /// use rule_grid::tokens::TokenKind;
    ///
    /// assert_eq!(TokenKind::NounWall.rep(), Some(TokenKind::SprWall));
    /// assert_eq!(TokenKind::SprWall.rep(), None);
    /// ```
    #[must_use]
    pub const fn rep(self) -> Option<TokenKind> {
        match self.class() {
            TokenClass::Noun { rep } => Some(rep),
            _ => None,
        }
    }

    /// The property this kind spells, if it is a property word.
    #[must_use]
    pub const fn as_property(self) -> Option<Property> {
        match self.class() {
            TokenClass::Property(p) => Some(p),
            _ => None,
        }
    }

    /// Check the category of this kind.
    #[must_use]
    pub fn is(self, category: Category) -> bool {
        self.category() == category
    }

    /// Canonical name, as used in level files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            You => "You",
            Win => "Win",
            Stop => "Stop",
            Push => "Push",
            Melt => "Melt",
            Hot => "Hot",
            Defeat => "Defeat",
            Sink => "Sink",
            Boom => "Boom",
            Is => "Is",
            SprBaba => "sprBaba",
            SprFlag => "sprFlag",
            SprWall => "sprWall",
            SprWater => "sprWater",
            SprSkull => "sprSkull",
            SprLava => "sprLava",
            SprRock => "sprRock",
            SprBomb => "sprBomb",
            SprTile => "sprTile",
            SprGrass => "sprGrass",
            SprFlower => "sprFlower",
            SprBrick => "sprBrick",
            NounBaba => "nounBaba",
            NounFlag => "nounFlag",
            NounWall => "nounWall",
            NounWater => "nounWater",
            NounSkull => "nounSkull",
            NounLava => "nounLava",
            NounRock => "nounRock",
            NounBomb => "nounBomb",
        }
    }

    /// Two-character code for text display.
    ///
    /// Words are upper case, sprites lower case.
    #[must_use]
    pub const fn code(self) -> &'static str {
        use TokenKind::*;
        match self {
            You => "YU",
            Win => "WN",
            Stop => "ST",
            Push => "PU",
            Melt => "ME",
            Hot => "HO",
            Defeat => "DF",
            Sink => "SI",
            Boom => "BM",
            Is => "IS",
            SprBaba => "ba",
            SprFlag => "fl",
            SprWall => "wa",
            SprWater => "wt",
            SprSkull => "sk",
            SprLava => "lv",
            SprRock => "ro",
            SprBomb => "bo",
            SprTile => "ti",
            SprGrass => "gr",
            SprFlower => "fw",
            SprBrick => "br",
            NounBaba => "BA",
            NounFlag => "FL",
            NounWall => "WA",
            NounWater => "WT",
            NounSkull => "SK",
            NounLava => "LV",
            NounRock => "RO",
            NounBomb => "BO",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownToken(s.to_string()))
    }
}
