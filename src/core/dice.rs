//! A pair of six-sided dice.

use serde::{Deserialize, Serialize};

use super::rng::{FaceSource, GameRng, ScriptedFaces};

/// Two dice sharing one face source.
///
/// Both faces start at 6 until the first roll.
pub struct Dice {
    source: Box<dyn FaceSource>,
    a: u8,
    b: u8,
}

impl Dice {
    /// Create dice drawing from the given source.
    pub fn new(source: impl FaceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            a: 6,
            b: 6,
        }
    }

    /// Create dice backed by a seeded [`GameRng`].
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create dice that replay the given `(a, b)` rolls.
    pub fn scripted(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self::new(ScriptedFaces::from_rolls(rolls))
    }

    /// Re-roll both dice.
    pub fn roll(&mut self) -> DiceFaces {
        self.a = self.source.next_face();
        self.b = self.source.next_face();
        self.faces()
    }

    /// The value of the first die.
    #[must_use]
    pub fn a(&self) -> u8 {
        self.a
    }

    /// The value of the second die.
    #[must_use]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Sum of the two dice.
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.a + self.b
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub fn is_double(&self) -> bool {
        self.a == self.b
    }

    /// Current faces as a value.
    #[must_use]
    pub fn faces(&self) -> DiceFaces {
        DiceFaces { a: self.a, b: self.b }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice").field("a", &self.a).field("b", &self.b).finish()
    }
}

/// The faces of one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFaces {
    pub a: u8,
    pub b: u8,
}

impl DiceFaces {
    /// Sum of the two faces.
    #[must_use]
    pub fn sum(self) -> u8 {
        self.a + self.b
    }

    /// Whether both faces match.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.a == self.b
    }
}
