//! Requests flowing from the controller into the board.

use serde::{Deserialize, Serialize};

/// A requested state mutation.
///
/// Intents name players and tiles the way the presentation layer does, by
/// name. The board resolves the names; an unknown name makes the intent a
/// no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Move a player `delta` spaces around the ring.
    Move { player: String, delta: i64 },
    /// Buy the tile the player is standing on.
    Purchase { player: String },
    /// Mortgage one of the player's tiles.
    Mortgage { player: String, tile: String },
    /// Remove a player, handing their tiles to `beneficiary` (or back to the
    /// bank when `None`).
    Bankrupt {
        player: String,
        beneficiary: Option<String>,
    },
}

impl Intent {
    /// Move intent.
    pub fn move_by(player: impl Into<String>, delta: i64) -> Self {
        Intent::Move {
            player: player.into(),
            delta,
        }
    }

    /// Purchase intent.
    pub fn purchase(player: impl Into<String>) -> Self {
        Intent::Purchase {
            player: player.into(),
        }
    }

    /// Mortgage intent.
    pub fn mortgage(player: impl Into<String>, tile: impl Into<String>) -> Self {
        Intent::Mortgage {
            player: player.into(),
            tile: tile.into(),
        }
    }

    /// Bankruptcy intent.
    pub fn bankrupt(player: impl Into<String>, beneficiary: Option<&str>) -> Self {
        Intent::Bankrupt {
            player: player.into(),
            beneficiary: beneficiary.map(str::to_string),
        }
    }

    /// Name of the player making the request.
    #[must_use]
    pub fn player(&self) -> &str {
        match self {
            Intent::Move { player, .. }
            | Intent::Purchase { player }
            | Intent::Mortgage { player, .. }
            | Intent::Bankrupt { player, .. } => player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Intent::move_by("Ada", 7),
            Intent::Move { player: "Ada".into(), delta: 7 }
        );
        assert_eq!(Intent::purchase("Ada").player(), "Ada");
        assert_eq!(
            Intent::bankrupt("Ada", Some("Bo")),
            Intent::Bankrupt { player: "Ada".into(), beneficiary: Some("Bo".into()) }
        );
        assert_eq!(Intent::mortgage("Bo", "Baltic").player(), "Bo");
    }

    #[test]
    fn test_intent_serialization() {
        let intent = Intent::mortgage("Ada", "Baltic");
        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"kind\":\"MORTGAGE\""));

        let deserialized: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, deserialized);
    }
}
