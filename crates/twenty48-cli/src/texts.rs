use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Localized user-facing strings, loaded from a JSON key→string table.
///
/// The game loop takes this table by reference and never hardcodes display
/// text, so swapping the JSON file swaps the language.
#[derive(Debug, Clone, Deserialize)]
pub struct GameTexts {
    /// Help line listing the move keys.
    pub controls: String,
    /// Prompt printed before each input read.
    pub ask_move: String,
    /// Printed when the entered token is not a move.
    pub not_valid_move: String,
    /// Printed once no move is possible.
    pub game_over: String,
}

impl GameTexts {
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read texts file {}", path.display()))?;
        let texts = serde_json::from_str(&contents)
            .with_context(|| format!("invalid texts table in {}", path.display()))?;
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_a_complete_table() {
        let json = r#"{
            "controls": "l/r/u/d",
            "ask_move": "> ",
            "not_valid_move": "nope",
            "game_over": "done"
        }"#;
        let texts: GameTexts = serde_json::from_str(json).unwrap();
        assert_eq!(texts.ask_move, "> ");
        assert_eq!(texts.game_over, "done");
    }

    #[test]
    fn it_rejects_missing_keys() {
        let json = r#"{ "controls": "l/r/u/d" }"#;
        assert!(serde_json::from_str::<GameTexts>(json).is_err());
    }
}
