use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::Args;
use minesweeper_core::{GameParams, Placement};

/// Board settings that take precedence over the config file.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct BoardArgs {
    /// Number of columns
    #[arg(long, env = "MINESWEEPER_WIDTH")]
    pub width: Option<usize>,

    /// Number of rows
    #[arg(long, env = "MINESWEEPER_HEIGHT")]
    pub height: Option<usize>,

    /// Number of mines to place
    #[arg(short, long, env = "MINESWEEPER_MINES")]
    pub mines: Option<usize>,

    /// `exact` or `with-replacement`
    #[arg(long, env = "MINESWEEPER_PLACEMENT")]
    pub placement: Option<Placement>,
}

impl BoardArgs {
    pub fn apply(self, params: GameParams) -> GameParams {
        GameParams {
            width: self.width.unwrap_or(params.width),
            height: self.height.unwrap_or(params.height),
            mines: self.mines.unwrap_or(params.mines),
            placement: self.placement.unwrap_or(params.placement),
        }
    }
}

/// Reads game parameters from a JSON file, or returns the defaults without one.
pub fn load(path: Option<&Path>) -> Result<GameParams> {
    let Some(path) = path else {
        return Ok(GameParams::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse(text: &str) -> Result<GameParams> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(load(None).unwrap(), GameParams::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/minesweeper.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let params = parse(r#"{ "mines": 20 }"#).unwrap();
        assert_eq!(params.mines, 20);
        assert_eq!(params.width, GameParams::default().width);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse(r#"{ "mines": "many" }"#).is_err());
    }

    #[test]
    fn arguments_override_file_values() {
        let file = parse(r#"{ "width": 9, "height": 9, "mines": 10 }"#).unwrap();
        let args = BoardArgs {
            mines: Some(30),
            placement: Some(Placement::WithReplacement),
            ..BoardArgs::default()
        };
        assert_eq!(
            args.apply(file),
            GameParams {
                width: 9,
                height: 9,
                mines: 30,
                placement: Placement::WithReplacement,
            }
        );
    }
}
