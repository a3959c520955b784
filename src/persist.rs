#![cfg(feature = "std")]
//! Save files: a [`GameSnapshot`] written as JSON, or as bincode when the
//! file name ends in `.bin`.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::game::{Game, GameSnapshot};

/// File used when `save` is given no name.
pub const DEFAULT_SAVE_PATH: &str = "save.json";

/// On-disk encoding of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Json,
    Bincode,
}

impl SaveFormat {
    /// `Bincode` for a `.bin` extension, `Json` otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") => SaveFormat::Bincode,
            _ => SaveFormat::Json,
        }
    }
}

/// Encode a match.
pub fn to_bytes(game: &Game, format: SaveFormat) -> anyhow::Result<Vec<u8>> {
    let snapshot = game.snapshot();
    let bytes = match format {
        SaveFormat::Json => serde_json::to_vec_pretty(&snapshot)?,
        SaveFormat::Bincode => bincode::serialize(&snapshot)?,
    };
    Ok(bytes)
}

/// Decode and validate a match.
pub fn from_bytes(bytes: &[u8], format: SaveFormat) -> anyhow::Result<Game> {
    let snapshot: GameSnapshot = match format {
        SaveFormat::Json => serde_json::from_slice(bytes)?,
        SaveFormat::Bincode => bincode::deserialize(bytes)?,
    };
    Ok(Game::from_snapshot(snapshot)?)
}

/// Write `game` to `path`, choosing the format from the extension.
pub fn save(game: &Game, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(game, SaveFormat::from_path(path))?;
    fs::write(path, bytes).with_context(|| format!("writing save file {}", path.display()))?;
    log::info!("saved match to {}", path.display());
    Ok(())
}

/// Read a match saved by [`save`].
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Game> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading save file {}", path.display()))?;
    let game = from_bytes(&bytes, SaveFormat::from_path(path))
        .with_context(|| format!("decoding save file {}", path.display()))?;
    log::info!("loaded match from {}", path.display());
    Ok(game)
}
