//! Console settings: defaults, overridden by an optional TOML file, overridden by flags.

use crate::cli::Cli;
use derive_more::{Display, Error, From};
use reversi_engine::appearance::GlyphStyle;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "cannot read config file: {}", _0)]
    Read(std::io::Error),
    #[display(fmt = "cannot parse config file: {}", _0)]
    Parse(toml::de::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    Unicode,
    Ascii,
}

impl From<Glyphs> for GlyphStyle {
    fn from(glyphs: Glyphs) -> Self {
        match glyphs {
            Glyphs::Unicode => GlyphStyle::Unicode,
            Glyphs::Ascii => GlyphStyle::Ascii,
        }
    }
}

/// The contents of a config file. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub glyphs: Option<Glyphs>,
    pub coordinates: Option<bool>,
    pub log: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Fully resolved settings for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub glyphs: GlyphStyle,
    pub coordinates: bool,
    /// Filter directive for the log subscriber; None falls back to `RUST_LOG`.
    pub log: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphStyle::default(),
            coordinates: true,
            log: None,
        }
    }
}

impl ConsoleConfig {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();

        let glyphs = if cli.ascii {
            GlyphStyle::Ascii
        } else {
            file.glyphs.map(GlyphStyle::from).unwrap_or(defaults.glyphs)
        };
        let coordinates = if cli.no_coordinates {
            false
        } else {
            file.coordinates.unwrap_or(defaults.coordinates)
        };

        Self {
            glyphs,
            coordinates,
            log: cli.log.clone().or(file.log),
        }
    }
}
