/// Configuration options for the engine
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Abort on the first protocol error instead of reporting it
    pub strict_mode: bool,
    /// Colour the board display
    pub color: bool,
}

impl EngineOptions {
    pub fn new(strict_mode: bool, color: bool) -> Self {
        Self {
            strict_mode,
            color,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse().context("expected true or false")?,
            "color" => self.color = value.parse().context("expected true or false")?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: true,
            color: true,
        }
    }
}
