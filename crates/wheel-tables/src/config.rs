//! Environment-driven configuration.

use std::str::FromStr;

use roulette_topology::WheelOrder;

use crate::error::{Error, Result};

/// How tables are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config {
                key: "WHEEL_FORMAT",
                reason: format!("expected text or json, got {:?}", other),
            }),
        }
    }
}

/// Configuration for a wheel-tables run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablesConfig {
    /// Output format
    pub format: OutputFormat,

    /// Wheel to derive from (European unless overridden)
    pub wheel: WheelOrder,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            wheel: WheelOrder::EUROPEAN,
        }
    }
}

impl TablesConfig {
    /// Read `WHEEL_FORMAT` and `WHEEL_ORDER` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("WHEEL_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let wheel = match lookup("WHEEL_ORDER") {
            Some(value) => parse_wheel(&value)?,
            None => WheelOrder::EUROPEAN,
        };

        Ok(Self { format, wheel })
    }

    pub fn is_european(&self) -> bool {
        self.wheel == WheelOrder::EUROPEAN
    }
}

/// Parse a comma-separated pocket list into a validated wheel.
fn parse_wheel(value: &str) -> Result<WheelOrder> {
    let pockets = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u8>().map_err(|e| Error::Config {
                key: "WHEEL_ORDER",
                reason: format!("{:?} is not a pocket number: {}", p, e),
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(WheelOrder::new(&pockets)?)
}
