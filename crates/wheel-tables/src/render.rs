//! Command parsing and table rendering.

use std::borrow::Cow;

use roulette_topology::{tables, NeighborRadius, NeighborTables, PocketClasses, Sector};
use serde::Serialize;

use crate::config::{OutputFormat, TablesConfig};
use crate::error::{Error, Result};

/// A parsed subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Groups(NeighborRadius),
    Variants(NeighborRadius),
    Covering { pocket: u8, radius: NeighborRadius },
    Sectors,
    Classify(u8),
    Dump(NeighborRadius),
}

impl Command {
    /// Parse arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let name = args.first().map(String::as_str);
        match (name, &args[args.len().min(1)..]) {
            (Some("groups"), [radius]) => Ok(Self::Groups(parse_radius(radius)?)),
            (Some("variants"), [radius]) => Ok(Self::Variants(parse_radius(radius)?)),
            (Some("dump"), [radius]) => Ok(Self::Dump(parse_radius(radius)?)),
            (Some("covering"), [pocket, radius]) => Ok(Self::Covering {
                pocket: parse_pocket(pocket)?,
                radius: parse_radius(radius)?,
            }),
            (Some("sectors"), []) => Ok(Self::Sectors),
            (Some("classify"), [pocket]) => Ok(Self::Classify(parse_pocket(pocket)?)),
            (Some(other), _) => Err(Error::Usage(format!(
                "unknown command or wrong arguments: {}",
                other
            ))),
            (None, _) => Err(Error::Usage("missing command".to_string())),
        }
    }
}

fn parse_radius(value: &str) -> Result<NeighborRadius> {
    let radius: usize = value
        .parse()
        .map_err(|_| Error::Usage(format!("radius must be a number, got {:?}", value)))?;
    Ok(NeighborRadius::new(radius)?)
}

fn parse_pocket(value: &str) -> Result<u8> {
    value
        .parse::<u8>()
        .ok()
        .filter(|&p| (p as usize) < roulette_topology::POCKET_COUNT)
        .ok_or_else(|| Error::Usage(format!("pocket must be 0..=36, got {:?}", value)))
}

/// Memoized tables for the European wheel, fresh ones otherwise.
fn tables_for(config: &TablesConfig, radius: NeighborRadius) -> Cow<'static, NeighborTables> {
    if config.is_european() {
        Cow::Borrowed(tables::european(radius))
    } else {
        tracing::debug!(radius = radius.value(), "deriving tables for custom wheel");
        Cow::Owned(NeighborTables::derive(&config.wheel, radius))
    }
}

#[derive(Serialize)]
struct SectorView {
    sector: Sector,
    pockets: Vec<u8>,
    coverage: f64,
}

#[derive(Serialize)]
struct GroupView<'a> {
    label: &'a str,
    center: u8,
    members: &'a [u8],
}

/// Render a command's output.
pub fn render(command: Command, config: &TablesConfig) -> Result<String> {
    tracing::debug!(?command, format = ?config.format, "rendering");

    match command {
        Command::Groups(radius) => {
            let tables = tables_for(config, radius);
            let groups: Vec<GroupView<'_>> = tables
                .groups()
                .iter()
                .map(|g| GroupView {
                    label: g.label(),
                    center: g.center(),
                    members: g.members(),
                })
                .collect();
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&groups)?),
                OutputFormat::Text => Ok(lines(
                    groups.iter().map(|g| format!("{:>2}  {}", g.center, g.label)),
                )),
            }
        }
        Command::Variants(radius) => {
            let tables = tables_for(config, radius);
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(tables.variants())?),
                OutputFormat::Text => Ok(tables.variants().join("\n")),
            }
        }
        Command::Covering { pocket, radius } => {
            let tables = tables_for(config, radius);
            let labels = tables.covering(pocket).unwrap_or_default();
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(labels)?),
                OutputFormat::Text => Ok(labels.join("\n")),
            }
        }
        Command::Sectors => {
            let sectors: Vec<SectorView> = Sector::ALL
                .into_iter()
                .map(|sector| SectorView {
                    sector,
                    pockets: sector.pockets(),
                    coverage: sector.coverage(),
                })
                .collect();
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&sectors)?),
                OutputFormat::Text => Ok(lines(sectors.iter().map(|s| {
                    let pockets: Vec<String> = s.pockets.iter().map(u8::to_string).collect();
                    format!("{} ({}): {}", s.sector, s.pockets.len(), pockets.join(", "))
                }))),
            }
        }
        Command::Classify(pocket) => {
            let classes = PocketClasses::of(pocket)
                .ok_or_else(|| Error::Usage(format!("pocket must be 0..=36, got {}", pocket)))?;
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&classes)?),
                OutputFormat::Text => Ok(classes.keys().join("\n")),
            }
        }
        Command::Dump(radius) => {
            let tables = tables_for(config, radius);
            match config.format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(tables.as_ref())?),
                OutputFormat::Text => {
                    let header = std::iter::once(format!("radius {}", radius));
                    let groups = tables
                        .groups()
                        .iter()
                        .map(|g| format!("{:>2}  {}", g.center(), g.label()));
                    let reverse = tables
                        .reverse_index()
                        .iter()
                        .map(|(pocket, labels)| format!("{:>2}: {}", pocket, labels.join(" ")));
                    Ok(lines(header.chain(groups).chain(reverse)))
                }
            }
        }
    }
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}
