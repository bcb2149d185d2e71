//! `polycalc units`: catalog listing.

use anyhow::Result;
use clap::Parser;
use polycalc_content::UnitKind;
use polycalc_core::UnitStats;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::context::Context;
use crate::render::{heading, print_json, trait_list};

/// List the unit catalog
#[derive(Parser, Debug)]
pub struct Units {
    /// Only show units whose name or abbreviation contains this text
    pub filter: Option<String>,
}

#[derive(Serialize)]
struct Row {
    name: String,
    abbreviation: Option<&'static str>,
    stats: UnitStats,
}

impl Units {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let filter = self.filter.map(|f| f.to_ascii_lowercase());

        let builtin = UnitKind::iter().map(|kind| Row {
            name: kind.to_string(),
            abbreviation: Some(kind.abbreviation()),
            stats: kind.stats(),
        });
        let custom = ctx.catalog.custom().map(|(name, stats)| Row {
            name: name.to_string(),
            abbreviation: None,
            stats: stats.clone(),
        });

        let rows: Vec<Row> = builtin
            .chain(custom)
            .filter(|row| match &filter {
                Some(text) => {
                    row.name.contains(text.as_str())
                        || row.abbreviation.is_some_and(|code| code.contains(text.as_str()))
                }
                None => true,
            })
            .collect();

        if ctx.json {
            return print_json(&rows);
        }

        println!(
            "{}",
            heading(&format!(
                "{:<4} {:<14} {:>4} {:>4} {:>5} {:>5} {:>4} {:>4}  traits",
                "abbr", "name", "cost", "hp", "atk", "def", "mov", "rng"
            ))
        );
        for row in &rows {
            let stats = &row.stats;
            println!(
                "{:<4} {:<14} {:>4} {:>4} {:>5} {:>5} {:>4} {:>4}  {}",
                row.abbreviation.unwrap_or("-"),
                row.name,
                stats.cost,
                stats.max_hp,
                stats.attack.to_string(),
                stats.defense.to_string(),
                stats.movement,
                stats.range,
                trait_list(stats.traits),
            );
        }
        Ok(())
    }
}

