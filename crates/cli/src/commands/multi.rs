//! `polycalc multi`: attackers folded over a line of defenders.

use anyhow::Result;
use clap::Parser;
use polycalc_core::{UnitResult, multi_combat_with};
use serde::Serialize;

use crate::context::Context;
use crate::render::{heading, outcome_line, print_json};

/// Several attackers against a line of defenders
#[derive(Parser, Debug)]
pub struct Multi {
    /// Comma-separated attackers, in attack order
    #[arg(short, long)]
    pub attackers: String,

    /// Comma-separated defenders; the next one is engaged when one falls
    #[arg(short, long)]
    pub defenders: String,
}

#[derive(Serialize)]
struct Entry<'a> {
    unit: &'a str,
    hp_before: u32,
    hp_after: u32,
    #[serde(flatten)]
    result: UnitResult,
}

#[derive(Serialize)]
struct Report<'a> {
    attackers: Vec<Entry<'a>>,
    defenders: Vec<Entry<'a>>,
}

impl Multi {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let attackers = ctx.parse_units(&self.attackers)?;
        let mut defenders = ctx.parse_units(&self.defenders)?;
        let defenders_before: Vec<u32> = defenders.iter().map(|d| d.current_hp()).collect();

        let result = multi_combat_with(&attackers, &mut defenders, &ctx.config);

        let attacker_names = names(&self.attackers);
        let defender_names = names(&self.defenders);

        let report = Report {
            attackers: attackers
                .iter()
                .zip(&result.attackers)
                .zip(&attacker_names)
                .map(|((unit, outcome), name)| Entry {
                    unit: name,
                    hp_before: unit.current_hp(),
                    hp_after: unit.current_hp().saturating_sub(outcome.damage),
                    result: *outcome,
                })
                .collect(),
            defenders: result
                .defenders
                .iter()
                .zip(defenders.iter().zip(&defenders_before))
                .zip(&defender_names)
                .map(|((outcome, (unit, before)), name)| Entry {
                    unit: name,
                    hp_before: *before,
                    hp_after: unit.current_hp(),
                    result: *outcome,
                })
                .collect(),
        };

        if ctx.json {
            return print_json(&report);
        }

        let sections = [
            ("attackers", &report.attackers),
            ("defenders", &report.defenders),
        ];
        for (title, entries) in sections {
            println!("{}", heading(title));
            for (index, entry) in entries.iter().enumerate() {
                let label = format!("{}. {}", index + 1, entry.unit);
                println!(
                    "{}",
                    outcome_line(
                        &label,
                        entry.hp_before,
                        entry.result.damage,
                        entry.result.status_effects,
                    )
                );
            }
        }
        Ok(())
    }
}

/// Splits a unit list the same way the parser does.
fn names(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
