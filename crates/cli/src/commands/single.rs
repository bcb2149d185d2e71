//! `polycalc single`: one exchange.

use anyhow::Result;
use clap::Parser;
use polycalc_core::{CombatResult, single_combat_with};
use serde::Serialize;

use crate::context::Context;
use crate::render::{heading, outcome_line, print_json};

/// One attacker against one defender
#[derive(Parser, Debug)]
pub struct Single {
    /// Attacking unit, e.g. `wa` or `ar:5-b`
    pub attacker: String,

    /// Defending unit, e.g. `de-d`
    pub defender: String,
}

#[derive(Serialize)]
struct Report<'a> {
    attacker: &'a str,
    defender: &'a str,
    #[serde(flatten)]
    result: CombatResult,
}

impl Single {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let attacker = ctx.parse_unit(&self.attacker)?;
        let defender = ctx.parse_unit(&self.defender)?;

        let result = single_combat_with(&attacker, &defender, &ctx.config);

        if ctx.json {
            return print_json(&Report {
                attacker: self.attacker.trim(),
                defender: self.defender.trim(),
                result,
            });
        }

        println!(
            "{}",
            heading(&format!(
                "{} attacks {}",
                self.attacker.trim(),
                self.defender.trim()
            ))
        );
        println!(
            "{}",
            outcome_line(
                "attacker",
                attacker.current_hp(),
                result.damage.to_attacker,
                result.status_effects.to_attacker,
            )
        );
        println!(
            "{}",
            outcome_line(
                "defender",
                defender.current_hp(),
                result.damage.to_defender,
                result.status_effects.to_defender,
            )
        );
        Ok(())
    }
}
