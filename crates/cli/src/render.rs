//! Text and JSON output.

use anyhow::{Context as _, Result};
use console::style;
use polycalc_core::{StatusEffects, TraitSet};
use serde::Serialize;

/// Prints any serializable value as pretty JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

/// Formats one unit's outcome: `label  before → after  -damage  effects`.
pub fn outcome_line(label: &str, before: u32, damage: u32, effects: StatusEffects) -> String {
    let after = before.saturating_sub(damage);
    let hp = if after == 0 {
        style(format!("{before:>2} → {after:<2}")).red().bold()
    } else {
        style(format!("{before:>2} → {after:<2}")).green()
    };

    let mut line = format!("  {label:<12} {hp}  {:>4}", format!("-{damage}"));
    if !effects.is_empty() {
        line.push_str(&format!("  {}", style(effect_list(effects)).yellow()));
    }
    line
}

pub fn effect_list(effects: StatusEffects) -> String {
    effects
        .effects()
        .map(|effect| effect.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn trait_list(traits: TraitSet) -> String {
    traits
        .traits()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn heading(text: &str) -> String {
    style(text).bold().to_string()
}
