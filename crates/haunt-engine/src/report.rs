//! Final report rendering.

use std::fmt::Write as _;

use haunt_core::{SimulationOutcome, Winner};

/// Render the outcome as a plain-text report.
pub fn render(outcome: &SimulationOutcome) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, outcome);
    out
}

fn write_report(out: &mut String, outcome: &SimulationOutcome) -> std::fmt::Result {
    writeln!(out, "==================== Haunting report ====================")?;
    let ghost = &outcome.ghost;
    writeln!(
        out,
        "The {} {} in the {} after {} ticks, leaving {} pieces of evidence.",
        ghost.class, ghost.exit, ghost.room, ghost.ticks, ghost.deposits
    )?;
    writeln!(out)?;

    writeln!(out, "Hunters:")?;
    for hunter in &outcome.hunters {
        writeln!(
            out,
            "  {:<16} {:<13} fear {:>3}  ghostly {}/{}  {} ({})",
            hunter.name,
            hunter.specialty,
            hunter.fear,
            hunter.ghostly_held,
            hunter.evidence.len(),
            hunter.exit,
            hunter.room
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Ghostly evidence:")?;
    let mut any = false;
    for item in outcome.evidence.iter().filter(|e| e.ghostly) {
        any = true;
        writeln!(out, "  {:<16} {} {:.3}", item.hunter, item.class, item.reading)?;
    }
    if !any {
        writeln!(out, "  (none)")?;
    }
    writeln!(out)?;

    let coverage: Vec<&str> = outcome.coverage.iter().map(|c| c.label()).collect();
    writeln!(
        out,
        "Evidence seen by hunters still standing: {}",
        if coverage.is_empty() {
            "none".to_owned()
        } else {
            coverage.join(", ")
        }
    )?;
    writeln!(out, "Hunters' guess: {}", outcome.hypothesis)?;
    writeln!(out, "Actual ghost:   {}", outcome.actual)?;
    if outcome.hypothesis_correct() {
        writeln!(out, "The hunters identified the ghost.")?;
    }
    let verdict = match outcome.winner {
        Winner::Hunters => format!(
            "The hunters win with {} ghostly items collected.",
            outcome.ghostly_total
        ),
        Winner::Ghost => "The ghost wins: every hunter fled in fear.".to_owned(),
        Winner::Undetermined => "No winner: the hunt ended without a verdict.".to_owned(),
    };
    writeln!(out, "{verdict}")?;
    Ok(())
}
