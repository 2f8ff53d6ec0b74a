//! Phase vocabulary listing command.

use anyhow::Result;

use auditdesk::phase::AuditPhase;

pub fn cmd_phases() -> Result<()> {
    println!();
    println!("Audit lifecycle phases");
    println!();
    println!("{:<6} {:<14} Label", "Step", "Phase");
    println!("{:<6} {:<14} -----", "----", "------------");

    for phase in AuditPhase::ALL {
        println!(
            "{:<6} {:<14} {}",
            phase.position(),
            phase.as_str(),
            phase.label()
        );
    }
    println!();
    Ok(())
}
