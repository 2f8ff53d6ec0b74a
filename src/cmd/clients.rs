//! Client listing and status commands.

use anyhow::Result;
use std::path::Path;

use auditdesk::announcer::StatusAnnouncer;
use auditdesk::client::ClientsFile;
use auditdesk::phase::AuditPhase;
use auditdesk::sidebar::{AdminSidebarCard, ConsoleCardRenderer};
use auditdesk::ui::icons::ANNOUNCE;
use auditdesk::ui::DashboardUI;

pub fn cmd_list(clients_path: &Path) -> Result<()> {
    if !clients_path.exists() {
        println!();
        println!(
            "No clients found. Export a clients file from the backend to {} first.",
            clients_path.display()
        );
        println!();
        return Ok(());
    }

    let cf = ClientsFile::load(clients_path)?;

    println!();
    println!("Clients loaded from: {}", clients_path.display());
    println!("Exported at: {}", cf.exported_at.format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("{:<10} {:<14} {:<20} Name", "Client", "Phase", "Label");
    println!(
        "{:<10} {:<14} {:<20} ----",
        "--------", "------------", "------------------"
    );

    for client in &cf.clients {
        println!(
            "{:<10} {:<14} {:<20} {}",
            client.id,
            client.phase.as_str(),
            client.phase_label(),
            client.name
        );
    }
    println!();
    println!("{} clients", cf.clients.len());
    println!();
    Ok(())
}

pub fn cmd_status(clients_path: &Path, client_id: Option<&str>) -> Result<()> {
    let cf = ClientsFile::load(clients_path)?;

    match client_id {
        Some(id) => client_status(&cf, id),
        None => portfolio_status(&cf),
    }
}

fn client_status(cf: &ClientsFile, id: &str) -> Result<()> {
    let Some(client) = cf.get_client(id) else {
        anyhow::bail!("No client with id '{}' in the export", id);
    };

    println!();
    println!("Client Status");
    println!("=============");
    println!();
    println!("Id:    {}", client.id);
    println!("Name:  {}", client.name);
    println!(
        "Phase: {} ({}), step {} of {}",
        client.phase_label(),
        client.phase,
        client.phase.position(),
        AuditPhase::ALL.len()
    );
    match client.phase.next() {
        Some(next) => println!("Next:  {}", next.label()),
        None => println!("Next:  — (final phase)"),
    }

    // Preview of what assistive technology hears on this transition.
    let mut announcer = StatusAnnouncer::new();
    announcer.announce_phase_change(client.phase);
    let region = announcer.render();
    println!();
    println!("{}\"{}\"", ANNOUNCE, region.text);
    println!();
    Ok(())
}

fn portfolio_status(cf: &ClientsFile) -> Result<()> {
    let counts = cf.count_by_phase();

    let mut card = AdminSidebarCard::new("Audit dashboard");
    card.push_line(format!("{} active clients", cf.clients.len()));
    for phase in AuditPhase::ALL {
        let count = counts.get(&phase).copied().unwrap_or(0);
        if count > 0 {
            card.push_line(format!("{}: {}", phase.label(), count));
        }
    }

    // Card goes to stdout; the live bars render on stderr via indicatif.
    println!();
    print!("{}", card.render(&ConsoleCardRenderer)?);
    println!();

    let ui = DashboardUI::new(cf.clients.len() as u64);
    ui.show_clients(&cf.clients);
    ui.update(&counts);
    ui.finish();
    Ok(())
}
