//! Terminal dashboard for the client portfolio, rendered via `indicatif`
//! progress bars.
//!
//! One bar per audit phase, stacked in workflow order, each showing how
//! many clients currently sit in that phase. Per-client detail lines and
//! the sidebar card are printed above the bars through `MultiProgress`
//! so they do not tear the rendering.

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

use crate::client::Client;
use crate::phase::AuditPhase;
use crate::ui::icons::CLIENTS;

pub struct DashboardUI {
    multi: MultiProgress,
    phase_bars: Vec<(AuditPhase, ProgressBar)>,
}

impl DashboardUI {
    /// Create the dashboard with one bar per phase, sized to the
    /// portfolio.
    ///
    /// # Arguments
    /// * `total_clients` — number of clients in the portfolio, sizes
    ///   every phase bar
    pub fn new(total_clients: u64) -> Self {
        let multi = MultiProgress::new();

        let phase_style = ProgressStyle::default_bar()
            .template("{prefix:.bold.dim} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("progress bar template is a valid static string")
            .progress_chars("█▓▒░");

        let phase_bars = AuditPhase::ALL
            .iter()
            .map(|&phase| {
                let bar = multi.add(ProgressBar::new(total_clients));
                bar.set_style(phase_style.clone());
                bar.set_prefix(format!("{:<18}", phase.label()));
                (phase, bar)
            })
            .collect();

        Self { multi, phase_bars }
    }

    /// Print a line via `MultiProgress`, falling back to `eprintln!` if
    /// the rich UI fails.
    pub fn print_line(&self, msg: impl AsRef<str>) {
        if self.multi.println(msg.as_ref()).is_err() {
            eprintln!("{}", msg.as_ref());
        }
    }

    /// Set each phase bar to the current client count for that phase.
    pub fn update(&self, counts: &BTreeMap<AuditPhase, usize>) {
        for (phase, bar) in &self.phase_bars {
            bar.set_position(counts.get(phase).copied().unwrap_or(0) as u64);
        }
    }

    /// Print the per-client detail lines above the bars.
    pub fn show_clients(&self, clients: &[Client]) {
        self.print_line(format!(
            "{}{}",
            CLIENTS,
            style(format!("{} clients", clients.len())).bold()
        ));
        for client in clients {
            self.print_line(format!("  {}", client_line(client)));
        }
    }

    /// Finish all bars, leaving the final counts on screen.
    pub fn finish(&self) {
        for (_, bar) in &self.phase_bars {
            bar.abandon();
        }
    }
}

/// One-line client summary: name, phase label, workflow position.
pub fn client_line(client: &Client) -> String {
    format!(
        "{} — {} (step {}/{})",
        client.name,
        client.phase_label(),
        client.phase.position(),
        AuditPhase::ALL.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_line_shows_label_and_position() {
        let client = Client::new("c-002", "Nordlys Regnskap AS", AuditPhase::Planning);
        assert_eq!(
            client_line(&client),
            "Nordlys Regnskap AS — Planlegging (step 3/6)"
        );
    }

    #[test]
    fn test_dashboard_has_one_bar_per_phase() {
        let ui = DashboardUI::new(10);
        assert_eq!(ui.phase_bars.len(), AuditPhase::ALL.len());
        ui.finish();
    }
}
