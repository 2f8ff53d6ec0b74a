//! Assistive-technology status announcements.
//!
//! A `StatusAnnouncer` owns the single current status message and renders
//! it into a polite live region: visible to screen readers, invisible to
//! sighted users. Politeness relies on value-change detection, so setting
//! the same message twice never re-triggers an announcement, and delivery
//! happens after the render pass completes rather than interrupting an
//! in-progress announcement. A newer message supersedes an undelivered
//! one; nothing is queued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::phase::AuditPhase;

/// Styling class carrying the visually-hidden presentation contract:
/// dimensionally collapsed, clipped, out of the tab order, but present
/// in the accessibility tree.
pub const VISUALLY_HIDDEN_CLASS: &str = "sr-only";

/// The concrete hiding rules a host stylesheet must apply to
/// [`VISUALLY_HIDDEN_CLASS`] for the contract to hold.
pub const VISUALLY_HIDDEN_STYLE: &str =
    "position:absolute;width:1px;height:1px;padding:0;margin:-1px;overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border:0";

/// A single delivered-or-pending announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    /// The message text
    pub text: String,
    /// When the message value changed
    pub at: DateTime<Utc>,
}

impl Announcement {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// The rendered live-region element, a deterministic function of the
/// current message.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveRegion {
    /// ARIA role; always `"status"`
    pub role: &'static str,
    /// Politeness level; always `"polite"`
    pub aria_live: &'static str,
    /// Visually-hidden styling class
    pub class: &'static str,
    /// Current message text (may be empty)
    pub text: String,
}

impl LiveRegion {
    /// Attribute pairs in render order, for hosts that build the element
    /// themselves.
    pub fn attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("role", self.role),
            ("aria-live", self.aria_live),
            ("class", self.class),
        ]
    }
}

/// Owner of the current status message and its delivery state.
#[derive(Debug, Default)]
pub struct StatusAnnouncer {
    message: String,
    pending: Option<Announcement>,
}

impl StatusAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message.
    ///
    /// Returns `true` when the value changed. An unchanged value is a
    /// no-op (no new announcement event). An empty message is valid: the
    /// region renders empty and any undelivered announcement is
    /// withdrawn, but no delivery event is produced.
    pub fn announce(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if message == self.message {
            return false;
        }

        self.pending = if message.is_empty() {
            None
        } else {
            tracing::debug!(text = %message, "status announcement scheduled");
            Some(Announcement::new(&message))
        };
        self.message = message;
        true
    }

    /// Announce a client phase transition.
    pub fn announce_phase_change(&mut self, phase: AuditPhase) -> bool {
        self.announce(phase_change_message(phase))
    }

    /// The current message value.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the live region for the current message.
    pub fn render(&self) -> LiveRegion {
        LiveRegion {
            role: "status",
            aria_live: "polite",
            class: VISUALLY_HIDDEN_CLASS,
            text: self.message.clone(),
        }
    }

    /// Take the announcement scheduled by the last value change, if any.
    ///
    /// Hosts call this after the render pass completes; that is what
    /// makes delivery polite rather than interrupting. Draining twice
    /// without a new value change yields nothing.
    pub fn take_pending(&mut self) -> Option<Announcement> {
        self.pending.take()
    }
}

/// The status text announced when a client moves to `phase`.
pub fn phase_change_message(phase: AuditPhase) -> String {
    format!("Phase updated to {}", phase.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exposes_message_in_polite_status_region() {
        let mut announcer = StatusAnnouncer::new();
        announcer.announce("Phase updated to Planlegging");

        let region = announcer.render();
        assert_eq!(region.role, "status");
        assert_eq!(region.aria_live, "polite");
        assert_eq!(region.class, VISUALLY_HIDDEN_CLASS);
        assert_eq!(region.text, "Phase updated to Planlegging");
    }

    #[test]
    fn test_render_with_empty_message_is_valid() {
        let announcer = StatusAnnouncer::new();
        let region = announcer.render();
        assert_eq!(region.text, "");
        assert_eq!(region.role, "status");
    }

    #[test]
    fn test_unchanged_message_does_not_reannounce() {
        let mut announcer = StatusAnnouncer::new();
        assert!(announcer.announce("Phase updated to Planlegging"));
        assert!(!announcer.announce("Phase updated to Planlegging"));

        // Exactly one delivery event across both calls.
        assert!(announcer.take_pending().is_some());
        assert!(announcer.take_pending().is_none());
    }

    #[test]
    fn test_render_is_deterministic_for_value() {
        let mut announcer = StatusAnnouncer::new();
        announcer.announce("Phase updated to Utførelse");
        assert_eq!(announcer.render(), announcer.render());
    }

    #[test]
    fn test_newer_message_supersedes_pending() {
        let mut announcer = StatusAnnouncer::new();
        announcer.announce("Phase updated to Planlegging");
        announcer.announce("Phase updated to Utførelse");

        let delivered = announcer.take_pending().unwrap();
        assert_eq!(delivered.text, "Phase updated to Utførelse");
        assert!(announcer.take_pending().is_none());
    }

    #[test]
    fn test_empty_message_withdraws_pending_without_event() {
        let mut announcer = StatusAnnouncer::new();
        announcer.announce("Phase updated to Planlegging");
        assert!(announcer.announce(""));

        assert!(announcer.take_pending().is_none());
        assert_eq!(announcer.render().text, "");
    }

    #[test]
    fn test_announce_phase_change_text() {
        let mut announcer = StatusAnnouncer::new();
        announcer.announce_phase_change(AuditPhase::Planning);
        assert_eq!(announcer.message(), "Phase updated to Planlegging");
        assert_eq!(
            phase_change_message(AuditPhase::Engagement),
            "Phase updated to Oppdragsvurdering"
        );
    }

    #[test]
    fn test_live_region_attributes() {
        let announcer = StatusAnnouncer::new();
        let attrs = announcer.render().attributes();
        assert_eq!(attrs[0], ("role", "status"));
        assert_eq!(attrs[1], ("aria-live", "polite"));
        assert_eq!(attrs[2], ("class", "sr-only"));
    }
}
