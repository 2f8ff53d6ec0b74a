//! Sidebar dashboard card composition.
//!
//! `AdminSidebarCard` is a thin presentation shell for administrative
//! contexts: it owns no state beyond its content and always requests the
//! `Dashboard` variant with the fixed left-accent styling class from its
//! card-rendering collaborator. The collaborator is a trait seam so hosts
//! can bring their own renderer; `ConsoleCardRenderer` is the terminal
//! implementation. Real implementation: `ConsoleCardRenderer`. Test
//! double: any recording `CardRenderer`.

use console::style;

use crate::errors::RenderError;

/// Card variants a rendering collaborator may support.
///
/// Collaborators must support at least `Dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Default,
    Dashboard,
}

impl std::fmt::Display for CardVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardVariant::Default => f.write_str("default"),
            CardVariant::Dashboard => f.write_str("dashboard"),
        }
    }
}

/// Styling class the sidebar shell passes for its distinguishing
/// left-accent treatment.
pub const DASHBOARD_ACCENT_CLASS: &str = "card-dashboard accent-left";

/// External card-rendering collaborator.
pub trait CardRenderer {
    /// Render a card of the given variant with a styling class.
    ///
    /// Returns [`RenderError::UnsupportedVariant`] when the collaborator
    /// cannot produce the requested variant.
    fn render_card(
        &self,
        variant: CardVariant,
        class: &str,
        title: &str,
        lines: &[String],
    ) -> Result<String, RenderError>;
}

/// Dashboard card shell for administrative sidebar contexts.
///
/// Pure composition: no state, no computation, no error paths of its
/// own — the variant and styling class are fixed.
#[derive(Debug, Clone, Default)]
pub struct AdminSidebarCard {
    title: String,
    lines: Vec<String>,
}

impl AdminSidebarCard {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    /// Append a content line to the card body.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Render through the collaborator, always as the dashboard variant.
    pub fn render<R: CardRenderer>(&self, renderer: &R) -> Result<String, RenderError> {
        renderer.render_card(
            CardVariant::Dashboard,
            DASHBOARD_ACCENT_CLASS,
            &self.title,
            &self.lines,
        )
    }
}

/// Terminal card renderer: frames the body with a styled left accent
/// border, the closest console analogue of the dashboard card treatment.
#[derive(Debug, Clone, Default)]
pub struct ConsoleCardRenderer;

impl CardRenderer for ConsoleCardRenderer {
    fn render_card(
        &self,
        variant: CardVariant,
        _class: &str,
        title: &str,
        lines: &[String],
    ) -> Result<String, RenderError> {
        let accent = match variant {
            CardVariant::Dashboard => style("▎").cyan().bold(),
            CardVariant::Default => style("▎").dim(),
        };

        let mut out = String::new();
        out.push_str(&format!("{}{}\n", accent, style(title).bold()));
        for line in lines {
            out.push_str(&format!("{}{}\n", accent, line));
        }
        Ok(out)
    }
}
