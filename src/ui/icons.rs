//! Shared UI icons and emojis.
//!
//! This module provides common emoji constants used across the UI
//! components for consistent visual styling.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");

// Dashboard indicators
pub static CLIENTS: Emoji<'_, '_> = Emoji("👥 ", "");
pub static PHASE: Emoji<'_, '_> = Emoji("📊 ", "[PH]");
pub static ANNOUNCE: Emoji<'_, '_> = Emoji("🔔 ", "[A11Y]");
