pub mod announcer;
pub mod backend;
pub mod client;
pub mod errors;
pub mod harness;
pub mod phase;
pub mod sidebar;
pub mod ui;

pub use client::{Client, ClientsFile};
pub use phase::AuditPhase;
