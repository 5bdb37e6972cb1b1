//! CLI commands for shelfpath

pub mod dispatch;
pub mod experiment;
pub mod nodes;
pub mod path;
pub mod reachable;
