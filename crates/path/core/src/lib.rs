//! Deterministic obstacle-resolution logic shared across the workspace.
//!
//! `path-core` defines the value types (tiles, route analyses, world-object
//! snapshots), the candidate filter and ranker, the action-selection policy,
//! and the special-rule registry. Everything here is pure: the same inputs
//! always produce the same outputs, which keeps the decision layer fully
//! unit testable. Live world access, waiting, and interaction live in the
//! `engine` crate and reach back into this one through small trait seams.
pub mod actions;
pub mod analysis;
pub mod config;
pub mod filter;
pub mod object;
pub mod rank;
pub mod rules;
pub mod select;
pub mod tile;

pub use actions::ActionTables;
pub use analysis::RouteAnalysis;
pub use config::ResolverConfig;
pub use object::{Npc, NpcId, ObjectId, WorldObject};
pub use rules::{ObstacleKind, RuleContext, SpecialRule, first_match, registry};
pub use tile::Tile;
