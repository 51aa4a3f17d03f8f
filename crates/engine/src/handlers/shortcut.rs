//! Walk-past shortcut.
//!
//! Some obstacles only need to be walked past, not clicked: the route
//! continues on the same side of the map and the object merely sits on it.
//! Advance a fixed number of route tiles beyond the point nearest the agent
//! and walk there blind, skipping interaction and progress verification
//! alike.

use path_core::Tile;

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::oracle::Collaborators;

pub(crate) fn walk_past(c: &Collaborators<'_>, cfg: &EngineConfig, route: &[Tile]) -> Result<()> {
    let near = c
        .route
        .closest_route_tile(route)
        .ok_or(ResolveError::RouteExhausted)?;
    let index = route.iter().position(|tile| *tile == near).unwrap_or(0);
    let target = (index + cfg.shortcut_advance).min(route.len().saturating_sub(1));
    let tile = *route.get(target).ok_or(ResolveError::RouteExhausted)?;

    if c.nav.blind_walk(tile) {
        Ok(())
    } else {
        Err(ResolveError::WalkRejected { tile })
    }
}
