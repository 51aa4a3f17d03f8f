//! Candidate discovery filter.
//!
//! Given the objects enumerated near the agent, keeps only those that could
//! plausibly be the obstacle blocking route progress at the query
//! coordinate. An empty result is a valid outcome meaning "no obstacle
//! found here"; the caller then retries at the next route tile if one
//! exists.

use crate::analysis::RouteAnalysis;
use crate::config::ResolverConfig;
use crate::object::WorldObject;
use crate::tile::Tile;

/// Applies every eligibility invariant to `objects` and returns the
/// survivors. An object qualifies only if all of the following hold:
///
/// - its name is not blacklisted,
/// - none of its actions are blacklisted,
/// - it sits within `destination_radius` of the analysis destination,
/// - at least one footprint tile sits within `footprint_radius` of `query`,
/// - its actions intersect the whitelist.
pub fn interactive_candidates(
    objects: &[WorldObject],
    query: Tile,
    analysis: &RouteAnalysis,
    cfg: &ResolverConfig,
) -> Vec<WorldObject> {
    objects
        .iter()
        .filter(|object| is_candidate(object, query, analysis, cfg))
        .cloned()
        .collect()
}

fn is_candidate(
    object: &WorldObject,
    query: Tile,
    analysis: &RouteAnalysis,
    cfg: &ResolverConfig,
) -> bool {
    if cfg.tables.is_name_blacklisted(&object.name) {
        return false;
    }
    if cfg.tables.has_blacklisted_action(&object.actions) {
        return false;
    }
    if object.position.distance_to(analysis.destination) > cfg.destination_radius {
        return false;
    }
    if object.footprint_distance_to(query) > cfg.footprint_radius {
        return false;
    }
    object
        .actions
        .iter()
        .any(|action| cfg.tables.whitelist.contains(action))
}
