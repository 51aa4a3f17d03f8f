//! Candidate ordering.
//!
//! Vertical connectors (stairs, ladders) are frequently co-located with
//! irrelevant scenery; proximity alone misranks them when a plane change is
//! the actual goal. The comparator therefore applies a vertical-traversal
//! preference before falling back to distance from the query coordinate.

use std::cmp::Ordering;

use crate::analysis::RouteAnalysis;
use crate::config::ResolverConfig;
use crate::object::WorldObject;
use crate::tile::Tile;

/// Sorts `candidates` ascending so the first element is the one to interact
/// with. Preference tiers:
///
/// 1. assumed plane above the destination: objects offering the ascend
///    action sort first,
/// 2. assumed plane below: objects offering the descend action sort first,
/// 3. planes equal but the assumed position further than
///    `plane_shortcut_distance` from the destination tile: objects offering
///    either vertical action sort first,
/// 4. otherwise distance from the query coordinate decides.
///
/// The sort is stable, so equally preferred objects keep enumeration order.
pub fn sort_candidates(
    candidates: &mut [WorldObject],
    query: Tile,
    analysis: &RouteAnalysis,
    cfg: &ResolverConfig,
) {
    candidates.sort_by(|a, b| compare(a, b, query, analysis, cfg));
}

fn compare(
    a: &WorldObject,
    b: &WorldObject,
    query: Tile,
    analysis: &RouteAnalysis,
    cfg: &ResolverConfig,
) -> Ordering {
    match (vertical_preference(a, analysis, cfg), vertical_preference(b, analysis, cfg)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .position
            .distance_to(query)
            .cmp(&b.position.distance_to(query)),
    }
}

fn vertical_preference(object: &WorldObject, analysis: &RouteAnalysis, cfg: &ResolverConfig) -> bool {
    let delta = analysis.plane_delta();
    if delta > 0 {
        return object.has_action(&cfg.ascend_action);
    }
    if delta < 0 {
        return object.has_action(&cfg.descend_action);
    }
    if analysis.assumed.distance_to(analysis.destination) > cfg.plane_shortcut_distance {
        return object.has_action(&cfg.ascend_action) || object.has_action(&cfg.descend_action);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectId;

    fn object(id: u64, actions: &[&str], position: Tile) -> WorldObject {
        WorldObject {
            id: ObjectId(id),
            name: format!("object-{id}"),
            actions: actions.iter().map(|a| a.to_string()).collect(),
            position,
            footprint: vec![position],
        }
    }

    #[test]
    fn nearest_first_when_planes_match() {
        let cfg = ResolverConfig::default();
        let query = Tile::new(0, 0, 0);
        let analysis = RouteAnalysis::new(query, Tile::new(2, 0, 0), None);
        let mut candidates = vec![
            object(1, &["Open"], Tile::new(4, 0, 0)),
            object(2, &["Open"], Tile::new(1, 0, 0)),
        ];
        sort_candidates(&mut candidates, query, &analysis, &cfg);
        assert_eq!(candidates[0].id, ObjectId(2));
    }

    #[test]
    fn ascend_capable_object_leads_when_assumed_above() {
        let cfg = ResolverConfig::default();
        let query = Tile::new(0, 0, 0);
        let analysis = RouteAnalysis::new(Tile::new(0, 0, 1), Tile::new(1, 0, 0), None);
        let mut candidates = vec![
            object(1, &["Open"], Tile::new(1, 0, 0)),
            object(2, &["Climb-up"], Tile::new(5, 0, 0)),
        ];
        sort_candidates(&mut candidates, query, &analysis, &cfg);
        assert_eq!(candidates[0].id, ObjectId(2));
    }

    #[test]
    fn descend_capable_object_leads_when_assumed_below() {
        let cfg = ResolverConfig::default();
        let query = Tile::new(0, 0, 0);
        let analysis = RouteAnalysis::new(Tile::new(0, 0, 0), Tile::new(1, 0, 1), None);
        let mut candidates = vec![
            object(1, &["Open"], Tile::new(1, 0, 0)),
            object(2, &["Climb-down"], Tile::new(6, 0, 0)),
        ];
        sort_candidates(&mut candidates, query, &analysis, &cfg);
        assert_eq!(candidates[0].id, ObjectId(2));
    }

    #[test]
    fn distant_destination_on_same_plane_prefers_vertical_connectors() {
        let cfg = ResolverConfig::default();
        let query = Tile::new(0, 0, 0);
        let analysis = RouteAnalysis::new(Tile::new(0, 0, 0), Tile::new(30, 0, 0), None);
        let mut candidates = vec![
            object(1, &["Open"], Tile::new(1, 0, 0)),
            object(2, &["Climb-down"], Tile::new(3, 0, 0)),
        ];
        sort_candidates(&mut candidates, query, &analysis, &cfg);
        assert_eq!(candidates[0].id, ObjectId(2));
    }

    #[test]
    fn stable_order_among_equally_preferred() {
        let cfg = ResolverConfig::default();
        let query = Tile::new(0, 0, 0);
        let analysis = RouteAnalysis::new(query, Tile::new(1, 0, 0), None);
        let mut candidates = vec![
            object(1, &["Open"], Tile::new(2, 0, 0)),
            object(2, &["Cross"], Tile::new(2, 0, 0)),
        ];
        sort_candidates(&mut candidates, query, &analysis, &cfg);
        assert_eq!(candidates[0].id, ObjectId(1));
    }
}
