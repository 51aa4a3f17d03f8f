//! Action-selection policy.
//!
//! Some actions (toll payments, squeeze-past shortcuts) are strictly
//! preferable whenever legal, and plane-change actions must never be
//! shadowed by a same-plane action that would leave the agent stuck on the
//! wrong level. The tiers below encode that ordering; the final tier hands
//! the whole set to the executor, which tries the actions in order.

use crate::analysis::RouteAnalysis;
use crate::config::ResolverConfig;

/// Chooses which of the whitelisted `available` actions to attempt, in
/// priority order:
///
/// 1. any high-priority actions present: exactly that subset,
/// 2. assumed plane above the destination and the ascend action present:
///    only that,
/// 3. assumed plane below and the descend action present: only that,
/// 4. the underground-band heuristic (assumed Y past the band, both planes
///    at ground level) and the descend action present: only that,
/// 5. otherwise the full set.
///
/// Never returns an empty list when `available` is non-empty.
pub fn viable_actions(
    available: &[String],
    analysis: &RouteAnalysis,
    cfg: &ResolverConfig,
) -> Vec<String> {
    let high_priority = cfg.tables.high_priority_subset(available);
    if !high_priority.is_empty() {
        return high_priority;
    }

    let has = |label: &str| available.iter().any(|a| a == label);

    if analysis.assumed.plane > analysis.destination.plane && has(&cfg.ascend_action) {
        return vec![cfg.ascend_action.clone()];
    }
    if analysis.assumed.plane < analysis.destination.plane && has(&cfg.descend_action) {
        return vec![cfg.descend_action.clone()];
    }
    if analysis.assumed.y > cfg.underground_y_band
        && analysis.destination.plane == 0
        && analysis.assumed.plane == 0
        && has(&cfg.descend_action)
    {
        return vec![cfg.descend_action.clone()];
    }

    available.to_vec()
}
