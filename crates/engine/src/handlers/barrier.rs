//! Cuttable barrier automaton.
//!
//! The barrier regrows and cuts can whiff, so the loop re-queries the
//! object at its known position on every pass. Success requires both that
//! the barrier is gone and that the destination region is independently
//! confirmed reachable; one without the other means another agent's barrier
//! elsewhere on the tile stack is still in the way.

use path_core::{RouteAnalysis, Tile, WorldObject};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::handlers::Flow;
use crate::oracle::Collaborators;
use crate::wait::Waiter;

/// Item that lets the agent cut without equipping a blade.
const FALLBACK_TOOL: &str = "Knife";

pub(crate) fn cut(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    object: &WorldObject,
    action: &str,
    analysis: &RouteAnalysis,
) -> Result<Flow> {
    let position = object.position;
    let actions = vec![action.to_string()];
    let mut attempts: u32 = 0;

    while let Some(barrier) = barrier_at(c, position, action) {
        if c.world.cutting_tool_equipped() || c.world.inventory_contains(FALLBACK_TOOL) {
            c.interact.click_object(&barrier, &actions);
        } else if !c.interact.use_tool_on(&barrier) {
            tracing::debug!("no cutting tool available for {}", barrier.name);
        }
        if c.world.action_cursor_armed() {
            // cancel the half-armed use cursor with a no-op walk
            c.nav.blind_walk(c.world.player_tile());
        }

        if barrier.position.distance_to(c.world.player_tile()) <= 1 {
            waiter.rest(cfg.barrier_adjacent_settle_ms);
        } else {
            waiter.rest(cfg.barrier_far_settle_ms);
        }

        if region_open(c, cfg, analysis.assumed) && barrier_at(c, position, action).is_none() {
            return Ok(Flow::Interacted);
        }

        attempts += 1;
        if attempts >= cfg.barrier_attempts {
            return Err(ResolveError::AutomatonExhausted {
                automaton: "barrier",
                attempts: attempts.into(),
            });
        }
    }

    // The barrier vanished before a cut landed; only count it if the far
    // side actually opened up.
    if region_open(c, cfg, analysis.assumed) {
        Ok(Flow::Interacted)
    } else {
        Err(ResolveError::AutomatonExhausted {
            automaton: "barrier",
            attempts: attempts.into(),
        })
    }
}

fn barrier_at(c: &Collaborators<'_>, position: Tile, action: &str) -> Option<WorldObject> {
    c.world
        .objects_at(position)
        .into_iter()
        .find(|object| object.has_action(action))
}

fn region_open(c: &Collaborators<'_>, cfg: &EngineConfig, assumed: Tile) -> bool {
    c.route
        .is_reachable(c.world.player_tile(), assumed, cfg.reachable_max_steps)
}
