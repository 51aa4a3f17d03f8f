//! Lockable door automaton.
//!
//! Attempts (lock picks, opens) fail silently most of the time; the only
//! trustworthy success signal is the agent standing on the through tile on
//! the far side. The attempt count is drawn once per resolution.

use path_core::{Tile, WorldObject};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::handlers::Flow;
use crate::oracle::Collaborators;
use crate::wait::{Poll, Waiter};

pub(crate) fn work_through(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    object: &WorldObject,
    action: &str,
    anchor: Tile,
    through: Tile,
) -> Result<Flow> {
    let actions = vec![action.to_string()];
    let attempts = waiter.pick(cfg.door_attempts);

    for _ in 0..attempts {
        if !c.interact.click_object(object, &actions) {
            continue;
        }
        if c.world.player_tile().distance_to(anchor) > 1 {
            waiter.until(cfg.door_adjacency_wait_ms, || {
                if c.world.player_tile().distance_to(anchor) <= 1 {
                    Poll::Done
                } else {
                    Poll::Pending
                }
            });
        }
        if c.world.player_tile() == through {
            return Ok(Flow::Interacted);
        }
    }

    Err(ResolveError::AutomatonExhausted {
        automaton: "door",
        attempts,
    })
}
