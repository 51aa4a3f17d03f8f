//! Two-sided tunnel automaton.
//!
//! One click starts the transit animation; confirmation is best effort. The
//! wait for the agent to surface at the opposite end merely gives the
//! progress monitor a head start, so its own expiry is not a failure.

use path_core::{Tile, WorldObject};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::handlers::Flow;
use crate::oracle::Collaborators;
use crate::wait::{Poll, Waiter};

pub(crate) fn traverse(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    object: &WorldObject,
    action: &str,
    exit: Tile,
) -> Result<Flow> {
    if !c.interact.click_object(object, &[action.to_string()]) {
        return Err(ResolveError::ClickRejected {
            object: object.name.clone(),
        });
    }

    waiter.until(cfg.tunnel_transit_wait_ms, || {
        if c.world.player_tile() == exit {
            Poll::Done
        } else {
            Poll::Pending
        }
    });

    Ok(Flow::Interacted)
}
