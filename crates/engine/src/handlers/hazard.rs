//! Timed hazard automaton.
//!
//! The hazard is an entity parked in front of the rule's object. Trigger
//! it, wait for it to leave the world, give the animation a settle margin,
//! then fall through to the generic click: clearing the hazard is not
//! progress by itself, the object behind it still has to be used.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::handlers::Flow;
use crate::oracle::Collaborators;
use crate::wait::{Poll, Waiter};

pub(crate) fn clear(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    name: &str,
    action: &str,
) -> Result<Flow> {
    let Some(npc) = c.world.npc_with_action(name, action) else {
        return Ok(Flow::Continue);
    };

    if c.interact.click_npc(&npc, action) {
        let gone = waiter.until(cfg.hazard_clear_wait_ms, || {
            if c.world.npc_with_action(name, action).is_none() {
                Poll::Done
            } else {
                Poll::Pending
            }
        });
        if gone {
            waiter.rest(cfg.hazard_settle_ms);
        } else {
            tracing::debug!("{} did not clear within the wait", name);
        }
    }

    Ok(Flow::Continue)
}
