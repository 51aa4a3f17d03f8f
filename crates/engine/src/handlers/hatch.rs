//! Recursive hatch automaton.
//!
//! A closed hatch must be opened before it can be descended, and the opened
//! hatch is a different world object that appears near the original. The
//! automaton opens, waits for the descend object to reveal itself, and
//! recurses into it; a hatch that is already open is descended directly.
//! `MAX_DEPTH` caps the recursion so oscillating world state (a hatch
//! flapping between open and closed) aborts instead of looping.

use path_core::{Tile, WorldObject};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::oracle::Collaborators;
use crate::wait::Waiter;

pub(crate) const HATCH_NAME: &str = "Trapdoor";
pub(crate) const OPEN_ACTION: &str = "Open";
pub(crate) const DESCEND_ACTION: &str = "Climb-down";

/// Upper bound on open/descend recursion per resolution call.
pub(crate) const MAX_DEPTH: u8 = 4;

/// A hatch that still needs its open step diverts the generic click path.
pub(crate) fn is_closed_hatch(object: &WorldObject, actions: &[String]) -> bool {
    object.name == HATCH_NAME && actions.iter().any(|action| action == OPEN_ACTION)
}

pub(crate) fn descend(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    object: &WorldObject,
    depth: u8,
) -> Result<()> {
    if depth == 0 {
        return Err(ResolveError::HatchTooDeep { limit: MAX_DEPTH });
    }

    if object.has_action(OPEN_ACTION) {
        if !c.interact.click_object(object, &[OPEN_ACTION.to_string()]) {
            tracing::debug!(
                "open click on {} refused, watching for the opened hatch",
                object.name
            );
        }
        let revealed = waiter.until_value(cfg.hatch_reveal_wait_ms, || {
            descend_object_near(c, cfg, object.position)
        });
        let next = revealed.ok_or_else(|| ResolveError::ClickRejected {
            object: object.name.clone(),
        })?;
        return descend(c, waiter, cfg, &next, depth - 1);
    }

    tracing::debug!(
        "interacting with {} at {} via {}",
        object.name,
        object.position,
        DESCEND_ACTION
    );
    if c.interact.click_object(object, &[DESCEND_ACTION.to_string()]) {
        waiter.rest(cfg.post_click_settle_ms);
        Ok(())
    } else {
        Err(ResolveError::ClickRejected {
            object: object.name.clone(),
        })
    }
}

fn descend_object_near(
    c: &Collaborators<'_>,
    cfg: &EngineConfig,
    position: Tile,
) -> Option<WorldObject> {
    c.world
        .objects_near(position, cfg.hatch_search_radius)
        .into_iter()
        .find(|object| object.has_action(DESCEND_ACTION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_core::ObjectId;

    fn hatch(actions: &[&str]) -> WorldObject {
        WorldObject {
            id: ObjectId(9),
            name: HATCH_NAME.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
            position: Tile::new(0, 0, 0),
            footprint: vec![Tile::new(0, 0, 0)],
        }
    }

    #[test]
    fn closed_hatch_is_detected_from_chosen_actions() {
        let object = hatch(&["Open", "Examine"]);
        let actions = vec![OPEN_ACTION.to_string()];
        assert!(is_closed_hatch(&object, &actions));
    }

    #[test]
    fn open_hatch_is_not_diverted() {
        let object = hatch(&["Climb-down"]);
        let actions = vec![DESCEND_ACTION.to_string()];
        assert!(!is_closed_hatch(&object, &actions));
    }

    #[test]
    fn other_objects_never_divert() {
        let mut object = hatch(&["Open"]);
        object.name = "Door".to_string();
        let actions = vec![OPEN_ACTION.to_string()];
        assert!(!is_closed_hatch(&object, &actions));
    }
}
