//! Post-interaction progress verification.
//!
//! An interaction only counts once the route analysis, recomputed from the
//! original route, reports a destination different from the one captured
//! before the click. Conversations that interrupt the wait are answered and
//! polling continues; when the agent lingers next to the object with the
//! next waypoint still far away, a minimap hover nudges the camera along.

use path_core::{Tile, WorldObject};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::oracle::Collaborators;
use crate::responses;
use crate::wait::{Poll, Waiter};

/// Doors watched by a gatekeeper who quizzes the agent before opening.
const GUARDED_DOOR_NAMES: &[&str] = &[
    "Gate of War",
    "Rickety door",
    "Oozing barrier",
    "Portal of Death",
];

pub(crate) fn is_guarded_door(name: &str) -> bool {
    GUARDED_DOOR_NAMES.contains(&name)
}

enum GuardSignal {
    Reachable,
    QuizAnswered,
}

/// Dedicated wait for guarded doors, run before the generic progress poll:
/// either the far side becomes reachable outright, or the gatekeeper's quiz
/// appears and gets answered from the fixed ladder.
pub(crate) fn guard_quiz_wait(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    object: &WorldObject,
    next_tile: Option<Tile>,
) -> Result<()> {
    let signal = waiter.until_value(cfg.guard_wait_ms, || {
        if let Some(next) = next_tile {
            if c.route
                .is_reachable(c.world.player_tile(), next, cfg.reachable_max_steps)
            {
                return Some(GuardSignal::Reachable);
            }
        }
        if c.dialog.is_open() {
            c.dialog.advance(responses::ACCESS_QUIZ);
            return Some(GuardSignal::QuizAnswered);
        }
        None
    });

    match signal {
        Some(GuardSignal::Reachable) => {
            waiter.rest(cfg.guard_reach_settle_ms);
            Ok(())
        }
        Some(GuardSignal::QuizAnswered) => Ok(()),
        None => Err(ResolveError::GuardUnanswered {
            object: object.name.clone(),
        }),
    }
}

/// Generic progress poll. `prior_destination` is the analysis destination
/// captured before the interaction; `lookahead` is the tile just past the
/// obstacle at that time.
pub(crate) fn await_progress(
    c: &Collaborators<'_>,
    waiter: &mut Waiter,
    cfg: &EngineConfig,
    route: &[Tile],
    prior_destination: Tile,
    lookahead: Option<Tile>,
    object: &WorldObject,
    door_flow: bool,
) -> Result<()> {
    let advanced = waiter.until(cfg.progress_wait_ms, || {
        if c.dialog.is_open() {
            // answering counts as this iteration's progress; keep polling
            c.dialog.advance(responses::GENERAL);
        }

        if let Some(fresh) = c.route.analyze(route) {
            if fresh.destination != prior_destination {
                return Poll::Done;
            }
        }

        if let Some(next) = lookahead {
            if let Some(ahead) = c.route.analyze_from(route, next) {
                let player = c.world.player_tile();
                if ahead.destination.distance_to(player) > cfg.hover_assist_distance
                    && !door_flow
                    && player.distance_to(object.position) <= cfg.near_object_distance
                {
                    c.nav.hover_minimap(ahead.destination);
                }
            }
        }

        Poll::Pending
    });

    if advanced {
        Ok(())
    } else {
        Err(ResolveError::NoProgress {
            object: object.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_door_names_are_recognised() {
        assert!(is_guarded_door("Rickety door"));
        assert!(is_guarded_door("Portal of Death"));
        assert!(!is_guarded_door("Door"));
    }
}
