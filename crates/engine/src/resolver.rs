//! Top-level resolution flow.
//!
//! One call resolves one obstacle: find the blocking object (special rule
//! or generic discovery), drive the interaction through the matching
//! automaton, then verify route progress. The caller serializes calls per
//! agent and retries with a fresh analysis when `false` comes back.

use path_core::{
    ObstacleKind, ResolverConfig, RouteAnalysis, SpecialRule, Tile, WorldObject, filter, rank,
    rules, select,
};

use crate::config::EngineConfig;
use crate::error::{ResolveError, Result};
use crate::handlers::{self, Flow};
use crate::monitor;
use crate::oracle::{Collaborators, WorldRuleContext};
use crate::wait::{Poll, Waiter};

/// Drives obstacle resolution against a live world.
///
/// Holds only immutable configuration and the wait RNG; all world state is
/// read fresh through the collaborators on every call.
pub struct ObstacleResolver {
    cfg: ResolverConfig,
    engine: EngineConfig,
    waiter: Waiter,
}

impl ObstacleResolver {
    pub fn new(cfg: ResolverConfig, engine: EngineConfig) -> Self {
        let waiter = Waiter::new(engine.poll_interval_ms);
        Self {
            cfg,
            engine,
            waiter,
        }
    }

    /// Deterministic wait jitter for reproducible runs.
    pub fn seeded(cfg: ResolverConfig, engine: EngineConfig, seed: u64) -> Self {
        let waiter = Waiter::seeded(seed, engine.poll_interval_ms);
        Self {
            cfg,
            engine,
            waiter,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.cfg
    }

    /// Resolves the obstacle the analysis is stuck on. Returns whether the
    /// interaction completed and route progress was observed.
    pub fn resolve(
        &mut self,
        c: &Collaborators<'_>,
        route: &[Tile],
        analysis: &RouteAnalysis,
    ) -> bool {
        match self.try_resolve(c, route, analysis) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("obstacle resolution failed: {}", err);
                false
            }
        }
    }

    fn try_resolve(
        &mut self,
        c: &Collaborators<'_>,
        route: &[Tile],
        analysis: &RouteAnalysis,
    ) -> Result<()> {
        let ctx = WorldRuleContext(c.world);
        match rules::first_match(analysis, &ctx, &self.cfg) {
            Some(rule) => {
                tracing::debug!("special rule matched: {}", rule.label);
                let object =
                    self.rule_target(c, rule, analysis)
                        .ok_or(ResolveError::NoCandidate {
                            near: rule.anchor_or(analysis.assumed),
                        })?;
                self.interact(c, route, &object, analysis, Some(rule))
            }
            None => {
                let mut candidates = self.discover(c, analysis.destination, analysis);
                if candidates.is_empty() {
                    if let Some(next) = analysis.next_tile {
                        candidates = self.discover(c, next, analysis);
                    }
                }
                let object = candidates
                    .into_iter()
                    .next()
                    .ok_or(ResolveError::NoCandidate {
                        near: analysis.destination,
                    })?;
                self.interact(c, route, &object, analysis, None)
            }
        }
    }

    /// Filtered and ranked candidates for a generic obstacle at `query`.
    fn discover(
        &self,
        c: &Collaborators<'_>,
        query: Tile,
        analysis: &RouteAnalysis,
    ) -> Vec<WorldObject> {
        let nearby = c
            .world
            .objects_near(c.world.player_tile(), self.cfg.object_search_radius);
        let mut candidates = filter::interactive_candidates(&nearby, query, analysis, &self.cfg);
        rank::sort_candidates(&mut candidates, query, analysis, &self.cfg);
        if !candidates.is_empty() {
            let order: Vec<String> = candidates
                .iter()
                .map(|o| format!("{} {:?}", o.name, o.actions))
                .collect();
            tracing::debug!("candidate order: {}", order.join(", "));
        }
        candidates
    }

    /// The nearest object matching exactly the rule's name and action
    /// around its anchor.
    fn rule_target(
        &self,
        c: &Collaborators<'_>,
        rule: &SpecialRule,
        analysis: &RouteAnalysis,
    ) -> Option<WorldObject> {
        let anchor = rule.anchor_or(analysis.assumed);
        let player = c.world.player_tile();
        c.world
            .objects_near(player, self.cfg.object_search_radius)
            .into_iter()
            .filter(|object| {
                object.name == rule.name
                    && object.has_action(rule.action)
                    && object.position.distance_to(anchor) <= self.cfg.rule_anchor_radius
            })
            .min_by_key(|object| object.position.distance_to(player))
    }

    fn interact(
        &mut self,
        c: &Collaborators<'_>,
        route: &[Tile],
        object: &WorldObject,
        analysis: &RouteAnalysis,
        rule: Option<&SpecialRule>,
    ) -> Result<()> {
        let current = c.route.analyze(route).ok_or(ResolveError::AnalysisUnavailable)?;
        let prior_destination = current.destination;

        // Bring the object into view first; a stationary agent with the
        // target off-screen will never see it become clickable.
        if !c.world.is_player_moving()
            && (!c.world.is_on_screen(object.id) || !c.world.is_clickable(object.id))
        {
            if !c.nav.click_minimap(analysis.destination) {
                return Err(ResolveError::ClickRejected {
                    object: "the minimap".to_string(),
                });
            }
        }

        let id = object.id;
        let visible = self.waiter.until(self.engine.clickable_wait_ms, || {
            if c.world.is_on_screen(id) && c.world.is_clickable(id) {
                Poll::Done
            } else {
                Poll::Pending
            }
        });
        if !visible {
            return Err(ResolveError::NeverClickable {
                object: object.name.clone(),
            });
        }

        let mut flow = Flow::Continue;
        if let Some(rule) = rule {
            flow = match rule.kind {
                ObstacleKind::Generic => Flow::Continue,
                ObstacleKind::CuttableBarrier => handlers::barrier::cut(
                    c,
                    &mut self.waiter,
                    &self.engine,
                    object,
                    rule.action,
                    analysis,
                )?,
                ObstacleKind::LockedDoor { through } => handlers::door::work_through(
                    c,
                    &mut self.waiter,
                    &self.engine,
                    object,
                    rule.action,
                    rule.anchor_or(object.position),
                    through,
                )?,
                ObstacleKind::Tunnel { exit } => handlers::tunnel::traverse(
                    c,
                    &mut self.waiter,
                    &self.engine,
                    object,
                    rule.action,
                    exit,
                )?,
                ObstacleKind::PathShortcut => {
                    return handlers::shortcut::walk_past(c, &self.engine, route);
                }
                ObstacleKind::TimedHazard { npc, action } => {
                    handlers::hazard::clear(c, &mut self.waiter, &self.engine, npc, action)?
                }
            };
        }

        if flow == Flow::Continue {
            let actions = match rule {
                Some(rule) => vec![rule.action.to_string()],
                None => {
                    let whitelisted = self.cfg.tables.whitelisted(&object.actions);
                    select::viable_actions(&whitelisted, analysis, &self.cfg)
                }
            };
            self.click_object(c, object, &actions)?;
        }

        let guarded = monitor::is_guarded_door(&object.name);
        if guarded {
            monitor::guard_quiz_wait(c, &mut self.waiter, &self.engine, object, analysis.next_tile)?;
        }

        let outcome = monitor::await_progress(
            c,
            &mut self.waiter,
            &self.engine,
            route,
            prior_destination,
            current.next_tile,
            object,
            guarded,
        );
        if guarded {
            self.waiter.rest(self.engine.guard_exit_settle_ms);
        }
        outcome
    }

    /// Ordered attempt over the chosen actions, diverting closed hatches
    /// into their recursive automaton.
    fn click_object(
        &mut self,
        c: &Collaborators<'_>,
        object: &WorldObject,
        actions: &[String],
    ) -> Result<()> {
        if handlers::hatch::is_closed_hatch(object, actions) {
            return handlers::hatch::descend(
                c,
                &mut self.waiter,
                &self.engine,
                object,
                handlers::hatch::MAX_DEPTH,
            );
        }

        if !c.interact.click_object(object, actions) {
            tracing::debug!(
                "interacting with {} at {} via {:?} failed",
                object.name,
                object.position,
                actions
            );
            return Err(ResolveError::ClickRejected {
                object: object.name.clone(),
            });
        }
        tracing::debug!(
            "interacting with {} at {} via {:?}",
            object.name,
            object.position,
            actions
        );
        self.waiter.rest(self.engine.post_click_settle_ms);
        Ok(())
    }
}
