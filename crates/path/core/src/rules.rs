//! Declarative registry of irregular obstacles.
//!
//! Most obstacles are resolved generically by the filter/ranker/selector
//! pipeline. A fixed minority deviate: asymmetric two-sided objects, objects
//! anchored to a known tile independent of the analysis destination, and
//! objects whose correct action depends on comparing the analysis against a
//! hardcoded threshold. Each such obstacle gets one entry here. The registry
//! is evaluated top-to-bottom and the first matching rule wins; when a rule
//! matches, generic discovery is bypassed entirely.

use crate::analysis::RouteAnalysis;
use crate::config::ResolverConfig;
use crate::tile::Tile;

/// Live-state queries a rule condition may need beyond the analysis itself.
///
/// The engine adapts its world oracle into this; tests substitute a fake.
pub trait RuleContext {
    fn player_tile(&self) -> Tile;
    fn object_present(&self, name: &str, action: &str, near: Tile, radius: i32) -> bool;
    fn npc_present(&self, name: &str, action: &str) -> bool;
}

/// How the executor drives the interaction once a rule has matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ObstacleKind {
    /// Single click with the rule's action, then the normal progress wait.
    Generic,
    /// Repeated cutting until the barrier is gone and the destination
    /// region is reachable.
    CuttableBarrier,
    /// Repeated attempts until the agent stands on `through`.
    LockedDoor { through: Tile },
    /// Single click, then a best-effort wait for the agent to appear at the
    /// opposite end.
    Tunnel { exit: Tile },
    /// No interaction at all: walk a few route tiles past the obstacle.
    PathShortcut,
    /// An entity must be cleared out of the way before the rule's object
    /// can be used.
    TimedHazard {
        npc: &'static str,
        action: &'static str,
    },
}

type Condition = fn(&SpecialRule, &RouteAnalysis, &dyn RuleContext, &ResolverConfig) -> bool;

/// One declarative entry: which object, which action, where to look for it,
/// and the predicate deciding whether this rule governs the current
/// analysis.
#[derive(Clone, Copy)]
pub struct SpecialRule {
    pub label: &'static str,
    pub kind: ObstacleKind,
    pub name: &'static str,
    pub action: &'static str,
    /// Fixed lookup anchor; `None` means the assumed position.
    pub anchor: Option<Tile>,
    condition: Condition,
}

impl SpecialRule {
    pub fn matches(
        &self,
        analysis: &RouteAnalysis,
        ctx: &dyn RuleContext,
        cfg: &ResolverConfig,
    ) -> bool {
        (self.condition)(self, analysis, ctx, cfg)
    }

    pub fn anchor_or(&self, fallback: Tile) -> Tile {
        self.anchor.unwrap_or(fallback)
    }
}

impl std::fmt::Debug for SpecialRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecialRule")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("action", &self.action)
            .field("anchor", &self.anchor)
            .finish()
    }
}

// Fixed topology the rules below are anchored to.
const PASSAGE_BOOKCASE: Tile = Tile::new(3097, 3359, 0);
const PASSAGE_LEVER: Tile = Tile::new(3096, 3357, 0);
const WEST_DOOR: Tile = Tile::new(2565, 3356, 0);
const WEST_DOOR_FAR_SIDE: Tile = Tile::new(2564, 3356, 0);
const SEWER_DOOR: Tile = Tile::new(2601, 9482, 0);
const SEWER_DOOR_FAR_SIDE: Tile = Tile::new(2601, 9481, 0);
const TUNNEL_NORTH_END: Tile = Tile::new(3138, 3516, 0);
const TUNNEL_SOUTH_END: Tile = Tile::new(3141, 3513, 0);
const HALL_STAIRS: Tile = Tile::new(2899, 3565, 0);
const HALL_BALCONY: Tile = Tile::new(2205, 4934, 1);
const TOLL_GATE: Tile = Tile::new(3031, 3314, 0);
const CELLAR_WALL: Tile = Tile::new(3480, 9836, 0);
const CAVE_MOUTH: Tile = Tile::new(2690, 10125, 0);

/// How close the agent must already be for a door-side rule to apply.
const DOOR_NEARBY: i32 = 3;

fn object_near_assumed(
    rule: &SpecialRule,
    analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    cfg: &ResolverConfig,
) -> bool {
    ctx.object_present(rule.name, rule.action, analysis.assumed, cfg.rule_anchor_radius)
}

fn assumed_at_anchor(
    rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    rule.anchor == Some(analysis.assumed)
}

fn bookcase_side(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination.x >= PASSAGE_BOOKCASE.x && analysis.assumed == PASSAGE_BOOKCASE
}

fn lever_side(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination.x < PASSAGE_BOOKCASE.x && analysis.assumed == PASSAGE_BOOKCASE
}

fn west_door_locked_side(
    _rule: &SpecialRule,
    _analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    let player = ctx.player_tile();
    player.x >= WEST_DOOR.x && player.distance_to(WEST_DOOR) < DOOR_NEARBY
}

fn west_door_open_side(
    _rule: &SpecialRule,
    _analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    let player = ctx.player_tile();
    player.x < WEST_DOOR.x && player.distance_to(WEST_DOOR) < DOOR_NEARBY
}

fn sewer_door_locked_side(
    _rule: &SpecialRule,
    _analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    let player = ctx.player_tile();
    player.y <= SEWER_DOOR_FAR_SIDE.y && player.distance_to(SEWER_DOOR) < DOOR_NEARBY
}

fn sewer_door_open_side(
    _rule: &SpecialRule,
    _analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    let player = ctx.player_tile();
    player.y > SEWER_DOOR_FAR_SIDE.y && player.distance_to(SEWER_DOOR) < DOOR_NEARBY
}

fn stairs_link(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination == HALL_STAIRS && analysis.assumed == HALL_BALCONY
}

fn toll_gate(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination == TOLL_GATE
}

fn cellar_wall(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    _ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination == CELLAR_WALL || analysis.assumed == CELLAR_WALL
}

fn cave_boulder(
    _rule: &SpecialRule,
    analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    _cfg: &ResolverConfig,
) -> bool {
    analysis.destination == CAVE_MOUTH && ctx.npc_present("Boulder", "Roll")
}

/// Declaration order is load-bearing: `first_match` walks this table
/// top-to-bottom and stops at the first hit.
static REGISTRY: [SpecialRule; 18] = [
    SpecialRule {
        label: "web",
        kind: ObstacleKind::CuttableBarrier,
        name: "Web",
        action: "Slash",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "rockfall",
        kind: ObstacleKind::Generic,
        name: "Rockfall",
        action: "Mine",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "roots",
        kind: ObstacleKind::Generic,
        name: "Roots",
        action: "Chop",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "rockslide",
        kind: ObstacleKind::Generic,
        name: "Rockslide",
        action: "Climb-over",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "root",
        kind: ObstacleKind::Generic,
        name: "Root",
        action: "Step-over",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "vines",
        kind: ObstacleKind::Generic,
        name: "Vines",
        action: "Chop-down",
        anchor: None,
        condition: object_near_assumed,
    },
    SpecialRule {
        label: "passage-bookcase",
        kind: ObstacleKind::Generic,
        name: "Bookcase",
        action: "Search",
        anchor: Some(PASSAGE_BOOKCASE),
        condition: bookcase_side,
    },
    SpecialRule {
        label: "passage-lever",
        kind: ObstacleKind::Generic,
        name: "Lever",
        action: "Pull",
        anchor: Some(PASSAGE_LEVER),
        condition: lever_side,
    },
    SpecialRule {
        label: "west-door-locked",
        kind: ObstacleKind::LockedDoor {
            through: WEST_DOOR_FAR_SIDE,
        },
        name: "Door",
        action: "Pick-lock",
        anchor: Some(WEST_DOOR),
        condition: west_door_locked_side,
    },
    SpecialRule {
        label: "west-door-unlocked",
        kind: ObstacleKind::LockedDoor { through: WEST_DOOR },
        name: "Door",
        action: "Open",
        anchor: Some(WEST_DOOR),
        condition: west_door_open_side,
    },
    SpecialRule {
        label: "sewer-door-locked",
        kind: ObstacleKind::LockedDoor { through: SEWER_DOOR },
        name: "Door",
        action: "Pick-lock",
        anchor: Some(SEWER_DOOR),
        condition: sewer_door_locked_side,
    },
    SpecialRule {
        label: "sewer-door-unlocked",
        kind: ObstacleKind::LockedDoor {
            through: SEWER_DOOR_FAR_SIDE,
        },
        name: "Door",
        action: "Open",
        anchor: Some(SEWER_DOOR),
        condition: sewer_door_open_side,
    },
    SpecialRule {
        label: "tunnel-north",
        kind: ObstacleKind::Tunnel {
            exit: TUNNEL_SOUTH_END,
        },
        name: "Underwall tunnel",
        action: "Climb-into",
        anchor: Some(TUNNEL_NORTH_END),
        condition: assumed_at_anchor,
    },
    SpecialRule {
        label: "tunnel-south",
        kind: ObstacleKind::Tunnel {
            exit: TUNNEL_NORTH_END,
        },
        name: "Underwall tunnel",
        action: "Climb-into",
        anchor: Some(TUNNEL_SOUTH_END),
        condition: assumed_at_anchor,
    },
    SpecialRule {
        label: "hall-stairs",
        kind: ObstacleKind::Generic,
        name: "Stairs",
        action: "Climb-down",
        anchor: Some(HALL_STAIRS),
        condition: stairs_link,
    },
    SpecialRule {
        label: "toll-gate-bypass",
        kind: ObstacleKind::PathShortcut,
        name: "Gate",
        action: "Close",
        anchor: Some(TOLL_GATE),
        condition: toll_gate,
    },
    SpecialRule {
        label: "cellar-wall",
        kind: ObstacleKind::Generic,
        name: "Wall",
        action: "Search",
        anchor: Some(CELLAR_WALL),
        condition: cellar_wall,
    },
    SpecialRule {
        label: "cave-boulder",
        kind: ObstacleKind::TimedHazard {
            npc: "Boulder",
            action: "Roll",
        },
        name: "Cave",
        action: "Exit",
        anchor: Some(CAVE_MOUTH),
        condition: cave_boulder,
    },
];

/// The full rule table in declaration order.
pub fn registry() -> &'static [SpecialRule] {
    &REGISTRY
}

/// First rule whose condition holds for the current analysis, or `None`
/// when generic discovery applies.
pub fn first_match(
    analysis: &RouteAnalysis,
    ctx: &dyn RuleContext,
    cfg: &ResolverConfig,
) -> Option<&'static SpecialRule> {
    REGISTRY.iter().find(|rule| rule.matches(analysis, ctx, cfg))
}
