//! Traits describing the external collaborators.
//!
//! The engine consumes route analysis, world queries, navigation and
//! interaction primitives, and dialog handling from whatever hosts it. Each
//! concern is one small trait; [`Collaborators`] bundles borrowed trait
//! objects so the resolver can take everything in one argument without hard
//! coupling to concrete implementations.
mod dialog;
mod interact;
mod nav;
mod route;
mod world;

pub use dialog::DialogOracle;
pub use interact::InteractOracle;
pub use nav::NavOracle;
pub use route::RouteOracle;
pub use world::WorldOracle;

use path_core::{RuleContext, Tile};

/// One of each collaborator, borrowed for the duration of a resolution call.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub route: &'a dyn RouteOracle,
    pub world: &'a dyn WorldOracle,
    pub nav: &'a dyn NavOracle,
    pub interact: &'a dyn InteractOracle,
    pub dialog: &'a dyn DialogOracle,
}

impl<'a> Collaborators<'a> {
    pub fn with_all(
        route: &'a dyn RouteOracle,
        world: &'a dyn WorldOracle,
        nav: &'a dyn NavOracle,
        interact: &'a dyn InteractOracle,
        dialog: &'a dyn DialogOracle,
    ) -> Self {
        Self {
            route,
            world,
            nav,
            interact,
            dialog,
        }
    }
}

/// Adapts the world oracle into the rule-condition seam of the decision
/// layer.
pub(crate) struct WorldRuleContext<'a>(pub &'a dyn WorldOracle);

impl RuleContext for WorldRuleContext<'_> {
    fn player_tile(&self) -> Tile {
        self.0.player_tile()
    }

    fn object_present(&self, name: &str, action: &str, near: Tile, radius: i32) -> bool {
        self.0
            .objects_near(near, radius)
            .iter()
            .any(|object| object.name == name && object.has_action(action))
    }

    fn npc_present(&self, name: &str, action: &str) -> bool {
        self.0.npc_with_action(name, action).is_some()
    }
}
