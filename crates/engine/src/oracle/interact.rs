use path_core::{Npc, WorldObject};

/// Single-interaction primitives.
///
/// A click either registers with the world or it does not; retry policy
/// belongs to the engine, not the primitive.
pub trait InteractOracle {
    /// Clicks `object` with the first of `actions` the world accepts.
    fn click_object(&self, object: &WorldObject, actions: &[String]) -> bool;

    fn click_npc(&self, npc: &Npc, action: &str) -> bool;

    /// Explicitly uses a carried cutting tool on `object` (two-step
    /// item-then-target interaction).
    fn use_tool_on(&self, object: &WorldObject) -> bool;
}
