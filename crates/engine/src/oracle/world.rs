use path_core::{Npc, ObjectId, Tile, WorldObject};

/// Read-only world state queries.
///
/// All reads are snapshots with no consistency guarantee between successive
/// calls; the engine re-queries instead of caching and treats "no change
/// observed within the timeout" as failure.
pub trait WorldOracle {
    /// Objects whose position lies within `radius` of `center`.
    fn objects_near(&self, center: Tile, radius: i32) -> Vec<WorldObject>;

    /// Objects standing exactly on `tile`.
    fn objects_at(&self, tile: Tile) -> Vec<WorldObject>;

    /// An interactable entity carrying the given name and action, if any.
    fn npc_with_action(&self, name: &str, action: &str) -> Option<Npc>;

    fn player_tile(&self) -> Tile;

    fn is_player_moving(&self) -> bool;

    fn is_on_screen(&self, id: ObjectId) -> bool;

    fn is_clickable(&self, id: ObjectId) -> bool;

    fn inventory_contains(&self, name: &str) -> bool;

    /// Whether the equipped weapon can cut a barrier directly.
    fn cutting_tool_equipped(&self) -> bool;

    /// Whether a use-target cursor is currently armed and waiting for a
    /// second click.
    fn action_cursor_armed(&self) -> bool;
}
