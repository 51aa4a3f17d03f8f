use std::fmt;

use crate::tile::Tile;

/// Unique identifier for a world object, stable for the lifetime of one
/// resolution call. On-screen and clickable status are queried live through
/// the world oracle by id rather than cached on the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for an interactable entity (e.g. a hazard that must be
/// cleared before an object behind it can be used).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcId(pub u64);

/// Read-only snapshot of an interactable world object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldObject {
    pub id: ObjectId,
    pub name: String,
    pub actions: Vec<String>,
    pub position: Tile,
    /// Every tile the object occupies. Empty means single-tile at `position`.
    pub footprint: Vec<Tile>,
}

impl WorldObject {
    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    /// Smallest distance from any footprint tile to `tile`.
    pub fn footprint_distance_to(&self, tile: Tile) -> i32 {
        self.footprint
            .iter()
            .map(|t| t.distance_to(tile))
            .min()
            .unwrap_or_else(|| self.position.distance_to(tile))
    }
}

/// Read-only snapshot of an interactable entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub actions: Vec<String>,
    pub position: Tile,
}
