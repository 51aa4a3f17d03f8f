use crate::tile::Tile;

/// Snapshot of how far along the route the agent can currently progress.
///
/// Produced fresh by the route oracle on every poll; never mutated here.
/// `assumed` is where the agent is presumed to stand, `destination` the
/// furthest route tile reachable from there, and `next_tile` the tile
/// immediately past the obstacle (when the route continues).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteAnalysis {
    pub assumed: Tile,
    pub destination: Tile,
    pub next_tile: Option<Tile>,
}

impl RouteAnalysis {
    pub const fn new(assumed: Tile, destination: Tile, next_tile: Option<Tile>) -> Self {
        Self {
            assumed,
            destination,
            next_tile,
        }
    }

    /// Plane difference sign: positive when the assumed position sits above
    /// the destination, negative when below.
    pub fn plane_delta(&self) -> i32 {
        self.assumed.plane - self.destination.plane
    }
}
