use path_core::{RouteAnalysis, Tile};

/// Route analysis and reachability provider.
///
/// `analyze` answers "how far along the route can the agent currently get";
/// it is recomputed fresh on every call, so successive results may differ as
/// the world changes. `None` means the analysis could not be produced at
/// all, which the engine treats as a failed resolution attempt.
pub trait RouteOracle {
    fn analyze(&self, route: &[Tile]) -> Option<RouteAnalysis>;

    /// Analysis as if the agent stood on `from` instead of its real tile.
    fn analyze_from(&self, route: &[Tile], from: Tile) -> Option<RouteAnalysis>;

    /// The route tile closest to the agent's current position.
    fn closest_route_tile(&self, route: &[Tile]) -> Option<Tile>;

    /// Whether `to` can be reached from `from` within `max_steps` of local
    /// search.
    fn is_reachable(&self, from: Tile, to: Tile, max_steps: u32) -> bool;
}
