use path_core::Tile;

/// Minimap and blind-walk navigation primitives.
pub trait NavOracle {
    /// Clicks the minimap toward `tile`. Returns whether the click landed.
    fn click_minimap(&self, tile: Tile) -> bool;

    /// Hovers the minimap toward `tile` without clicking.
    fn hover_minimap(&self, tile: Tile);

    /// Walks toward `tile` without path assistance.
    fn blind_walk(&self, tile: Tile) -> bool;
}
