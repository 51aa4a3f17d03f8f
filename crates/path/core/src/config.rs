use crate::actions::ActionTables;

/// Tunable parameters of the decision layer.
///
/// Every value here is an empirically tuned constant tied to the world map.
/// They are exposed as named, overridable fields rather than inlined at use
/// sites; the defaults are the tuned values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Radius around the agent within which objects are enumerated at all.
    pub object_search_radius: i32,
    /// A candidate must sit within this radius of the analysis destination.
    pub destination_radius: i32,
    /// At least one footprint tile must sit within this radius of the query
    /// coordinate.
    pub footprint_radius: i32,
    /// Radius around a special rule's anchor tile (or the assumed position)
    /// within which the rule's object is looked up.
    pub rule_anchor_radius: i32,
    /// When the assumed position is further than this from the destination
    /// tile on the same plane, a multi-level shortcut is likely required and
    /// vertical connectors rank first.
    pub plane_shortcut_distance: i32,
    /// Y coordinates above this band denote underground map space mirrored
    /// onto plane 0; a descend action is then the way back to the surface.
    pub underground_y_band: i32,
    /// Label of the action that moves the agent one plane up.
    pub ascend_action: String,
    /// Label of the action that moves the agent one plane down.
    pub descend_action: String,
    pub tables: ActionTables,
}

impl ResolverConfig {
    pub const DEFAULT_OBJECT_SEARCH_RADIUS: i32 = 15;
    pub const DEFAULT_DESTINATION_RADIUS: i32 = 5;
    pub const DEFAULT_FOOTPRINT_RADIUS: i32 = 3;
    pub const DEFAULT_RULE_ANCHOR_RADIUS: i32 = 1;
    pub const DEFAULT_PLANE_SHORTCUT_DISTANCE: i32 = 20;
    pub const DEFAULT_UNDERGROUND_Y_BAND: i32 = 5000;
    pub const DEFAULT_ASCEND_ACTION: &str = "Climb-up";
    pub const DEFAULT_DESCEND_ACTION: &str = "Climb-down";

    pub fn new() -> Self {
        Self {
            object_search_radius: Self::DEFAULT_OBJECT_SEARCH_RADIUS,
            destination_radius: Self::DEFAULT_DESTINATION_RADIUS,
            footprint_radius: Self::DEFAULT_FOOTPRINT_RADIUS,
            rule_anchor_radius: Self::DEFAULT_RULE_ANCHOR_RADIUS,
            plane_shortcut_distance: Self::DEFAULT_PLANE_SHORTCUT_DISTANCE,
            underground_y_band: Self::DEFAULT_UNDERGROUND_Y_BAND,
            ascend_action: Self::DEFAULT_ASCEND_ACTION.to_string(),
            descend_action: Self::DEFAULT_DESCEND_ACTION.to_string(),
            tables: ActionTables::default(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
