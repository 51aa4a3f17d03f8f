//! Action label tables used by the candidate filter and action selector.
//!
//! Three tiers: the generic whitelist of labels recognised as "progress"
//! actions, a name blacklist and an action blacklist that disqualify an
//! otherwise matching object, and a small high-priority set that pre-empts
//! every other choice whenever one of its labels is available.

use std::collections::BTreeSet;

/// Ordered string sets driving object eligibility and action choice.
///
/// `BTreeSet` keeps iteration deterministic, which matters for the selector:
/// the high-priority intersection is returned in a stable order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTables {
    /// Actions recognised as making route progress.
    pub whitelist: BTreeSet<String>,
    /// Object names that never qualify as obstacles, whatever their actions.
    pub name_blacklist: BTreeSet<String>,
    /// Actions that disqualify an object outright (e.g. resource gathering
    /// verbs that happen to sit on route-adjacent scenery).
    pub action_blacklist: BTreeSet<String>,
    /// Actions strictly preferred whenever legal.
    pub high_priority: BTreeSet<String>,
}

impl ActionTables {
    pub fn is_name_blacklisted(&self, name: &str) -> bool {
        self.name_blacklist.contains(name)
    }

    pub fn has_blacklisted_action(&self, actions: &[String]) -> bool {
        actions.iter().any(|a| self.action_blacklist.contains(a))
    }

    /// Intersection of `actions` with the whitelist, preserving input order.
    pub fn whitelisted(&self, actions: &[String]) -> Vec<String> {
        actions
            .iter()
            .filter(|a| self.whitelist.contains(*a))
            .cloned()
            .collect()
    }

    /// Intersection of `actions` with the high-priority set, preserving
    /// input order.
    pub fn high_priority_subset(&self, actions: &[String]) -> Vec<String> {
        actions
            .iter()
            .filter(|a| self.high_priority.contains(*a))
            .cloned()
            .collect()
    }
}

impl Default for ActionTables {
    fn default() -> Self {
        let whitelist = [
            "Enter",
            "Cross",
            "Pass",
            "Open",
            "Close",
            "Walk-through",
            "Use",
            "Pass-through",
            "Exit",
            "Walk-Across",
            "Go-through",
            "Walk-across",
            "Climb",
            "Climb-up",
            "Climb-down",
            "Climb-over",
            "Climb over",
            "Climb-into",
            "Climb-through",
            "Board",
            "Jump-from",
            "Jump-across",
            "Jump-to",
            "Squeeze-through",
            "Jump-over",
            "Pay-toll(10gp)",
            "Step-over",
            "Walk-down",
            "Walk-up",
            "Walk-Up",
            "Travel",
            "Get in",
            "Investigate",
            "Operate",
            "Climb-under",
            "Jump",
            "Crawl-down",
            "Crawl-through",
            "Activate",
            "Push",
            "Squeeze-past",
            "Walk-Down",
            "Swing-on",
            "Climb up",
            "Pass-Through",
            "Jump-up",
            "Jump-down",
            "Swing across",
        ];
        let name_blacklist = ["Coffin", "Drawers", "Ornate railing", "Wardrobe"];
        let action_blacklist = ["Chop down"];
        let high_priority = ["Pay-toll(10gp)", "Squeeze-past"];

        Self {
            whitelist: whitelist.iter().map(|s| s.to_string()).collect(),
            name_blacklist: name_blacklist.iter().map(|s| s.to_string()).collect(),
            action_blacklist: action_blacklist.iter().map(|s| s.to_string()).collect(),
            high_priority: high_priority.iter().map(|s| s.to_string()).collect(),
        }
    }
}
