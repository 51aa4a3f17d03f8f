//! Engine pacing configuration.
//!
//! Every bounded wait, retry ceiling, and assist threshold of the driver is
//! a named field here, with the tuned values as defaults. Both this and the
//! decision-layer [`ResolverConfig`] can be loaded from TOML files; absent
//! keys fall back to the defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use path_core::ResolverConfig;
use serde::{Deserialize, Serialize};

/// Inclusive millisecond (or count) range a randomized value is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jitter {
    pub min: u64,
    pub max: u64,
}

impl Jitter {
    pub const fn range(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

/// Pacing and retry parameters of the interaction executor and progress
/// monitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sleep between two evaluations of a polled condition.
    pub poll_interval_ms: u64,
    /// Wait for the chosen object to become on-screen and clickable.
    pub clickable_wait_ms: Jitter,
    /// Settle after any accepted click.
    pub post_click_settle_ms: Jitter,
    /// Cut attempts against a barrier before giving up.
    pub barrier_attempts: u32,
    /// Settle between cuts while standing next to the barrier.
    pub barrier_adjacent_settle_ms: Jitter,
    /// Settle between cuts from further away.
    pub barrier_far_settle_ms: Jitter,
    /// Attempts against a lockable door; the actual count is drawn once per
    /// resolution.
    pub door_attempts: Jitter,
    /// Wait to arrive next to the door after an accepted attempt.
    pub door_adjacency_wait_ms: Jitter,
    /// Wait for the agent to surface at the opposite tunnel end.
    pub tunnel_transit_wait_ms: Jitter,
    /// Wait for a timed hazard to disappear after triggering it.
    pub hazard_clear_wait_ms: Jitter,
    /// Settle once the hazard is gone.
    pub hazard_settle_ms: Jitter,
    /// Wait for the opened hatch (or a nearby descend object) to appear.
    pub hatch_reveal_wait_ms: Jitter,
    /// Radius around a hatch in which the descend object is sought.
    pub hatch_search_radius: i32,
    /// Guarded-door wait for reachability or the access quiz.
    pub guard_wait_ms: Jitter,
    /// Settle once the far side of a guarded door is reachable.
    pub guard_reach_settle_ms: Jitter,
    /// Final settle after a guarded-door passage.
    pub guard_exit_settle_ms: Jitter,
    /// Overall post-interaction wait for route progress.
    pub progress_wait_ms: Jitter,
    /// Hover assistance kicks in when the waypoint past the obstacle is
    /// further than this from the agent.
    pub hover_assist_distance: i32,
    /// Hover assistance requires the agent to still be this close to the
    /// object it interacted with.
    pub near_object_distance: i32,
    /// Route tiles to skip ahead when an obstacle is walked past rather
    /// than interacted with.
    pub shortcut_advance: usize,
    /// Step budget handed to the reachability oracle.
    pub reachable_max_steps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 25,
            clickable_wait_ms: Jitter::range(5000, 8000),
            post_click_settle_ms: Jitter::range(250, 800),
            barrier_attempts: 6,
            barrier_adjacent_settle_ms: Jitter::range(50, 800),
            barrier_far_settle_ms: Jitter::range(2000, 4000),
            door_attempts: Jitter::range(15, 25),
            door_adjacency_wait_ms: Jitter::range(3000, 4000),
            tunnel_transit_wait_ms: Jitter::fixed(10_000),
            hazard_clear_wait_ms: Jitter::fixed(12_000),
            hazard_settle_ms: Jitter::range(3500, 6000),
            hatch_reveal_wait_ms: Jitter::fixed(8000),
            hatch_search_radius: 2,
            guard_wait_ms: Jitter::range(6700, 7800),
            guard_reach_settle_ms: Jitter::range(500, 1000),
            guard_exit_settle_ms: Jitter::range(800, 1200),
            progress_wait_ms: Jitter::range(8500, 11_000),
            hover_assist_distance: 7,
            near_object_distance: 2,
            shortcut_advance: 10,
            reachable_max_steps: 50,
        }
    }
}

/// Loads an [`EngineConfig`] from a TOML file.
pub fn load_engine_config(path: &Path) -> anyhow::Result<EngineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read engine config {}", path.display()))?;
    toml::from_str(&content).context("failed to parse engine config TOML")
}

/// Loads a [`ResolverConfig`] from a TOML file.
pub fn load_resolver_config(path: &Path) -> anyhow::Result<ResolverConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read resolver config {}", path.display()))?;
    toml::from_str(&content).context("failed to parse resolver config TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn absent_keys_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "poll_interval_ms = 10").expect("write");
        writeln!(file, "barrier_attempts = 2").expect("write");

        let cfg = load_engine_config(file.path()).expect("load");
        assert_eq!(cfg.poll_interval_ms, 10);
        assert_eq!(cfg.barrier_attempts, 2);
        assert_eq!(cfg.progress_wait_ms, Jitter::range(8500, 11_000));
    }

    #[test]
    fn jitter_tables_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "clickable_wait_ms = {{ min = 100, max = 200 }}").expect("write");

        let cfg = load_engine_config(file.path()).expect("load");
        assert_eq!(cfg.clickable_wait_ms, Jitter::range(100, 200));
    }

    #[test]
    fn resolver_config_loads_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "object_search_radius = 20").expect("write");

        let cfg = load_resolver_config(file.path()).expect("load");
        assert_eq!(cfg.object_search_radius, 20);
        assert_eq!(
            cfg.destination_radius,
            ResolverConfig::DEFAULT_DESTINATION_RADIUS
        );
        assert!(cfg.tables.whitelist.contains("Open"));
    }
}
