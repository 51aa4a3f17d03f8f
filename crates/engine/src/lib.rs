//! Obstacle-resolution driver.
//!
//! The `engine` crate turns the pure decisions of `path-core` into world
//! effects: it discovers the blocking object (or takes a matched special
//! rule), drives the interaction through the appropriate automaton, and
//! verifies that route progress was actually made. All world access goes
//! through the oracle traits in [`oracle`]; the engine itself owns no world
//! state and holds nothing across calls beyond its configuration and RNG.
//!
//! Everything is synchronous and cooperative: waiting means bounded polling
//! with sleeps, and every wait carries an explicit deadline.
pub mod config;
pub mod error;
mod handlers;
mod monitor;
pub mod oracle;
pub mod resolver;
pub mod responses;
pub mod wait;

pub use config::{EngineConfig, Jitter, load_engine_config, load_resolver_config};
pub use error::{ResolveError, Result};
pub use oracle::{
    Collaborators, DialogOracle, InteractOracle, NavOracle, RouteOracle, WorldOracle,
};
pub use resolver::ObstacleResolver;
pub use wait::{Poll, Waiter};
