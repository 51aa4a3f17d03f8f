//! Failure taxonomy of a resolution attempt.
//!
//! Nothing here is fatal to the process: every variant collapses to `false`
//! at the public boundary and the caller retries with a freshly recomputed
//! analysis on its next iteration.
use path_core::Tile;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("route analysis is unavailable")]
    AnalysisUnavailable,

    #[error("no interactable obstacle found near {near}")]
    NoCandidate { near: Tile },

    #[error("{object} never became clickable")]
    NeverClickable { object: String },

    #[error("click on {object} was not accepted")]
    ClickRejected { object: String },

    #[error("{automaton} automaton gave up after {attempts} attempts")]
    AutomatonExhausted {
        automaton: &'static str,
        attempts: u64,
    },

    #[error("hatch recursion exceeded {limit} levels")]
    HatchTooDeep { limit: u8 },

    #[error("guard at {object} released neither passage nor quiz")]
    GuardUnanswered { object: String },

    #[error("no route progress after interacting with {object}")]
    NoProgress { object: String },

    #[error("blind walk toward {tile} was refused")]
    WalkRejected { tile: Tile },

    #[error("route is empty, nothing to walk toward")]
    RouteExhausted,
}
