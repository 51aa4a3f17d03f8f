//! Per-obstacle interaction automata.
//!
//! Each bespoke obstacle class gets its own module; the resolver dispatches
//! on the matched rule's [`ObstacleKind`](path_core::ObstacleKind). A
//! handler either finishes the interaction itself ([`Flow::Interacted`]) or
//! hands control back so the generic click path runs with the rule's action
//! ([`Flow::Continue`]).

pub(crate) mod barrier;
pub(crate) mod door;
pub(crate) mod hatch;
pub(crate) mod hazard;
pub(crate) mod shortcut;
pub(crate) mod tunnel;

/// What the generic click path should do after a handler ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    /// The handler did not perform the click itself; proceed generically.
    Continue,
    /// The interaction is done; skip straight to progress verification.
    Interacted,
}
