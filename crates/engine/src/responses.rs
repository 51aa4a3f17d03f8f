//! Predetermined dialog response sets.
//!
//! Conversations that interrupt an interaction are answered from these
//! fixed lists; the dialog oracle picks whichever entry matches an offered
//! option.

/// Safe answers for ordinary conversations that pop up mid-route.
pub const GENERAL: &[&str] = &["Yes.", "Okay.", "Sure.", "Sounds good.", "Carry on."];

/// Answer ladder for the access-recovery quiz asked behind guarded doors.
/// One of these matches every question in the rotation.
pub const ACCESS_QUIZ: &[&str] = &[
    "Use the account recovery form.",
    "Nobody.",
    "No.",
    "Decline the offer and report it.",
    "Don't share the password with anyone, not even close friends.",
    "Set up two-step verification with my email provider.",
    "Secure my device and reset my password.",
    "Virus scan my device, then change my password.",
    "Report the sender without clicking any links.",
    "Only through the official website.",
    "Delete the message without replying.",
    "Don't type the password anywhere but the login screen.",
    "Report the impersonator and move on.",
    "Read the notice and follow its advice.",
];
