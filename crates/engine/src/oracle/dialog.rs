/// Conversation window handling.
pub trait DialogOracle {
    fn is_open(&self) -> bool;

    /// Advances the open conversation, preferring the first of `responses`
    /// that matches an offered option.
    fn advance(&self, responses: &[&str]);
}
