/// Represents a configuration (or a part of it) that can be validated.
pub trait ValidatableConfiguration {
    /// Validate the configuration and return every violation found, in order.
    ///
    /// An empty list means the configuration is valid.
    /// Implementations must not stop at the first problem and must not
    /// mutate or retain `self`.
    fn validate(&self) -> Vec<String>;

    /// Returns `true` if [`validate`][Self::validate] finds no violations.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
