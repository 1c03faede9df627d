//! Meaningful-result contract for resolution.
//!
//! A provider answer only terminates the fallback chain when it actually
//! carries data. Each query result type also knows its own empty sentinel,
//! which the registry returns on total exhaustion instead of an error or a
//! type-erased default.

/// Result types the composite resolver can fall back over.
pub trait Meaningful {
    /// Whether this value should stop the provider chain.
    fn is_meaningful(&self) -> bool;

    /// The typed empty sentinel returned when every provider is exhausted.
    fn empty() -> Self;
}

impl<T> Meaningful for Vec<T> {
    fn is_meaningful(&self) -> bool {
        !self.is_empty()
    }

    fn empty() -> Self {
        Vec::new()
    }
}

impl<T> Meaningful for Option<T> {
    fn is_meaningful(&self) -> bool {
        self.is_some()
    }

    fn empty() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_meaningful() {
        assert!(vec![1].is_meaningful());
        assert!(!Vec::<i32>::new().is_meaningful());
        assert!(Vec::<i32>::empty().is_empty());
    }

    #[test]
    fn test_option_meaningful() {
        assert!(Some(1).is_meaningful());
        assert!(!None::<i32>.is_meaningful());
        assert!(Option::<i32>::empty().is_none());
    }
}
