use serde::{Deserialize, Serialize};

/// Unique identifier for a playlist within one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(pub String);

impl PlaylistId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Identifier assigned from input position: `p0`, `p1`, ...
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(format!("p{index}"))
    }
}

impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(PlaylistId::from_index(0), PlaylistId::new("p0"));
        assert_eq!(PlaylistId::from_index(12).to_string(), "p12");
    }
}
