use std::fmt;

/// A validated chain namespace, prefixing the table names a chain's state is
/// mirrored into (`<namespace>_blocks`, `<namespace>_transactions`).
///
/// The namespace is the only value ever embedded in a statement as an
/// identifier rather than bound as a parameter, so construction restricts it
/// to lowercase ASCII letters, digits and underscores, starting with a
/// letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainNamespace(String);

impl ChainNamespace {
    /// Creates a new namespace, validating the identifier.
    pub fn new(namespace: impl Into<String>) -> Result<Self, InvalidNamespace> {
        let namespace = namespace.into();
        let valid = namespace.chars().next().is_some_and(|c| c.is_ascii_lowercase()) &&
            namespace.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(InvalidNamespace(namespace));
        }
        Ok(Self(namespace))
    }

    /// Returns the namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of the blocks table for this namespace.
    pub fn blocks_table(&self) -> String {
        format!("{}_blocks", self.0)
    }

    /// Returns the name of the transactions table for this namespace.
    pub fn transactions_table(&self) -> String {
        format!("{}_transactions", self.0)
    }
}

impl fmt::Display for ChainNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ChainNamespace {
    type Error = InvalidNamespace;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChainNamespace> for String {
    fn from(value: ChainNamespace) -> Self {
        value.0
    }
}

/// The error returned when a chain namespace contains characters that cannot
/// be safely embedded in a table identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid chain namespace: {0:?}")]
pub struct InvalidNamespace(String);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_namespaces() {
        for ns in ["ethereum", "polygon", "xdai_archive", "l2"] {
            let namespace = ChainNamespace::new(ns).unwrap();
            assert_eq!(namespace.blocks_table(), format!("{ns}_blocks"));
            assert_eq!(namespace.transactions_table(), format!("{ns}_transactions"));
        }
    }

    #[test]
    fn test_invalid_namespaces() {
        for ns in ["", "Ethereum", "1chain", "eth-main", "eth main", "eth;drop"] {
            assert!(ChainNamespace::new(ns).is_err(), "{ns:?} should be rejected");
        }
    }
}
