use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Catalog key.
///
/// Keys that are plain integers ("1", "10") sort numerically and come before
/// every other key, which sort as text.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(pub String);

impl Isbn {
    fn as_index(&self) -> Option<u32> {
        self.0
            .parse::<u32>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

impl Ord for Isbn {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_index(), other.as_index()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Isbn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Isbn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integers_first_in_numeric_order() {
        let mut keys: Vec<Isbn> = ["b", "10", "2", "007", "a", "1"]
            .into_iter()
            .map(Isbn::from)
            .collect();
        keys.sort();
        let keys: Vec<_> = keys.iter().map(|k| k.0.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "10", "007", "a", "b"]);
    }
}
