use serde::{Serialize, Serializer};

/// One queued word for a user
///
/// Serialized as a `[number, word]` pair, which is what the desktop client reads.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WordEntry {
    /// Position in the user's queue (1-based, unique per user)
    pub number: i64,
    pub word: String,
}

impl Serialize for WordEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.number, &self.word).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_pair() {
        let entry = WordEntry {
            number: 3,
            word: "apple".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!([3, "apple"])
        );
    }
}
