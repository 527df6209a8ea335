use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer row ids handed out by SQLite on insert. Wrapped so a task id can
/// never be passed where a category id is expected.
macro_rules! row_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(TaskId);
row_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_integer() {
        assert_eq!(TaskId::new(42).to_string(), "42");
        assert_eq!(CategoryId::from(7).to_string(), "7");
    }

    #[test]
    fn serde_transparent() {
        let id = TaskId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let back: TaskId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn get_returns_raw() {
        assert_eq!(CategoryId::new(-1).get(), -1);
    }
}
