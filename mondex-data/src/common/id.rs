use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// An ID for a resource.
///
/// Resources of the same type should have a unique ID. IDs are normalized: only lowercase
/// alphanumeric characters are kept, so `"Flame Dragon"` and `"flamedragon"` produce the same ID.
/// All name-based lookups go through this type, which makes them case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(String);

impl Id {
    /// Checks if the ID is empty, which happens when the input contained no alphanumeric
    /// characters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(
            value
                .chars()
                .filter_map(|c| match c {
                    '0'..='9' | 'a'..='z' => Some(c),
                    'A'..='Z' => Some(c.to_ascii_lowercase()),
                    _ => None,
                })
                .collect(),
        )
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::from(value.as_str())
    }
}

impl FromStr for Id {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

/// A trait that provides a common way of identifying resources.
///
/// Resources of the same type should have a unique ID.
pub trait Identifiable {
    fn id(&self) -> Id;
}
