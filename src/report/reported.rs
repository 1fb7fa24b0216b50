//! Tri-state list fields.
//!
//! A report either says nothing about a list (`Absent`), says the list is
//! now empty (`Empty`), or supplies new contents (`Values`). The merge treats
//! the first as "keep what we know" and the other two as "replace", so the
//! distinction has to survive from the JSON wire format through to the
//! merger. On the wire a missing key or `null` is `Absent` and `[]` is
//! `Empty`.

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A list-valued observation field that may be absent, empty, or populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported<T> {
    Absent,
    Empty,
    Values(Vec<T>),
}

impl<T> Reported<T> {
    /// Returns true if the report said nothing about this field.
    pub fn is_absent(&self) -> bool {
        matches!(self, Reported::Absent)
    }

    /// Returns the reported contents, or `None` if the field was absent.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Reported::Absent => None,
            Reported::Empty => Some(&[][..]),
            Reported::Values(v) => Some(v.as_slice()),
        }
    }

    /// Iterates the reported values; absent and empty both yield nothing.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().unwrap_or(&[]).iter()
    }

    /// Converts each value, keeping the absent/empty/values shape.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Reported<U> {
        match self {
            Reported::Absent => Reported::Absent,
            Reported::Empty => Reported::Empty,
            Reported::Values(v) => Reported::Values(v.iter().map(f).collect()),
        }
    }
}

impl<T> Default for Reported<T> {
    fn default() -> Self {
        Reported::Absent
    }
}

impl<T> From<Option<Vec<T>>> for Reported<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        match value {
            None => Reported::Absent,
            Some(v) if v.is_empty() => Reported::Empty,
            Some(v) => Reported::Values(v),
        }
    }
}

impl<T> From<Vec<T>> for Reported<T> {
    fn from(value: Vec<T>) -> Self {
        Some(value).into()
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reported::Absent => serializer.serialize_none(),
            Reported::Empty => serializer.serialize_seq(Some(0))?.end(),
            Reported::Values(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Reported<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Reported::is_absent")]
        items: Reported<String>,
    }

    #[test]
    fn missing_key_is_absent() {
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(h.items, Reported::Absent);
    }

    #[test]
    fn null_is_absent() {
        let h: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert_eq!(h.items, Reported::Absent);
    }

    #[test]
    fn empty_array_is_empty_not_absent() {
        let h: Holder = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(h.items, Reported::Empty);
        assert_eq!(h.items.as_slice(), Some(&[][..]));
    }

    #[test]
    fn values_survive_serialization() {
        let h: Holder = serde_json::from_str(r#"{"items": ["Foo"]}"#).unwrap();
        assert_eq!(h.items, Reported::Values(vec!["Foo".to_string()]));
        assert_eq!(serde_json::to_string(&h).unwrap(), r#"{"items":["Foo"]}"#);

        let empty = Holder { items: Reported::Empty };
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"items":[]}"#);

        let absent = Holder { items: Reported::Absent };
        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
    }

    #[test]
    fn map_keeps_shape() {
        let empty: Reported<u8> = Reported::Empty;
        assert_eq!(empty.map(|v| *v as u32), Reported::Empty);
        let absent: Reported<u8> = Reported::Absent;
        assert_eq!(absent.map(|v| *v as u32), Reported::Absent);
        let values = Reported::Values(vec![1u8, 2]);
        assert_eq!(values.map(|v| *v as u32 * 10), Reported::Values(vec![10, 20]));
    }
}
