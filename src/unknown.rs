use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::OneofError;
use crate::group::OneofGroup;
use crate::shape::KIND_KEY;

/// Oneof group whose field names are runtime strings.
///
/// Holds at most one `(name, value)` entry; the entry's name is the
/// discriminator. Used by reflective code that discovers field names
/// while walking an unfamiliar schema, where no enum type exists to
/// match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOneofGroup<V> {
	selected: Option<(Box<str>, V)>,
}

impl<V> UnknownOneofGroup<V> {
	/// Create a group with no field selected.
	pub fn new() -> Self {
		Self { selected: None }
	}

	/// Create a group with `kind` selected and holding `value`.
	pub fn selected(kind: impl Into<Box<str>>, value: V) -> Self {
		Self {
			selected: Some((kind.into(), value)),
		}
	}

	/// Name of the active field, or `None` when no field is selected.
	pub fn kind(&self) -> Option<&str> {
		self.selected.as_ref().map(|(kind, _)| kind.as_ref())
	}

	/// Borrow the active value regardless of its name.
	pub fn value(&self) -> Option<&V> {
		self.selected.as_ref().map(|(_, value)| value)
	}

	/// Borrow the active value, but only when `kind` names it.
	pub fn get(&self, kind: &str) -> Option<&V> {
		match &self.selected {
			Some((active, value)) if active.as_ref() == kind => Some(value),
			_ => None,
		}
	}

	/// Select `kind` and store `value`, dropping any previous field.
	pub fn set(&mut self, kind: impl Into<Box<str>>, value: V) {
		self.selected = Some((kind.into(), value));
	}

	/// Reset the group to the unselected state. Idempotent.
	pub fn clear(&mut self) {
		self.selected = None;
	}

	/// Clear the group and return the previously active entry.
	pub fn take(&mut self) -> Option<(Box<str>, V)> {
		self.selected.take()
	}

	/// Return whether no field is selected.
	pub fn is_empty(&self) -> bool {
		self.selected.is_none()
	}
}

impl<V> Default for UnknownOneofGroup<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: Clone> OneofGroup for UnknownOneofGroup<V> {
	type Value = V;

	fn oneof_kind(&self) -> Option<&str> {
		self.kind()
	}

	fn selected_value(&self) -> Option<V> {
		self.value().cloned()
	}

	fn set_oneof_value(&mut self, kind: &str, value: V) -> Result<(), OneofError> {
		self.set(kind, value);
		Ok(())
	}

	fn clear_oneof_value(&mut self) {
		self.clear();
	}
}

impl<V: Serialize> Serialize for UnknownOneofGroup<V> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match &self.selected {
			Some((kind, value)) => {
				let mut map = serializer.serialize_map(Some(2))?;
				map.serialize_entry(KIND_KEY, kind)?;
				map.serialize_entry(kind, value)?;
				map.end()
			}
			None => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry(KIND_KEY, &None::<&str>)?;
				map.end()
			}
		}
	}
}

impl<'de, V> Deserialize<'de> for UnknownOneofGroup<V>
where
	V: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(GroupVisitor(PhantomData))
	}
}

struct GroupVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for GroupVisitor<V>
where
	V: Deserialize<'de>,
{
	type Value = UnknownOneofGroup<V>;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("a oneof group object")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut kind: Option<Option<String>> = None;
		let mut field: Option<(String, V)> = None;

		while let Some(key) = map.next_key::<String>()? {
			if key == KIND_KEY {
				if kind.is_some() {
					return Err(de::Error::duplicate_field(KIND_KEY));
				}
				kind = Some(map.next_value::<Option<String>>()?);
			} else {
				if field.is_some() {
					return Err(de::Error::custom("oneof group with more than one value field"));
				}
				field = Some((key, map.next_value()?));
			}
		}

		let Some(kind) = kind else {
			return Err(de::Error::missing_field(KIND_KEY));
		};

		match (kind, field) {
			(None, None) => Ok(UnknownOneofGroup::new()),
			(Some(kind), Some((name, value))) if kind == name => {
				Ok(UnknownOneofGroup::selected(kind, value))
			}
			(Some(kind), Some((name, _))) => Err(de::Error::custom(format_args!(
				"oneof discriminator {kind:?} does not match value field {name:?}"
			))),
			(Some(kind), None) => Err(de::Error::custom(format_args!(
				"oneof discriminator {kind:?} without a value field"
			))),
			(None, Some((name, _))) => Err(de::Error::custom(format_args!(
				"cleared oneof group with value field {name:?}"
			))),
		}
	}
}

#[cfg(test)]
mod tests;
