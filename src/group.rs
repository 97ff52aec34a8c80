use crate::error::OneofError;

/// Accessor protocol shared by statically-typed and dynamic oneof groups.
///
/// Statically-typed groups are enums with one variant per field plus an
/// empty default variant; code that knows the concrete enum matches on it
/// directly, while reflective code (decoders, schema walkers) manipulates
/// the group through this trait without knowing its field names.
pub trait OneofGroup {
	/// Value representation handed across the reflective boundary.
	type Value;

	/// Name of the active field, or `None` when no field is selected.
	fn oneof_kind(&self) -> Option<&str>;

	/// Value of the active field regardless of its name.
	fn selected_value(&self) -> Option<Self::Value>;

	/// Replace the active field with `kind` holding `value`.
	///
	/// The previously active field leaves no trace. Implementors with a
	/// closed field set reject names outside the set and values that do
	/// not convert to the named field's payload type, leaving the group
	/// unchanged.
	fn set_oneof_value(&mut self, kind: &str, value: Self::Value) -> Result<(), OneofError>;

	/// Reset the group to the unselected state. Idempotent.
	fn clear_oneof_value(&mut self);

	/// Value of the active field, but only when `kind` names it.
	///
	/// Returns `None` whenever the discriminator differs from `kind`,
	/// even if `kind` is a legal field name for the group.
	fn get_oneof_value(&self, kind: &str) -> Option<Self::Value> {
		if self.oneof_kind() == Some(kind) {
			self.selected_value()
		} else {
			None
		}
	}
}
