use thiserror::Error;

/// Errors produced by the reflective oneof mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OneofError {
	/// Field name is not part of the group's field set.
	#[error("unknown oneof field: {field}")]
	UnknownField {
		/// Rejected field name.
		field: String,
	},
	/// Supplied value does not convert to the named field's payload type.
	#[error("invalid value for oneof field {field}: expected {expected}")]
	InvalidValue {
		/// Target field name.
		field: String,
		/// Expected payload type.
		expected: &'static str,
	},
}
