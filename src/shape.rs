use serde_json::Value;

/// Reserved discriminator key in the structural form of a oneof group.
///
/// Collaborators must never use this key as a field name.
pub const KIND_KEY: &str = "kind";

/// Return whether `candidate` is a well-formed structural oneof group.
///
/// A well-formed group is an object whose discriminator key holds either
/// `null` (no field selected, no other keys allowed) or a string naming
/// the exactly one other key present. Any other candidate, including any
/// non-object value, returns false. Never panics.
pub fn is_oneof_group(candidate: &Value) -> bool {
	let Some(object) = candidate.as_object() else {
		return false;
	};

	match object.get(KIND_KEY) {
		Some(Value::Null) => object.len() == 1,
		Some(Value::String(kind)) => object.len() == 2 && object.contains_key(kind),
		_ => false,
	}
}
