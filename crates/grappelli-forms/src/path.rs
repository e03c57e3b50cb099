//! Field paths over a nested record tree
//!
//! A [`FieldPath`] locates one value inside the registration record, which
//! is stored as a `serde_json::Value` tree. Paths are written in dotted
//! form; segments made entirely of ASCII digits address array positions:
//!
//! - `username` — a top-level key
//! - `social.twitter` — a nested key
//! - `phone_numbers.0` — the first element of an array

use serde_json::Value;
use std::fmt;

/// One step of a [`FieldPath`]: either an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
	/// Object key, e.g. `social`
	Key(String),
	/// Array index, e.g. `0` in `phone_numbers.0`
	Index(usize),
}

impl fmt::Display for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Segment::Key(key) => write!(f, "{}", key),
			Segment::Index(index) => write!(f, "{}", index),
		}
	}
}

/// Dot/index-qualified identifier locating a value within the record tree.
///
/// Parsing is infallible: every dot-separated segment becomes a key unless
/// it consists solely of digits, in which case it becomes an array index.
/// `Display` round-trips the dotted form.
///
/// # Examples
///
/// ```
/// use grappelli_forms::FieldPath;
///
/// let path = FieldPath::parse("social.twitter");
/// assert_eq!(path.to_string(), "social.twitter");
/// assert_eq!(path.segments().len(), 2);
///
/// let indexed = FieldPath::parse("phone_numbers.1");
/// assert_eq!(indexed.to_string(), "phone_numbers.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
	segments: Vec<Segment>,
}

impl FieldPath {
	/// Parse a dotted path. Segments of ASCII digits address array positions.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::{FieldPath, Segment};
	///
	/// let path = FieldPath::parse("phone_numbers.0");
	/// assert_eq!(path.segments()[1], Segment::Index(0));
	/// ```
	pub fn parse(path: &str) -> Self {
		let segments = path
			.split('.')
			.map(|segment| match segment.parse::<usize>() {
				Ok(index) => Segment::Index(index),
				Err(_) => Segment::Key(segment.to_string()),
			})
			.collect();
		Self { segments }
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Look up the value this path addresses inside `root`.
	///
	/// Returns `None` when any intermediate step is missing or has the
	/// wrong shape (key into a non-object, index into a non-array).
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::FieldPath;
	/// use serde_json::json;
	///
	/// let record = json!({"social": {"twitter": "@django"}});
	/// let path = FieldPath::parse("social.twitter");
	/// assert_eq!(path.get(&record), Some(&json!("@django")));
	/// assert_eq!(FieldPath::parse("social.missing").get(&record), None);
	/// ```
	pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
		let mut current = root;
		for segment in &self.segments {
			current = match segment {
				Segment::Key(key) => current.as_object()?.get(key)?,
				Segment::Index(index) => current.as_array()?.get(*index)?,
			};
		}
		Some(current)
	}

	/// Write `new` at this path inside `root`, creating intermediate
	/// objects and padding arrays with `Null` as needed.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_forms::FieldPath;
	/// use serde_json::json;
	///
	/// let mut record = json!({});
	/// FieldPath::parse("phone_numbers.1").set(&mut record, json!("555-0199"));
	/// assert_eq!(record, json!({"phone_numbers": [null, "555-0199"]}));
	/// ```
	pub fn set(&self, root: &mut Value, new: Value) {
		fn place(current: &mut Value, segments: &[Segment], new: Value) {
			match segments.split_first() {
				None => *current = new,
				Some((Segment::Key(key), rest)) => {
					if !current.is_object() {
						*current = Value::Object(serde_json::Map::new());
					}
					if let Value::Object(map) = current {
						place(map.entry(key.clone()).or_insert(Value::Null), rest, new);
					}
				}
				Some((Segment::Index(index), rest)) => {
					if !current.is_array() {
						*current = Value::Array(Vec::new());
					}
					if let Value::Array(items) = current {
						while items.len() <= *index {
							items.push(Value::Null);
						}
						place(&mut items[*index], rest, new);
					}
				}
			}
		}
		place(root, &self.segments, new);
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				write!(f, ".")?;
			}
			write!(f, "{}", segment)?;
		}
		Ok(())
	}
}

impl From<&str> for FieldPath {
	fn from(path: &str) -> Self {
		Self::parse(path)
	}
}

impl From<String> for FieldPath {
	fn from(path: String) -> Self {
		Self::parse(&path)
	}
}
