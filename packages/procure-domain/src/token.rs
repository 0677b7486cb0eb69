//! Canonical string tokens for closed enum types.
//!
//! Every enum that travels through a query string declares one table of
//! `(variant, token, label)` rows. Lookup is tolerant of case, surrounding and
//! internal whitespace, and separator style (hyphen, en dash, em dash, underscore),
//! so `"In Transit"`, `"IN-TRANSIT"` and `"in–transit"` all land on the same row.
//! Encoding always emits the token column.

pub trait TokenEnum
where
	Self: Copy + Default + PartialEq + 'static,
{
	/// Variant, canonical token, display label.
	const TABLE: &'static [(Self, &'static str, &'static str)];

	fn token(self) -> &'static str {
		Self::TABLE
			.iter()
			.find(|(variant, ..)| *variant == self)
			.map(|(_, token, _)| *token)
			.unwrap_or_default()
	}

	fn label(self) -> &'static str {
		Self::TABLE
			.iter()
			.find(|(variant, ..)| *variant == self)
			.map(|(.., label)| *label)
			.unwrap_or_default()
	}

	/// Matches against both the token and the display label.
	fn parse_token(raw: &str) -> Option<Self> {
		let key = token_key(raw);

		if key.is_empty() {
			return None;
		}

		Self::TABLE
			.iter()
			.find(|(_, token, label)| token_key(token) == key || token_key(label) == key)
			.map(|(variant, ..)| *variant)
	}

	/// Unrecognized or blank input resolves to the default variant.
	fn from_token(raw: &str) -> Self {
		Self::parse_token(raw).unwrap_or_default()
	}
}

/// Lookup key for a token: lowercase, with whitespace and separators removed.
pub fn token_key(raw: &str) -> String {
	raw.chars()
		.filter(|c| !c.is_whitespace() && !is_separator(*c))
		.flat_map(char::to_lowercase)
		.collect()
}

fn is_separator(c: char) -> bool {
	matches!(
		c,
		'-' | '_' | '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}'
	)
}
