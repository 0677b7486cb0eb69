//! Flat key/value codec for page filter state.
//!
//! Decoding is total: absent, blank, or unrecognized values resolve to the field's
//! default and never produce an error. Encoding emits one canonical token per
//! scalar field so that links built from a decoded value decode back to it.

use std::collections::{BTreeMap, HashSet};

use url::form_urlencoded;

use crate::token::TokenEnum;

/// Scalar fields keyed by query parameter name. Sorted, so URLs are deterministic.
pub type ScalarMap = BTreeMap<String, String>;

const SELECTION_SEPARATOR: char = ',';

/// Typed filter state of one page.
pub trait ParameterSet
where
	Self: Sized,
{
	/// Page path that links built from this value point at.
	const PATH: &'static str;
	/// Query key carrying the page's selection, if it has one.
	const MULTI_VALUE_KEY: Option<&'static str> = None;

	fn from_fields(fields: &Fields<'_>) -> Self;

	/// Scalar fields only. The selection is not part of the navigation URL and is
	/// exposed separately through [`ParameterSet::selection`].
	fn to_scalars(&self) -> ScalarMap;

	fn selection(&self) -> &[String] {
		&[]
	}
}

/// Read access to raw scalar values with the defaulting rules applied.
pub struct Fields<'a> {
	scalars: &'a ScalarMap,
	selection: Vec<String>,
}
impl<'a> Fields<'a> {
	fn new(scalars: &'a ScalarMap, raw_selection: Vec<String>) -> Self {
		Self { scalars, selection: normalize_selection(raw_selection) }
	}

	/// Trimmed value, or `None` when absent or blank.
	pub fn text(&self, key: &str) -> Option<String> {
		self.scalars
			.get(key)
			.map(|value| value.trim())
			.filter(|value| !value.is_empty())
			.map(str::to_string)
	}

	pub fn text_or(&self, key: &str, default: &str) -> String {
		self.text(key).unwrap_or_else(|| default.to_string())
	}

	pub fn token<T>(&self, key: &str) -> T
	where
		T: TokenEnum,
	{
		self.scalars.get(key).map(|value| T::from_token(value)).unwrap_or_default()
	}

	pub fn selection(&self) -> Vec<String> {
		self.selection.clone()
	}
}

/// Decodes a raw query string, with or without its leading `?`.
///
/// A repeated scalar key keeps its first non-blank value. The multi-value key may
/// be repeated, comma-separated, or both.
pub fn decode_query<P>(raw_query: &str) -> P
where
	P: ParameterSet,
{
	let raw = raw_query.trim();
	let raw = raw.strip_prefix('?').unwrap_or(raw);
	let mut scalars = ScalarMap::new();
	let mut selection = Vec::new();

	for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
		if P::MULTI_VALUE_KEY == Some(key.as_ref()) {
			selection.push(value.into_owned());

			continue;
		}
		if value.trim().is_empty() {
			continue;
		}

		scalars.entry(key.into_owned()).or_insert_with(|| value.into_owned());
	}

	P::from_fields(&Fields::new(&scalars, selection))
}

/// Decodes from an already-parsed scalar map, e.g. after a form post.
///
/// When `multi_values` is `None` the selection is read from the map's multi-value
/// key, if present.
pub fn decode_scalars<P>(scalars: &ScalarMap, multi_values: Option<&[String]>) -> P
where
	P: ParameterSet,
{
	let selection = match multi_values {
		Some(values) => values.to_vec(),
		None => P::MULTI_VALUE_KEY
			.and_then(|key| scalars.get(key))
			.map(|value| vec![value.clone()])
			.unwrap_or_default(),
	};

	P::from_fields(&Fields::new(scalars, selection))
}

pub fn encode_query<P>(params: &P) -> ScalarMap
where
	P: ParameterSet,
{
	params.to_scalars()
}

/// Navigation URL for the page that owns `params`.
pub fn to_url<P>(params: &P) -> String
where
	P: ParameterSet,
{
	build_url(P::PATH, &params.to_scalars())
}

/// `path?key=value&...` with form-urlencoded values. Returns `path` alone when
/// there are no pairs.
pub fn build_url(path: &str, pairs: &ScalarMap) -> String {
	if pairs.is_empty() {
		return path.to_string();
	}

	let query = form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish();

	format!("{path}?{query}")
}

/// Splits on commas, trims, drops blanks, and removes case-insensitive duplicates.
/// The first spelling of a value wins and relative order is kept.
pub fn normalize_selection<I, S>(values: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut seen = HashSet::new();
	let mut out = Vec::new();

	for value in values {
		for part in value.as_ref().split(SELECTION_SEPARATOR) {
			let part = part.trim();

			if part.is_empty() {
				continue;
			}
			if seen.insert(part.to_lowercase()) {
				out.push(part.to_string());
			}
		}
	}

	out
}

/// Trimmed text, `None` when blank. Constructors use it so that every value they
/// build is already in decoded form.
pub(crate) fn clean_text(value: &str) -> Option<String> {
	let value = value.trim();

	(!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn insert_text(out: &mut ScalarMap, key: &str, value: Option<&str>) {
	if let Some(value) = value.map(str::trim)
		&& !value.is_empty()
	{
		out.insert(key.to_string(), value.to_string());
	}
}

pub(crate) fn insert_token<T>(out: &mut ScalarMap, key: &str, value: T)
where
	T: TokenEnum,
{
	out.insert(key.to_string(), value.token().to_string());
}
