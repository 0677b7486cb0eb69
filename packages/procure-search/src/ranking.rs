//! Tiered match ranking shared by every provider.
//!
//! A candidate's tier comes from how the query meets its natural key: equal,
//! prefix, or anything else that merely contains the query. Within a tier newer
//! records come first when the provider has a date to sort by; otherwise the
//! source order is kept. Truncation happens only after ranking.

use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
	Exact,
	Prefix,
	Substring,
}

#[derive(Debug, Clone)]
pub struct Ranked<T> {
	pub tier: MatchTier,
	pub recency: Option<Date>,
	pub record: T,
}

/// Lowercased, trimmed query. `None` for blank input.
pub fn normalize_query(query: &str) -> Option<String> {
	let trimmed = query.trim();

	if trimmed.is_empty() {
		return None;
	}

	Some(trimmed.to_lowercase())
}

/// `needle` must already be normalized with [`normalize_query`].
pub fn match_tier(needle: &str, key: &str, fields: &[&str]) -> Option<MatchTier> {
	let key = key.to_lowercase();

	if key == needle {
		return Some(MatchTier::Exact);
	}
	if key.starts_with(needle) {
		return Some(MatchTier::Prefix);
	}
	if key.contains(needle) || fields.iter().any(|field| field.to_lowercase().contains(needle)) {
		return Some(MatchTier::Substring);
	}

	None
}

pub fn rank<T>(mut candidates: Vec<Ranked<T>>, max_results: usize) -> Vec<Ranked<T>> {
	// Stable sort keeps source order for full ties.
	candidates.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| b.recency.cmp(&a.recency)));
	candidates.truncate(max_results);

	candidates
}

#[cfg(test)]
mod tests {
	use time::macros::date;

	use super::*;

	fn candidate(
		key: &'static str,
		needle: &str,
		recency: Option<Date>,
	) -> Option<Ranked<&'static str>> {
		let tier = match_tier(needle, key, &[])?;

		Some(Ranked { tier, recency, record: key })
	}

	#[test]
	fn exact_beats_prefix_beats_substring() {
		let needle = normalize_query("a02").expect("Query must be non-blank.");
		let candidates = ["B-A02", "A020", "A02"]
			.into_iter()
			.filter_map(|key| candidate(key, &needle, None))
			.collect();
		let ranked: Vec<_> = rank(candidates, 10).into_iter().map(|r| r.record).collect();

		assert_eq!(ranked, vec!["A02", "A020", "B-A02"]);
	}

	#[test]
	fn newer_records_lead_within_a_tier() {
		let needle = normalize_query("po-1").expect("Query must be non-blank.");
		let candidates = vec![
			candidate("PO-10", &needle, Some(date!(2024 - 01 - 10))),
			candidate("PO-11", &needle, Some(date!(2024 - 03 - 01))),
			candidate("PO-1", &needle, Some(date!(2023 - 06 - 01))),
			candidate("PO-12", &needle, None),
		]
		.into_iter()
		.flatten()
		.collect();
		let ranked: Vec<_> = rank(candidates, 10).into_iter().map(|r| r.record).collect();

		assert_eq!(ranked, vec!["PO-1", "PO-11", "PO-10", "PO-12"]);
	}

	#[test]
	fn truncates_after_ranking() {
		let needle = normalize_query("x").expect("Query must be non-blank.");
		let candidates = ["ax", "bx", "x", "xa", "cx"]
			.into_iter()
			.filter_map(|key| candidate(key, &needle, None))
			.collect();
		let ranked: Vec<_> = rank(candidates, 2).into_iter().map(|r| r.record).collect();

		assert_eq!(ranked, vec!["x", "xa"]);
	}

	#[test]
	fn matches_secondary_fields_case_insensitively() {
		assert_eq!(match_tier("widget", "IT-1", &["Blue WIDGET"]), Some(MatchTier::Substring));
		assert_eq!(match_tier("gadget", "IT-1", &["Blue WIDGET"]), None);
	}

	#[test]
	fn blank_queries_normalize_to_none() {
		assert_eq!(normalize_query(""), None);
		assert_eq!(normalize_query("   "), None);
		assert_eq!(normalize_query(" A02 ").as_deref(), Some("a02"));
	}
}
