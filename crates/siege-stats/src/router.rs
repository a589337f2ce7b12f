//! Route versioned payload keys to output categories.
//!
//! Upstream keys look like `Operator Loadout-5m1VNVEpIXWLf1NeF5ISNm`: a
//! readable prefix followed by an opaque version token. Rules match on the
//! prefix only.

use serde_json::Value;

use crate::types::{Category, RawPayload, RoutedEntry, StatsError, StatsResult};

/// Where a matched key's content goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// The whole `content` object feeds one category.
    Content(Category),
    /// Each listed category reads the `content` sub-field named after it.
    Fields(&'static [Category]),
}

/// Static routing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRule {
    pub prefix: &'static str,
    pub slug: &'static str,
    pub target: RuleTarget,
}

impl KeyRule {
    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(self.prefix)
    }
}

/// Rules for the stats portal payload.
pub const DEFAULT_RULES: &[KeyRule] = &[
    KeyRule {
        prefix: "G2W Card",
        slug: "season",
        target: RuleTarget::Fields(&[Category::Seasons, Category::Ranks]),
    },
    KeyRule {
        prefix: "Operator Loadout",
        slug: "loadout",
        target: RuleTarget::Fields(&[Category::Operators, Category::Weapons]),
    },
    KeyRule {
        prefix: "Maps Details",
        slug: "maps",
        target: RuleTarget::Content(Category::Maps),
    },
];

/// Split the payload into routed entries.
///
/// Keys that match no rule are skipped. A matched key without the expected
/// `content` object or sub-field is an error.
pub fn route(payload: &RawPayload, rules: &[KeyRule]) -> StatsResult<Vec<RoutedEntry>> {
    let mut entries = Vec::new();

    for (key, value) in payload.iter() {
        let mut matched = false;

        for rule in rules.iter().filter(|r| r.matches(key)) {
            matched = true;
            tracing::debug!("Key {key} matched rule {}", rule.slug);
            let content = value
                .get("content")
                .ok_or_else(|| StatsError::MissingField(format!("{key}.content")))?;

            match rule.target {
                RuleTarget::Content(category) => {
                    entries.push(entry(category, key, content.clone()));
                }
                RuleTarget::Fields(categories) => {
                    for &category in categories {
                        let data = content.get(category.slug()).ok_or_else(|| {
                            StatsError::MissingField(format!("{key}.content.{category}"))
                        })?;
                        entries.push(entry(category, key, data.clone()));
                    }
                }
            }
        }

        if !matched {
            tracing::trace!("Ignoring unrouted key {key}");
        }
    }

    tracing::debug!(entries = entries.len(), "Routed payload");
    Ok(entries)
}

fn entry(category: Category, key: &str, data: Value) -> RoutedEntry {
    RoutedEntry {
        category,
        source_key: key.to_string(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> RawPayload {
        match value {
            Value::Object(map) => RawPayload::new(map),
            _ => panic!("payload must be an object"),
        }
    }

    #[test]
    fn test_fan_out_rule() {
        let p = payload(json!({
            "G2W Card-5m1VNVEpIXWLf1NeF5ISNm": {
                "content": { "seasons": [1], "ranks": [2], "currentSeason": {} }
            }
        }));
        let entries = route(&p, DEFAULT_RULES).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, Category::Seasons);
        assert_eq!(entries[0].data, json!([1]));
        assert_eq!(entries[1].category, Category::Ranks);
        assert_eq!(entries[1].data, json!([2]));
        assert_eq!(entries[1].source_key, "G2W Card-5m1VNVEpIXWLf1NeF5ISNm");
    }

    #[test]
    fn test_whole_content_rule() {
        let p = payload(json!({
            "Maps Details-5m1VNVEpIXWLf1NeF5ISNm": { "content": [{ "slug": "bank" }] }
        }));
        let entries = route(&p, DEFAULT_RULES).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Maps);
        assert_eq!(entries[0].data, json!([{ "slug": "bank" }]));
    }

    #[test]
    fn test_entries_follow_page_key_order() {
        let p = payload(json!({
            "Maps Details-zzz": { "content": [{ "slug": "bank" }] },
            "Maps Details-aaa": { "content": [{ "slug": "oregon" }] }
        }));
        let entries = route(&p, DEFAULT_RULES).unwrap();
        let keys: Vec<_> = entries.iter().map(|e| e.source_key.as_str()).collect();
        assert_eq!(keys, vec!["Maps Details-zzz", "Maps Details-aaa"]);
    }

    #[test]
    fn test_unmatched_keys_are_ignored() {
        let p = payload(json!({
            "Hero Banner-abc": { "content": {} },
            "Footer": 42
        }));
        assert!(route(&p, DEFAULT_RULES).unwrap().is_empty());
    }

    #[test]
    fn test_prefix_must_lead_key() {
        let p = payload(json!({ "Old Maps Details-abc": { "content": [] } }));
        assert!(route(&p, DEFAULT_RULES).unwrap().is_empty());
    }

    #[test]
    fn test_missing_content() {
        let p = payload(json!({ "Maps Details-abc": { "items": [] } }));
        let err = route(&p, DEFAULT_RULES).unwrap_err();
        assert!(matches!(err, StatsError::MissingField(ref f) if f == "Maps Details-abc.content"));
    }

    #[test]
    fn test_missing_sub_field() {
        let p = payload(json!({ "Operator Loadout-abc": { "content": { "operators": [] } } }));
        let err = route(&p, DEFAULT_RULES).unwrap_err();
        assert!(
            matches!(err, StatsError::MissingField(ref f) if f == "Operator Loadout-abc.content.weapons")
        );
    }

    #[test]
    fn test_custom_rules() {
        const RULES: &[KeyRule] = &[KeyRule {
            prefix: "Season Card",
            slug: "season",
            target: RuleTarget::Fields(&[Category::Seasons]),
        }];
        let p = payload(json!({
            "Season Card-v2": { "content": { "seasons": [] } },
            "G2W Card-v1": { "content": { "seasons": [], "ranks": [] } }
        }));
        let entries = route(&p, RULES).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source_key, "Season Card-v2");
    }
}
