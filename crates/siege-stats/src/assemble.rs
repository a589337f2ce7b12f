//! Assemble mapped categories into the response, keyed by category.

use crate::types::{Category, MappedCategory, StatsError, StatsResponse, StatsResult};

/// Build the response from mapped categories.
///
/// Order of `mapped` does not matter. If a category appears more than once
/// the last one wins and a warning is logged. Any missing category is an
/// error.
pub fn assemble(mapped: Vec<MappedCategory>) -> StatsResult<StatsResponse> {
    let mut seasons = None;
    let mut ranks = None;
    let mut operators = None;
    let mut weapons = None;
    let mut maps = None;

    for item in mapped {
        let category = item.category();
        let replaced = match item {
            MappedCategory::Seasons(v) => seasons.replace(v).is_some(),
            MappedCategory::Ranks(v) => ranks.replace(v).is_some(),
            MappedCategory::Operators(v) => operators.replace(v).is_some(),
            MappedCategory::Weapons(v) => weapons.replace(v).is_some(),
            MappedCategory::Maps(v) => maps.replace(v).is_some(),
        };
        if replaced {
            tracing::warn!("Category {category} produced more than once; keeping the last one");
        }
    }

    Ok(StatsResponse {
        seasons: seasons.ok_or(StatsError::MissingCategory(Category::Seasons))?,
        ranks: ranks.ok_or(StatsError::MissingCategory(Category::Ranks))?,
        operators: operators.ok_or(StatsError::MissingCategory(Category::Operators))?,
        weapons: weapons.ok_or(StatsError::MissingCategory(Category::Weapons))?,
        maps: maps.ok_or(StatsError::MissingCategory(Category::Maps))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rank, Season, WeaponBucket};

    fn season(slug: &str) -> Season {
        Season {
            slug: slug.to_string(),
            title: "Steel Wave".to_string(),
            start_date: serde_json::json!("2021-03-01"),
        }
    }

    fn all_empty() -> Vec<MappedCategory> {
        vec![
            MappedCategory::Seasons(Vec::new()),
            MappedCategory::Ranks(Vec::new()),
            MappedCategory::Operators(Vec::new()),
            MappedCategory::Weapons(WeaponBucket::new()),
            MappedCategory::Maps(Vec::new()),
        ]
    }

    #[test]
    fn test_assembles_regardless_of_order() {
        let mut mapped = all_empty();
        mapped.reverse();
        mapped[4] = MappedCategory::Seasons(vec![season("y6s1")]);
        mapped.swap(0, 2);

        let response = assemble(mapped).unwrap();
        assert_eq!(response.seasons, vec![season("y6s1")]);

        let json = serde_json::to_value(&response).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for category in Category::ALL {
            assert!(!json[category.slug()].is_null(), "{category} is null");
        }
    }

    #[test]
    fn test_missing_category() {
        let mut mapped = all_empty();
        mapped.retain(|m| m.category() != Category::Ranks);
        let err = assemble(mapped).unwrap_err();
        assert!(matches!(err, StatsError::MissingCategory(Category::Ranks)));
    }

    #[test]
    fn test_duplicate_category_last_wins() {
        let mut mapped = all_empty();
        mapped.push(MappedCategory::Ranks(vec![Rank {
            slug: "gold-1".to_string(),
            title: Some("Gold I".to_string()),
            picture: "p".to_string(),
        }]));
        let response = assemble(mapped).unwrap();
        assert_eq!(response.ranks.len(), 1);
        assert_eq!(response.ranks[0].slug, "gold-1");
    }
}
