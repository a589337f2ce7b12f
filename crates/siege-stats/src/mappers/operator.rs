//! Operators and their loadouts.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{
    Category, Operator, Organization, StatsError, StatsResult, WeaponBucket, WeaponType,
};

use super::{decode, Asset};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperator {
    slug: String,
    operator_name: String,
    operator_icon: Asset,
    loadout_collection: LoadoutCollection,
    #[serde(default)]
    roles: Value,
    localized_items: Faction,
}

#[derive(Debug, Deserialize)]
struct LoadoutCollection {
    items: Vec<LoadoutItem>,
}

/// One loadout slot as published upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutItem {
    pub slug: String,
    pub weapon_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Faction {
    faction_name: String,
    faction_image: Asset,
}

pub fn map_operators(data: &Value) -> StatsResult<Vec<Operator>> {
    let raw: Vec<RawOperator> = decode(Category::Operators, data)?;

    raw.into_iter()
        .map(|op| -> StatsResult<Operator> {
            Ok(Operator {
                loadouts: map_loadout(&op.loadout_collection.items)?,
                slug: op.slug,
                name: op.operator_name,
                icon: op.operator_icon.url,
                roles: op.roles,
                organization: Organization {
                    name: op.localized_items.faction_name,
                    icon: op.localized_items.faction_image.url,
                },
            })
        })
        .collect()
}

/// Group loadout slugs by weapon type.
///
/// Fails on the first tag outside the supported set, so a new upstream
/// category is noticed instead of silently misfiled.
pub fn map_loadout(items: &[LoadoutItem]) -> StatsResult<WeaponBucket<String>> {
    let mut bucket = WeaponBucket::new();

    for item in items {
        let weapon_type = WeaponType::from_tag(&item.weapon_type).ok_or_else(|| {
            StatsError::UnsupportedWeaponType {
                weapon_type: item.weapon_type.clone(),
                context: "operator loadouts",
            }
        })?;
        bucket
            .entry(weapon_type)
            .or_insert_with(Vec::new)
            .push(item.slug.clone());
    }

    Ok(bucket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(slug: &str, weapon_type: &str) -> LoadoutItem {
        LoadoutItem {
            slug: slug.to_string(),
            weapon_type: weapon_type.to_string(),
        }
    }

    fn operator(loadout: Value) -> Value {
        json!({
            "slug": "ash",
            "operatorName": "Ash",
            "operatorIcon": { "url": "https://img.example/ash.png" },
            "loadoutCollection": { "items": loadout },
            "roles": ["attacker", "entry-fragger"],
            "localizedItems": {
                "factionName": "FBI SWAT",
                "factionImage": { "url": "https://img.example/swat.png" }
            }
        })
    }

    #[test]
    fn test_loadout_grouped_by_type() {
        let bucket = map_loadout(&[
            item("r4-c", "primary"),
            item("g36c", "primary"),
            item("5-7-usg", "secondary"),
            item("breach-charge", "gadget"),
            item("m120-crem", "unique-ability"),
        ])
        .unwrap();

        assert_eq!(bucket.len(), 4);
        assert_eq!(bucket[&WeaponType::Primary], vec!["r4-c", "g36c"]);
        assert_eq!(bucket[&WeaponType::Secondary], vec!["5-7-usg"]);
        assert_eq!(bucket[&WeaponType::UniqueAbility], vec!["m120-crem"]);
    }

    #[test]
    fn test_loadout_only_present_types() {
        let bucket = map_loadout(&[item("claymore", "gadget")]).unwrap();
        assert_eq!(bucket.keys().copied().collect::<Vec<_>>(), vec![WeaponType::Gadget]);
    }

    #[test]
    fn test_loadout_rejects_unknown_type() {
        let err = map_loadout(&[item("r4-c", "primary"), item("knife", "melee")]).unwrap_err();
        match err {
            StatsError::UnsupportedWeaponType { weapon_type, context } => {
                assert_eq!(weapon_type, "melee");
                assert_eq!(context, "operator loadouts");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_operator_mapping() {
        let data = json!([operator(json!([
            { "slug": "r4-c", "weaponType": "primary" },
            { "slug": "m120-crem", "weaponType": "unique-ability" }
        ]))]);
        let json = serde_json::to_value(map_operators(&data).unwrap()).unwrap();
        assert_eq!(
            json,
            json!([{
                "slug": "ash",
                "name": "Ash",
                "icon": "https://img.example/ash.png",
                "loadouts": { "primary": ["r4-c"], "unique-ability": ["m120-crem"] },
                "roles": ["attacker", "entry-fragger"],
                "organization": { "name": "FBI SWAT", "icon": "https://img.example/swat.png" }
            }])
        );
    }

    #[test]
    fn test_null_roles_pass_through() {
        let mut op = operator(json!([]));
        op["roles"] = Value::Null;
        let operators = map_operators(&json!([op])).unwrap();
        assert_eq!(operators[0].roles, Value::Null);
        assert!(operators[0].loadouts.is_empty());
    }

    #[test]
    fn test_operator_with_unknown_loadout_type_fails() {
        let data = json!([operator(json!([{ "slug": "knife", "weaponType": "melee" }]))]);
        let err = map_operators(&data).unwrap_err();
        assert!(matches!(err, StatsError::UnsupportedWeaponType { .. }));
    }

    #[test]
    fn test_operator_missing_faction_is_shape_error() {
        let mut op = operator(json!([]));
        op["localizedItems"] = json!({});
        let err = map_operators(&json!([op])).unwrap_err();
        assert!(matches!(err, StatsError::Shape { category: Category::Operators, .. }));
    }
}
