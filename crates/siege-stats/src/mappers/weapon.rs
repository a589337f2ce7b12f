//! Weapons and gadgets.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Category, StatsError, StatsResult, Weapon, WeaponBucket, WeaponType};

use super::{decode, Asset};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeapon {
    slug: String,
    weapon_type: String,
    #[serde(default)]
    localized_items: Option<WeaponText>,
    #[serde(default)]
    weapon_image: Option<Asset>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WeaponText {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    weapon_subtype: Option<String>,
}

/// Group weapons by type. Localized text and image are optional upstream.
pub fn map_weapons(data: &Value) -> StatsResult<WeaponBucket<Weapon>> {
    let raw: Vec<RawWeapon> = decode(Category::Weapons, data)?;
    let mut bucket = WeaponBucket::new();

    for weapon in raw {
        let weapon_type = WeaponType::from_tag(&weapon.weapon_type).ok_or_else(|| {
            StatsError::UnsupportedWeaponType {
                weapon_type: weapon.weapon_type.clone(),
                context: "weapons",
            }
        })?;

        let (title, category_name) = match weapon.localized_items {
            Some(text) => (text.title, text.weapon_subtype),
            None => (None, None),
        };

        bucket
            .entry(weapon_type)
            .or_insert_with(Vec::new)
            .push(Weapon {
                slug: weapon.slug,
                title,
                category_name,
                image: weapon.weapon_image.map(|a| a.url),
            });
    }

    Ok(bucket)
}
