//! Lenient field decoders for document-store rows.
//!
//! Rows are written by several clients over time, so any field may come
//! back as `null` and older rows may carry codes that no longer exist.
//! Neither case should reject the whole record.

use crate::arsenal::WeaponCategory;
use serde::{Deserialize, Deserializer};

/// Decode `null` as the field's default value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a weapon category code, mapping unknown codes to `None`
pub fn weapon_category<'de, D>(deserializer: D) -> Result<Option<WeaponCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<i64>::deserialize(deserializer)?;
    Ok(code
        .and_then(|c| u8::try_from(c).ok())
        .and_then(WeaponCategory::from_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "null_as_default")]
        count: u64,
        #[serde(deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(deserialize_with = "weapon_category")]
        category: Option<WeaponCategory>,
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let row: Row =
            serde_json::from_str(r#"{"count":null,"tags":null,"category":null}"#).unwrap();
        assert_eq!(row.count, 0);
        assert!(row.tags.is_empty());
        assert_eq!(row.category, None);
    }

    #[test]
    fn test_present_values_decode() {
        let row: Row = serde_json::from_str(r#"{"count":7,"tags":["a"],"category":2}"#).unwrap();
        assert_eq!(row.count, 7);
        assert_eq!(row.tags, vec!["a".to_string()]);
        assert_eq!(row.category, Some(WeaponCategory::Dmr));
    }

    #[test]
    fn test_unknown_category_codes() {
        for code in ["7", "0", "-1", "300"] {
            let row: Row = serde_json::from_str(&format!(r#"{{"category":{}}}"#, code)).unwrap();
            assert_eq!(row.category, None, "code {}", code);
        }
    }

    #[test]
    fn test_wrong_type_still_errors() {
        assert!(serde_json::from_str::<Row>(r#"{"count":"many"}"#).is_err());
    }
}
