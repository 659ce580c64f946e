use bigdecimal::BigDecimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// One size of a photo or a file/sticker thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Unique identifier for this file
    #[serde(rename = "file_id")]
    pub id: String,
    pub width: i32,
    pub height: i32,
    /// Optional. File size
    #[serde(rename = "file_size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// A sticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Unique identifier for this file
    #[serde(rename = "file_id")]
    pub id: String,
    pub width: i32,
    pub height: i32,
    /// Optional. Sticker thumbnail in .webp or .jpg format
    #[serde(
        default,
        deserialize_with = "empty_object_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumb: Option<PhotoSize>,
    /// Optional. File size
    #[serde(rename = "file_size", default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// A phone contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Optional. Contact's user identifier in Telegram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A point on the map.
///
/// Coordinates are decoded straight from the JSON number text, never through `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(with = "exact_number")]
    pub longitude: BigDecimal,
    #[serde(with = "exact_number")]
    pub latitude: BigDecimal,
}

/// JSON numbers carried as their literal text (`serde_json/arbitrary_precision`)
mod exact_number {
    use super::*;

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;

        serde_json::Number::from_str(&value.to_string())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as _;

        let number = serde_json::Number::deserialize(deserializer)?;
        BigDecimal::from_str(&number.to_string()).map_err(D::Error::custom)
    }
}

// The API sends a missing thumbnail as `{}`
fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<PhotoSize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_keeps_all_digits() {
        let location: Location = serde_json::from_str(
            r#"{"longitude":37.6176351234567890123456789012,"latitude":55.755814}"#,
        )
        .unwrap();
        assert_eq!(location.longitude.to_string(), "37.6176351234567890123456789012");
        assert_eq!(location.longitude.digits(), 30);
        assert_eq!(
            location.latitude,
            BigDecimal::from_str("55.755814").unwrap()
        );

        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(
            json,
            r#"{"longitude":37.6176351234567890123456789012,"latitude":55.755814}"#
        );
    }

    #[test]
    fn test_sticker_thumbnail() {
        let sticker: Sticker = serde_json::from_str(
            r#"{"file_id":"abc","width":512,"height":512,"thumb":{},"file_size":1024}"#,
        )
        .unwrap();
        assert_eq!(sticker.thumb, None);
        assert_eq!(sticker.size, Some(1024));

        let sticker: Sticker = serde_json::from_str(
            r#"{"file_id":"abc","width":512,"height":512,
                "thumb":{"file_id":"def","width":128,"height":128}}"#,
        )
        .unwrap();
        let thumb = sticker.thumb.unwrap();
        assert_eq!(thumb.id, "def");
        assert_eq!(thumb.size, None);
    }
}
