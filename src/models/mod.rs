pub mod addresses;
pub mod banners;
pub mod classify;
pub mod comments;
pub mod community;
pub mod envelope;
pub mod favorites;
pub mod goods;
pub mod likes;
pub mod messaging;
pub mod orders;
pub mod replies;
pub mod responds;
pub mod uploads;
pub mod users;

/// Lenient deserializers for fields that arrive as JSON numbers from the app
/// but as plain strings from multipart form fields.
pub(crate) mod flex {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let value = Option::<IntOrString>::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(IntOrString::Int(n)) => Ok(Some(n)),
            Some(IntOrString::Str(s)) => {
                s.trim().parse().map(Some).map_err(serde::de::Error::custom)
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(serde_json::Number),
        Str(String),
    }

    pub fn opt_decimal<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        let value = Option::<NumOrString>::deserialize(deserializer)?;
        let raw = match value {
            None => return Ok(None),
            Some(NumOrString::Num(n)) => n.to_string(),
            Some(NumOrString::Str(s)) => s,
        };
        Decimal::from_str(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom)
    }

    #[cfg(test)]
    mod tests {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "super::opt_i64")]
            id: Option<i64>,
            #[serde(default, deserialize_with = "super::opt_decimal")]
            price: Option<rust_decimal::Decimal>,
        }

        #[test]
        fn accepts_numbers_and_strings() {
            let json: Probe = serde_json::from_str(r#"{"id": 5, "price": 12.5}"#).unwrap();
            assert_eq!(json.id, Some(5));
            assert_eq!(json.price.unwrap().to_string(), "12.5");

            let form: Probe = serde_json::from_str(r#"{"id": "5", "price": "12.50"}"#).unwrap();
            assert_eq!(form.id, Some(5));
            assert_eq!(form.price.unwrap().to_string(), "12.50");
        }

        #[test]
        fn missing_fields_stay_none() {
            let probe: Probe = serde_json::from_str("{}").unwrap();
            assert!(probe.id.is_none());
            assert!(probe.price.is_none());
        }
    }
}
