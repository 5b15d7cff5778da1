use serde::{Deserialize, Deserializer, Serialize, de};

/// Claims carried by a mist access token.
///
/// NOTE:
/// - `aud` may be a single string or an array of strings on the wire; both become `audience`.
/// - `exp`/`iat`/`nbf` are NumericDates: integer or fractional seconds, fractions truncated.
/// - `iss` and `user_id` default to empty so that a missing value surfaces as a claim check
///   failure rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "iss", default)]
    pub issuer: String,

    #[serde(
        rename = "aud",
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audience: Vec<String>,

    #[serde(rename = "exp", deserialize_with = "numeric_date")]
    pub expires_at: u64,

    #[serde(
        rename = "iat",
        default,
        deserialize_with = "optional_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub issued_at: Option<u64>,

    #[serde(
        rename = "nbf",
        default,
        deserialize_with = "optional_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub not_before: Option<u64>,

    #[serde(rename = "sub", default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default)]
    pub user_id: String,
}

impl Claims {
    pub fn has_audience(&self, expected: &str) -> bool {
        self.audience.iter().any(|aud| aud == expected)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(aud)) => vec![aud],
        Some(OneOrMany::Many(auds)) => auds,
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericDate {
    Seconds(u64),
    Fractional(f64),
}

impl NumericDate {
    fn into_seconds<E: de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Seconds(secs) => Ok(secs),
            Self::Fractional(secs) if secs.is_finite() && secs >= 0.0 && secs < u64::MAX as f64 => {
                Ok(secs.trunc() as u64)
            }
            Self::Fractional(_) => Err(E::custom("NumericDate out of range")),
        }
    }
}

fn numeric_date<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumericDate::deserialize(deserializer)?.into_seconds()
}

fn optional_numeric_date<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumericDate>::deserialize(deserializer)?
        .map(NumericDate::into_seconds)
        .transpose()
}
