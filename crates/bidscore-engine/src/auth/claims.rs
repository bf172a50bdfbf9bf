use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `aud` may be a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

/// Claims decoded from a verified credential. Never mutated after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// User id. Empty when the credential carries none.
    #[serde(default)]
    pub sub: String,

    #[serde(default)]
    pub email: String,

    /// Authorization attribute. A credential without a role decodes to an
    /// empty role, which no gate admits.
    #[serde(default)]
    pub role: String,

    #[serde(rename = "tenantId", default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,

    /// Expiry (seconds since the epoch).
    #[serde(deserialize_with = "numeric_date")]
    pub exp: u64,

    #[serde(
        default,
        deserialize_with = "optional_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub iat: Option<u64>,

    #[serde(
        default,
        deserialize_with = "optional_numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub nbf: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl CallerIdentity {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

/// A JWT NumericDate: any non-negative JSON number, truncated to whole seconds.
fn numeric_date<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f64::deserialize(deserializer)?;
    if seconds.is_finite() && seconds >= 0.0 && seconds < u64::MAX as f64 {
        Ok(seconds as u64)
    } else {
        Err(D::Error::custom("NumericDate out of range"))
    }
}

fn optional_numeric_date<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Seconds(#[serde(deserialize_with = "numeric_date")] u64);

    Ok(Option::<Seconds>::deserialize(deserializer)?.map(|Seconds(seconds)| seconds))
}
