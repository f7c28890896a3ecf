//! Decoding of API values whose numbers arrive as strings.
//!
//! Every observation the API returns is a flat JSON object: a `datetime`
//! string in one of the layouts of [`TimeFormat`], and numeric fields sent as
//! decimal strings. A value shape implements [`Record`] by naming its fields
//! through [`Fields`]; [`decode_value`] is the single routine all shapes go
//! through, whether reached from serde or from [`decode_response`].

use chrono::{NaiveDateTime, NaiveTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::interval::TimeFormat;
use super::meta::Response;
use crate::Error;

/// One undecoded observation, as found in the `values` array.
pub type RawValue = serde_json::Map<String, serde_json::Value>;

/// A single field of an observation failed to decode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing value {field}")]
    Missing { field: &'static str },
    #[error("failed to parse value {field} into float: '{value}'")]
    Number { field: &'static str, value: String },
    #[error("failed to parse value {field} into date time: '{value}'")]
    DateTime { field: &'static str, value: String },
}

impl ParseError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ParseError::Missing { field }
            | ParseError::Number { field, .. }
            | ParseError::DateTime { field, .. } => field,
        }
    }
}

/// Typed accessors over one raw observation.
pub struct Fields<'a> {
    raw: &'a RawValue,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a RawValue) -> Self {
        Self { raw }
    }

    /// Whether the observation carries `field` at all.
    pub fn contains(&self, field: &str) -> bool {
        self.raw.contains_key(field)
    }

    fn text(&self, field: &'static str) -> Result<Option<&'a str>, ParseError> {
        match self.raw.get(field) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(ParseError::Number {
                field,
                value: other.to_string(),
            }),
        }
    }

    /// The `datetime` field, parsed with the layout inferred from its text.
    pub fn datetime(&self) -> Result<NaiveDateTime, ParseError> {
        const FIELD: &str = "datetime";
        let raw = self
            .text(FIELD)
            .map_err(|_| ParseError::DateTime {
                field: FIELD,
                value: self.raw.get(FIELD).map(|v| v.to_string()).unwrap_or_default(),
            })?
            .ok_or(ParseError::Missing { field: FIELD })?;
        TimeFormat::infer(raw)
            .parse(raw)
            .map_err(|_| ParseError::DateTime {
                field: FIELD,
                value: raw.to_string(),
            })
    }

    /// A required decimal-string field.
    pub fn number(&self, field: &'static str) -> Result<f64, ParseError> {
        let raw = self.text(field)?.ok_or(ParseError::Missing { field })?;
        parse_decimal(field, raw)
    }

    /// A decimal-string field that may be absent or empty, which reads as zero.
    pub fn number_or_zero(&self, field: &'static str) -> Result<f64, ParseError> {
        match self.text(field)? {
            None | Some("") => Ok(0.0),
            Some(raw) => parse_decimal(field, raw),
        }
    }
}

/// Parses a plain decimal string: optional minus, digits, optional fraction.
///
/// Exponents, signs other than `-`, `inf`, `NaN` and surrounding whitespace
/// are rejected.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::Number {
        field,
        value: raw.to_string(),
    };
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int) || frac.is_some_and(|f| !all_digits(f)) {
        return Err(invalid());
    }
    raw.parse::<f64>().map_err(|_| invalid())
}

/// Writes an observation back in the shape the API sends it.
#[derive(Default)]
pub struct Encoder {
    raw: RawValue,
}

impl Encoder {
    /// Writes `datetime`, dropping the time of day when it is midnight.
    pub fn datetime(&mut self, value: &NaiveDateTime) -> &mut Self {
        let format = if value.time() == NaiveTime::MIN {
            TimeFormat::Date
        } else {
            TimeFormat::DateTime
        };
        self.raw
            .insert("datetime".to_string(), format.render(value).into());
        self
    }

    /// Writes `value` as a decimal string.
    pub fn number(&mut self, field: &str, value: f64) -> &mut Self {
        self.raw.insert(field.to_string(), value.to_string().into());
        self
    }
}

/// A value shape decodable from, and encodable to, one raw observation.
pub trait Record: Sized {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError>;

    fn encode(&self, out: &mut Encoder);
}

/// Decodes one observation into `V`.
pub fn decode_value<V: Record>(raw: &RawValue) -> Result<V, ParseError> {
    V::decode(&Fields::new(raw))
}

/// Encodes `value` into the observation [`decode_value`] reads back.
pub fn encode_value<V: Record>(value: &V) -> RawValue {
    let mut out = Encoder::default();
    value.encode(&mut out);
    out.raw
}

/// Body of an API-level failure, returned with HTTP 200.
#[derive(Deserialize)]
struct ApiFailure {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

pub(crate) fn check_status(body: &serde_json::Value) -> Result<(), Error> {
    if body.get("status").and_then(|s| s.as_str()) == Some("error") {
        let failure = ApiFailure::deserialize(body)?;
        return Err(Error::Api {
            code: failure.code,
            message: failure.message,
        });
    }
    Ok(())
}

/// Decodes a full `{meta, values, status}` envelope.
///
/// Stops at the first value that fails, reporting it as [`Error::Parse`].
pub fn decode_response<M, V>(body: &[u8]) -> Result<Response<M, V>, Error>
where
    M: DeserializeOwned,
    V: Record,
{
    let body: serde_json::Value = serde_json::from_slice(body)?;
    check_status(&body)?;
    let raw: Response<M, RawValue> = serde_json::from_value(body)?;
    let values = raw
        .values
        .iter()
        .map(decode_value::<V>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Response {
        meta: raw.meta,
        values,
        status: raw.status,
    })
}

/// Implements `TryFrom<RawValue>` through [`decode_value`] and
/// `From<_> for RawValue` through [`encode_value`], so each shape can use
/// `#[serde(try_from = "RawValue", into = "RawValue")]`.
macro_rules! decode_via_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<$crate::types::RawValue> for $ty {
                type Error = $crate::types::ParseError;

                fn try_from(raw: $crate::types::RawValue) -> Result<Self, Self::Error> {
                    $crate::types::decode_value(&raw)
                }
            }

            impl From<$ty> for $crate::types::RawValue {
                fn from(value: $ty) -> Self {
                    $crate::types::encode_value(&value)
                }
            }
        )+
    };
}
pub(crate) use decode_via_record;
