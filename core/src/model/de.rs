// ## 📂 File: `src/model/de.rs`

//! model/de.rs
//! Lenient scalar readers shared by the document and graph shapes.
//!
//! Hand-edited YAML routinely holds `tailNumber: 172` or
//! `schemaVersion: 1.0`, and vendor JSON may carry `null`. Both read as
//! text rather than failing the whole conversion.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            // Debug keeps the trailing `.0` of `1.0`.
            Scalar::Float(f) => format!("{:?}", f),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Read a scalar as a string; `null` becomes `""`.
pub fn scalar_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(d)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Read an optional scalar as a string; `null` becomes `None`.
pub fn opt_scalar_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(d)?.map(Scalar::into_string))
}

/// Read a sequence; `null` becomes empty.
pub fn seq_or_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}
