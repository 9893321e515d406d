use crate::{UUID_TEXT_LEN, Uuid, encode_uuid_hex};
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

struct UuidTextVisitor<F> {
    expecting: &'static str,
    parse: F,
}

impl<'de, F> de::Visitor<'de> for UuidTextVisitor<F>
where
    F: FnOnce(&str) -> crate::Result<Uuid>,
{
    type Value = Uuid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        (self.parse)(v).map_err(de::Error::custom)
    }
}

/// Serializes as canonical `8-4-4-4-12` lowercase text.
impl Serialize for Uuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0_u8; UUID_TEXT_LEN];
        encode_uuid_hex(&self.to_bytes(), &mut buf);
        let text = core::str::from_utf8(&buf).map_err(serde::ser::Error::custom)?;
        s.serialize_str(text)
    }
}

/// Deserializes from UUID text in any case, with or without dashes.
impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(UuidTextVisitor {
            expecting: "a uuid string",
            parse: Uuid::parse,
        })
    }
}

/// Serializes a [`Uuid`] as its 22-character short identifier.
pub mod as_short_uuid {
    use super::*;

    pub fn serialize<S>(id: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&id.to_short())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(UuidTextVisitor {
            expecting: "a 22-character short uuid",
            parse: Uuid::from_short,
        })
    }
}

/// Serializes a [`Uuid`] as its raw `u128`.
pub mod as_native_uuid {
    use super::*;

    pub fn serialize<S>(id: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(d).map(Uuid::from_raw)
    }
}
