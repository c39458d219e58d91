use {
    crate::domain::eth,
    serde::{Deserialize, Deserializer, de},
    serde_with::DeserializeAs,
};

/// Deserialize an [`eth::ChainId`] from either a decimal string or a number.
#[derive(Debug)]
pub struct ChainId;

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(u64),
    String(String),
}

impl<'de> DeserializeAs<'de, eth::ChainId> for ChainId {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<eth::ChainId, D::Error> {
        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => value,
            Raw::String(value) => value.parse().map_err(de::Error::custom)?,
        };
        eth::ChainId::new(value).map_err(de::Error::custom)
    }
}
