//! Seeds as they arrive from outside: UTF-8 text or raw bytes.

use {serde_json::Value, thiserror::Error};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed must be a string or a byte array")]
    UnsupportedType,
}

/// A single seed. Text contributes its UTF-8 bytes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum SeedInput {
    Text(String),
    Bytes(Vec<u8>),
}

impl SeedInput {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes.as_slice(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for SeedInput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for SeedInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for SeedInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for SeedInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl TryFrom<&Value> for SeedInput {
    type Error = SeedError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|byte| u8::try_from(byte).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(Self::Bytes)
                .ok_or(SeedError::UnsupportedType),
            _ => Err(SeedError::UnsupportedType),
        }
    }
}
