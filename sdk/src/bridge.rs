//! Serializable boundary for hosts that embed the deriver: a foreign
//! function bridge handing over loosely typed arguments, or an HTTP handler
//! speaking JSON.
//!
//! Derivation failures are values (`{ "error": ... }`), not `Err`s. Only a
//! request that cannot be decoded at all surfaces as [`BridgeError`], so a
//! host can tell a malformed request apart from seeds that fail to derive.

use {
    crate::{
        derivation::{derive_with_search, ProgramDerivedAddressInput},
        seed::SeedInput,
    },
    serde_json::{json, Value},
    thiserror::Error,
};

const ARGS_USAGE: &str = "args: (programId, seedsArray)";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeriveRequest {
    pub program_id: String,
    pub seeds: Vec<SeedInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeriveResponse {
    pub address: String,
    pub bump: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum BridgeResult {
    Ok(DeriveResponse),
    Err(ErrorResponse),
}

impl BridgeResult {
    fn error(message: impl Into<String>) -> Self {
        Self::Err(ErrorResponse {
            error: message.into(),
        })
    }
}

impl From<BridgeResult> for Value {
    fn from(result: BridgeResult) -> Self {
        match result {
            BridgeResult::Ok(DeriveResponse { address, bump }) => {
                json!({ "address": address, "bump": bump })
            }
            BridgeResult::Err(ErrorResponse { error }) => json!({ "error": error }),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid request body: {0}")]
    Decode(String),
}

/// Search-mode derivation with the result folded into a response value.
pub fn derive_program_address(program_id: &str, seeds: &[SeedInput]) -> BridgeResult {
    let input = ProgramDerivedAddressInput::new(program_id, seeds);
    match derive_with_search(&input) {
        Ok(output) => BridgeResult::Ok(DeriveResponse {
            address: output.address.to_string(),
            bump: output.bump,
        }),
        Err(err) => {
            tracing::debug!(target: "bridge", program_id, %err, "derivation failed");
            BridgeResult::error(err.to_string())
        }
    }
}

/// Entry point for foreign callers passing `(programId, seedsArray)`.
///
/// Each seed may be a string or an array of byte values. Extra arguments
/// are ignored.
pub fn call(args: &[Value]) -> Value {
    let [program_id, seeds, ..] = args else {
        return BridgeResult::error(ARGS_USAGE).into();
    };
    let Some(program_id) = program_id.as_str() else {
        return BridgeResult::error("programId must be a string").into();
    };
    let Some(seeds) = seeds.as_array() else {
        return BridgeResult::error("seeds must be an array").into();
    };

    let mut parsed = Vec::with_capacity(seeds.len());
    for (i, seed) in seeds.iter().enumerate() {
        match SeedInput::try_from(seed) {
            Ok(seed) => parsed.push(seed),
            Err(err) => return BridgeResult::error(format!("seed {i}: {err}")).into(),
        }
    }
    derive_program_address(program_id, &parsed).into()
}

/// Decode a JSON body `{ "programId": ..., "seeds": [...] }` and derive.
pub fn handle_request(body: &str) -> Result<BridgeResult, BridgeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| BridgeError::Decode(err.to_string()))?;
    for field in ["programId", "seeds"] {
        if matches!(value.get(field), None | Some(Value::Null)) {
            return Err(BridgeError::MissingField(field));
        }
    }
    let request: DeriveRequest =
        serde_json::from_value(value).map_err(|err| BridgeError::Decode(err.to_string()))?;
    tracing::trace!(target: "bridge", ?request, "decoded request");

    Ok(derive_program_address(&request.program_id, &request.seeds))
}
