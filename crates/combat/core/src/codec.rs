//! Deterministic binary encoding for combat values.
//!
//! Uses bincode so the same value always encodes to the same bytes, which is
//! what a host needs when shipping events across a WASM or network boundary
//! and comparing them on the other side.

use alloc::vec::Vec;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CombatError, ErrorSeverity};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        type_name: &'static str,
        source: bincode::Error,
    },

    #[error("failed to decode {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        source: bincode::Error,
    },
}

impl CombatError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Encode { .. } => ErrorSeverity::Internal,
            Self::Decode { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode { .. } => "CODEC_ENCODE",
            Self::Decode { .. } => "CODEC_DECODE",
        }
    }
}

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(value).map_err(|source| CodecError::Encode {
        type_name: core::any::type_name::<T>(),
        source,
    })
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    bincode::deserialize(bytes).map_err(|source| CodecError::Decode {
        type_name: core::any::type_name::<T>(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ability, Character, CombatEvent, resolve_attack};

    #[test]
    fn combat_event_survives_binary_roundtrip() {
        let event = resolve_attack(
            &Character::new_player("Hero"),
            &Character::new_monster("Slime"),
            &Ability::basic_attack(),
        );

        let bytes = encode(&event).unwrap();
        let decoded: CombatEvent = decode(&bytes).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn encoding_is_deterministic() {
        let hero = Character::new_player("Hero");
        assert_eq!(encode(&hero).unwrap(), encode(&hero.clone()).unwrap());
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let bytes = encode(&Character::new_player("Hero")).unwrap();
        let err = decode::<Character>(&bytes[..bytes.len() / 2]).unwrap_err();

        assert_eq!(err.error_code(), "CODEC_DECODE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
