//! Artifacts: el dato que un step entrega al siguiente.
//!
//! Un `Artifact` es un sobre con el nombre del tipo (`kind`), su versión de
//! esquema, el payload JSON y el hash blake3 del payload canónico. El
//! payload no lleva metadatos propios; los tipos del pipeline lo
//! (de)serializan a través de `ArtifactSpec`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::hashing::hash_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: String,
    pub version: u32,
    pub hash: String,
    pub payload: Value,
}

impl Artifact {
    /// Envuelve un payload y calcula su hash.
    pub fn seal(kind: &str, version: u32, payload: Value) -> Self {
        let hash = hash_value(&payload);
        Self { kind: kind.to_string(),
               version,
               hash,
               payload }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArtifactError {
    #[error("se esperaba '{expected}' y llegó '{found}'")]
    KindMismatch { expected: &'static str, found: String },
    #[error("'{kind}' v{found} no es compatible con v{expected}")]
    VersionMismatch { kind: &'static str, expected: u32, found: u32 },
    #[error("payload inválido: {0}")]
    Payload(String),
}

/// Tipo Rust que viaja dentro de un `Artifact`.
pub trait ArtifactSpec: Serialize + DeserializeOwned {
    /// Nombre estable del tipo dentro del sobre.
    const KIND: &'static str;
    /// Se incrementa ante cambios incompatibles del payload.
    const VERSION: u32 = 1;

    fn encode(&self) -> Result<Artifact, ArtifactError> {
        let payload = serde_json::to_value(self).map_err(|e| ArtifactError::Payload(e.to_string()))?;
        Ok(Artifact::seal(Self::KIND, Self::VERSION, payload))
    }

    fn decode(artifact: &Artifact) -> Result<Self, ArtifactError> {
        if artifact.kind != Self::KIND {
            return Err(ArtifactError::KindMismatch { expected: Self::KIND,
                                                     found: artifact.kind.clone() });
        }
        if artifact.version != Self::VERSION {
            return Err(ArtifactError::VersionMismatch { kind: Self::KIND,
                                                        expected: Self::VERSION,
                                                        found: artifact.version });
        }
        Self::deserialize(&artifact.payload).map_err(|e| ArtifactError::Payload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Shapes {
        tags: Vec<String>,
    }

    impl ArtifactSpec for Shapes {
        const KIND: &'static str = "shapes";
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct ShapesV2 {
        tags: Vec<String>,
    }

    impl ArtifactSpec for ShapesV2 {
        const KIND: &'static str = "shapes";
        const VERSION: u32 = 2;
    }

    #[test]
    fn encode_then_decode_keeps_value() {
        let s = Shapes { tags: vec!["罐".into(), "壶".into()] };
        let a = s.encode().unwrap();
        assert_eq!(a.kind, "shapes");
        assert_eq!(a.hash.len(), 64);
        assert_eq!(Shapes::decode(&a).unwrap(), s);
    }

    #[test]
    fn decode_checks_kind_and_version() {
        let wrong_kind = Artifact::seal("records", 1, json!({"tags": []}));
        assert!(matches!(Shapes::decode(&wrong_kind), Err(ArtifactError::KindMismatch { .. })));
        let a = Shapes { tags: vec![] }.encode().unwrap();
        assert!(matches!(ShapesV2::decode(&a), Err(ArtifactError::VersionMismatch { found: 1, .. })));
        let bad = Artifact::seal("shapes", 1, json!({"tags": 3}));
        assert!(matches!(Shapes::decode(&bad), Err(ArtifactError::Payload(_))));
    }
}
