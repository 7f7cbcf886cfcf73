// caitao-domain library entry point
pub mod error;
pub mod normalize;
pub mod record;
pub mod region;
pub mod shape;
pub use error::DomainError;
pub use normalize::normalize_all;
pub use record::{ArtifactRecord, ClassifiedRecord, RawRecord, RecordId, TextField, TextFields};
pub use region::{RegionCode, OTHER_LABEL};
pub use shape::ShapeTag;

/// Lee un lote de filas desde un documento JSON (array de objetos).
///
/// # Errores
/// `DomainError::SerializationError` si el documento no es un array de
/// objetos.
pub fn parse_rows(json: &str) -> Result<Vec<RawRecord>, DomainError> {
    Ok(serde_json::from_str(json)?)
}
