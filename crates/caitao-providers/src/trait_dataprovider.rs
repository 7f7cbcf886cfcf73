//! Trait para proveedores de datos agregados.
//!
//! Un `DataProvider` produce una vista agregada (estadísticas, pivotes,
//! galerías) a partir del conjunto de trabajo ya clasificado. Es una
//! reducción pura: misma entrada, misma salida, sin estado mutable.
use caitao_domain::ClassifiedRecord;
use serde::Serialize;

pub trait DataProvider: Send + Sync {
    /// Tipo serializable del resultado.
    type Output: Serialize;

    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;
    fn get_description(&self) -> &str;

    /// Calcula el agregado sobre el conjunto de trabajo (orden de entrada
    /// significativo para los desempates).
    fn calculate(&self, items: &[ClassifiedRecord]) -> Self::Output;
}
