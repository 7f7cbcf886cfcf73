//! Clasificador de formas a partir del nombre de la pieza.

use caitao_domain::ShapeTag;

/// Clasifica un nombre en una `ShapeTag`.
///
/// 1. Si el último carácter (tras recortar espacios) es un glifo del
///    vocabulario, gana ese.
/// 2. Si no, la primera forma del vocabulario (orden declarado) contenida
///    en el nombre.
/// 3. Si no, `ShapeTag::Other`.
pub fn classify_shape(name: &str) -> ShapeTag {
    let trimmed = name.trim();
    if let Some(tag) = trimmed.chars().last().and_then(ShapeTag::from_glyph) {
        return tag;
    }
    ShapeTag::VOCABULARY.iter()
                        .copied()
                        .find(|tag| tag.glyph().is_some_and(|g| trimmed.contains(g)))
                        .unwrap_or(ShapeTag::Other)
}
