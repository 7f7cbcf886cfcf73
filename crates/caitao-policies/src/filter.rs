//! Filtro del subconjunto objetivo: cerámica pintada neolítica.
//!
//! Un registro entra si cumple la regla de época Y la de estilo. Cada regla
//! es una lista de marcadores (campo, subcadena); basta con que uno
//! coincida. Un campo ausente nunca coincide.

use caitao_domain::{TextField, TextFields};

/// Marcador de subcadena sobre un campo de texto (sensible a mayúsculas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub field: TextField,
    pub marker: &'static str,
}

impl TextRule {
    pub const fn new(field: TextField, marker: &'static str) -> Self {
        Self { field, marker }
    }

    pub fn matches<R: TextFields + ?Sized>(&self, record: &R) -> bool {
        record.text(self.field).is_some_and(|t| t.contains(self.marker))
    }
}

/// Marcadores de época neolítica.
pub const ERA_RULES: [TextRule; 3] = [TextRule::new(TextField::YearName, "新石器"),
                                      TextRule::new(TextField::YearName, "大汶口"),
                                      TextRule::new(TextField::YearName, "龙山")];

/// Marcadores de decoración pintada. `三彩` (vidriado tricolor, posterior)
/// queda cubierto también por `彩`; sólo la regla de época lo descarta.
pub const STYLE_RULES: [TextRule; 3] = [TextRule::new(TextField::Name, "彩"),
                                        TextRule::new(TextField::Description, "彩绘"),
                                        TextRule::new(TextField::Name, "三彩")];

/// Conjunción de dos disyunciones de reglas.
#[derive(Debug, Clone, Copy)]
pub struct SubsetFilter<'a> {
    era: &'a [TextRule],
    style: &'a [TextRule],
}

impl Default for SubsetFilter<'static> {
    fn default() -> Self {
        Self { era: &ERA_RULES,
               style: &STYLE_RULES }
    }
}

impl<'a> SubsetFilter<'a> {
    pub fn new(era: &'a [TextRule], style: &'a [TextRule]) -> Self {
        Self { era, style }
    }

    pub fn accepts<R: TextFields + ?Sized>(&self, record: &R) -> bool {
        self.era.iter().any(|r| r.matches(record)) && self.style.iter().any(|r| r.matches(record))
    }
}

/// Atajo con las reglas por defecto.
pub fn is_target<R: TextFields + ?Sized>(record: &R) -> bool {
    SubsetFilter::default().accepts(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        name: Option<&'static str>,
        description: Option<&'static str>,
        year: Option<&'static str>,
    }

    impl TextFields for Rec {
        fn text(&self, field: TextField) -> Option<&str> {
            match field {
                TextField::Name => self.name,
                TextField::Description => self.description,
                TextField::YearName => self.year,
                TextField::MuseumName => None,
            }
        }
    }

    fn rec(name: Option<&'static str>, description: Option<&'static str>, year: Option<&'static str>) -> Rec {
        Rec { name, description, year }
    }

    #[test]
    fn era_and_style_both_required() {
        assert!(is_target(&rec(Some("彩陶壶"), None, Some("新石器时代晚期"))));
        assert!(!is_target(&rec(Some("彩陶壶"), None, Some("汉代"))));
        assert!(!is_target(&rec(Some("黑陶杯"), None, Some("龙山文化"))));
    }

    #[test]
    fn description_marker_counts_as_style() {
        assert!(is_target(&rec(Some("陶罐"), Some("器身有彩绘纹饰"), Some("大汶口文化"))));
        // "彩" solo en la descripción no basta
        assert!(!is_target(&rec(Some("陶罐"), Some("彩色"), Some("大汶口文化"))));
    }

    #[test]
    fn tri_colour_overlap_depends_on_era() {
        assert!(is_target(&rec(Some("三彩罐"), None, Some("龙山文化"))));
        assert!(!is_target(&rec(Some("三彩马"), None, Some("唐代"))));
    }

    #[test]
    fn absent_fields_never_match() {
        assert!(!is_target(&rec(None, None, None)));
        assert!(!is_target(&rec(Some("彩陶壶"), None, None)));
    }
}
