// shape.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::region::OTHER_LABEL;
use crate::DomainError;

/// Tipología (forma) de una pieza, derivada de su nombre.
///
/// Cada etiqueta es un único glifo que suele aparecer al final del nombre
/// (`红陶罐` → `罐`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeTag {
    Guan,
    Hu,
    Pen,
    Bo,
    Ding,
    Gui,
    Dou,
    Yong,
    Lu,
    Pan,
    Zun,
    Ping,
    Zhen,
    Bei,
    He,
    Other,
}

impl ShapeTag {
    /// Vocabulario en orden declarado (sin el catch-all).
    pub const VOCABULARY: [ShapeTag; 15] = [ShapeTag::Guan,
                                            ShapeTag::Hu,
                                            ShapeTag::Pen,
                                            ShapeTag::Bo,
                                            ShapeTag::Ding,
                                            ShapeTag::Gui,
                                            ShapeTag::Dou,
                                            ShapeTag::Yong,
                                            ShapeTag::Lu,
                                            ShapeTag::Pan,
                                            ShapeTag::Zun,
                                            ShapeTag::Ping,
                                            ShapeTag::Zhen,
                                            ShapeTag::Bei,
                                            ShapeTag::He];

    /// Glifo de la forma; `None` para el catch-all.
    pub fn glyph(&self) -> Option<char> {
        let c = match self {
            ShapeTag::Guan => '罐',
            ShapeTag::Hu => '壶',
            ShapeTag::Pen => '盆',
            ShapeTag::Bo => '钵',
            ShapeTag::Ding => '鼎',
            ShapeTag::Gui => '鬶',
            ShapeTag::Dou => '豆',
            ShapeTag::Yong => '俑',
            ShapeTag::Lu => '炉',
            ShapeTag::Pan => '盘',
            ShapeTag::Zun => '尊',
            ShapeTag::Ping => '瓶',
            ShapeTag::Zhen => '枕',
            ShapeTag::Bei => '杯',
            ShapeTag::He => '盉',
            ShapeTag::Other => return None,
        };
        Some(c)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShapeTag::Guan => "罐",
            ShapeTag::Hu => "壶",
            ShapeTag::Pen => "盆",
            ShapeTag::Bo => "钵",
            ShapeTag::Ding => "鼎",
            ShapeTag::Gui => "鬶",
            ShapeTag::Dou => "豆",
            ShapeTag::Yong => "俑",
            ShapeTag::Lu => "炉",
            ShapeTag::Pan => "盘",
            ShapeTag::Zun => "尊",
            ShapeTag::Ping => "瓶",
            ShapeTag::Zhen => "枕",
            ShapeTag::Bei => "杯",
            ShapeTag::He => "盉",
            ShapeTag::Other => OTHER_LABEL,
        }
    }

    /// Forma cuyo glifo es `c`, si existe.
    pub fn from_glyph(c: char) -> Option<Self> {
        ShapeTag::VOCABULARY.iter().copied().find(|s| s.glyph() == Some(c))
    }

    pub fn is_other(&self) -> bool {
        matches!(self, ShapeTag::Other)
    }

    /// # Errores
    /// `DomainError::ValidationError` si la etiqueta no es una forma conocida.
    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        if label == OTHER_LABEL {
            return Ok(ShapeTag::Other);
        }
        ShapeTag::VOCABULARY.iter()
                            .copied()
                            .find(|s| s.label() == label)
                            .ok_or_else(|| DomainError::ValidationError(format!("Forma desconocida: {label}")))
    }
}

impl fmt::Display for ShapeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeTag::from_label(s)
    }
}

impl Serialize for ShapeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ShapeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        ShapeTag::from_label(&label).map_err(serde::de::Error::custom)
    }
}
