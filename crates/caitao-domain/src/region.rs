// region.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Etiqueta del catch-all compartida por regiones y formas.
pub const OTHER_LABEL: &str = "其他";

/// Código de región administrativa (ciudades de nivel prefectura de Shandong).
///
/// El orden de declaración es significativo: los clasificadores recorren
/// `RegionCode::ALL` en este orden y el primer acierto gana, de modo que el
/// orden actúa como política de desempate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionCode {
    Jinan,
    Qingdao,
    Zibo,
    Zaozhuang,
    Dongying,
    Yantai,
    Weifang,
    Jining,
    Taian,
    Weihai,
    Rizhao,
    Linyi,
    Dezhou,
    Liaocheng,
    Binzhou,
    Heze,
    /// Museo sin región reconocible.
    Other,
}

impl RegionCode {
    /// Regiones concretas en su orden declarado (sin el catch-all).
    pub const ALL: [RegionCode; 16] = [RegionCode::Jinan,
                                       RegionCode::Qingdao,
                                       RegionCode::Zibo,
                                       RegionCode::Zaozhuang,
                                       RegionCode::Dongying,
                                       RegionCode::Yantai,
                                       RegionCode::Weifang,
                                       RegionCode::Jining,
                                       RegionCode::Taian,
                                       RegionCode::Weihai,
                                       RegionCode::Rizhao,
                                       RegionCode::Linyi,
                                       RegionCode::Dezhou,
                                       RegionCode::Liaocheng,
                                       RegionCode::Binzhou,
                                       RegionCode::Heze];

    /// Etiqueta visible de la región; también es el texto que se busca en
    /// el nombre del museo durante la primera pasada.
    pub fn label(&self) -> &'static str {
        match self {
            RegionCode::Jinan => "济南市",
            RegionCode::Qingdao => "青岛市",
            RegionCode::Zibo => "淄博市",
            RegionCode::Zaozhuang => "枣庄市",
            RegionCode::Dongying => "东营市",
            RegionCode::Yantai => "烟台市",
            RegionCode::Weifang => "潍坊市",
            RegionCode::Jining => "济宁市",
            RegionCode::Taian => "泰安市",
            RegionCode::Weihai => "威海市",
            RegionCode::Rizhao => "日照市",
            RegionCode::Linyi => "临沂市",
            RegionCode::Dezhou => "德州市",
            RegionCode::Liaocheng => "聊城市",
            RegionCode::Binzhou => "滨州市",
            RegionCode::Heze => "菏泽市",
            RegionCode::Other => OTHER_LABEL,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, RegionCode::Other)
    }

    /// Resuelve una etiqueta visible a su código.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si la etiqueta no pertenece al
    /// vocabulario cerrado.
    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        if label == OTHER_LABEL {
            return Ok(RegionCode::Other);
        }
        RegionCode::ALL.iter()
                       .copied()
                       .find(|r| r.label() == label)
                       .ok_or_else(|| DomainError::ValidationError(format!("Región desconocida: {label}")))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegionCode::from_label(s)
    }
}

// Se serializa como su etiqueta para poder usarse como clave de mapas JSON.
impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        RegionCode::from_label(&label).map_err(serde::de::Error::custom)
    }
}
