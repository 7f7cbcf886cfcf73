//! Selección del registro "protagonista".
//!
//! Contrato equivalente al de las políticas de selección deterministas:
//! dado el conjunto de trabajo, se elige un único índice y se devuelve un
//! rationale auditable (política, candidatos considerados, empates).

use caitao_core::hashing::hash_value;
use caitao_domain::ClassifiedRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Regla de desempate determinista.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TieRule {
    /// Gana el primero en el orden del conjunto de trabajo.
    FirstEncountered,
}

/// Explicación tipada de la decisión.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rationale {
    pub policy_id: String,
    pub considered_n: usize,
    pub selected_index: usize,
    pub max_clicks: u64,
    /// Índices empatados en el máximo, en orden de aparición.
    pub ties: Vec<usize>,
    pub tie_break_rule: TieRule,
}

impl Rationale {
    /// Hash canónico del rationale (para logs y auditoría).
    pub fn digest(&self) -> String {
        hash_value(&serde_json::to_value(self).unwrap_or(Value::Null))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpotlightDecision {
    pub selected_index: usize,
    pub policy_id: String,
    pub rationale: Rationale,
}

/// Contrato de políticas de selección del protagonista.
pub trait SpotlightPolicy {
    fn id(&self) -> &'static str;
    /// `None` sólo si no hay candidatos.
    fn choose(&self, items: &[ClassifiedRecord]) -> Option<SpotlightDecision>;
}

/// Política: mayor `clickCounts`, empates al primero encontrado.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxClicksPolicy;

impl MaxClicksPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl SpotlightPolicy for MaxClicksPolicy {
    fn id(&self) -> &'static str {
        "max_clicks"
    }

    fn choose(&self, items: &[ClassifiedRecord]) -> Option<SpotlightDecision> {
        let max_clicks = items.iter().map(ClassifiedRecord::click_counts).max()?;
        let ties: Vec<usize> = items.iter()
                                    .enumerate()
                                    .filter(|(_, r)| r.click_counts() == max_clicks)
                                    .map(|(i, _)| i)
                                    .collect();
        let selected_index = *ties.first()?;
        let rationale = Rationale { policy_id: self.id().into(),
                                    considered_n: items.len(),
                                    selected_index,
                                    max_clicks,
                                    ties,
                                    tie_break_rule: TieRule::FirstEncountered };
        Some(SpotlightDecision { selected_index,
                                 policy_id: self.id().into(),
                                 rationale })
    }
}

/// Percentil por rango promedio: con `b` valores estrictamente menores y
/// `t` iguales a `value`, `((b + 1 + b + t) / 2) / n`.
///
/// Con `values` vacío el resultado es NaN.
pub fn rank_percentile(values: &[u64], value: u64) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let below = values.iter().filter(|v| **v < value).count();
    let ties = values.iter().filter(|v| **v == value).count();
    let avg_rank = (below + 1 + below + ties) as f64 / 2.0;
    avg_rank / n as f64
}
