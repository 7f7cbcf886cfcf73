//! Normalización y serialización del documento de salida.
use serde::Serialize;
use serde_json::Value;

use crate::error::AdapterError;

/// Reemplaza recursivamente todo número no finito por `null`.
///
/// `serde_json::to_value` ya convierte NaN/∞ en `null`; esta pasada lo
/// garantiza para cualquier `Value` de entrada. Es idempotente y deja
/// intacto todo lo demás.
pub fn null_non_finite(value: Value) -> Value {
    match value {
        Value::Number(n) if n.as_f64().is_some_and(|f| !f.is_finite()) => Value::Null,
        Value::Array(items) => Value::Array(items.into_iter().map(null_non_finite).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, null_non_finite(v))).collect()),
        other => other,
    }
}

/// Serializa a JSON con sangría, enteros sin parte decimal y texto no ASCII
/// literal.
pub fn render<T: Serialize>(document: &T) -> Result<String, AdapterError> {
    let value = null_non_finite(serde_json::to_value(document)?);
    Ok(serde_json::to_string_pretty(&value)?)
}
