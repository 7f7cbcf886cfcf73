//! Forma canónica de un `Value` y su hash blake3.
//!
//! Los mapas JSON conservan el orden de inserción, así que dos payloads
//! iguales pueden llegar con claves en distinto orden. La forma canónica
//! ordena las claves por punto de código antes de hashear.

use serde_json::{Map, Value};

/// Copia de `value` con todas las claves de objetos ordenadas.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys.into_iter()
                                                 .map(|k| (k.clone(), canonicalize(&map[k])))
                                                 .collect();
            Value::Object(sorted)
        }
        other => other.clone(),
    }
}

/// Texto compacto de la forma canónica.
pub fn to_canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

/// Hash hex (64 caracteres) de un texto.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hash de la forma canónica de `value`.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
