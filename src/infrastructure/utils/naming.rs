//! Field-name translation between the camelCase API vocabulary and the
//! snake_case column names of the remote store.

use serde_json::{Map, Value};

/// `noOfSites` → `no_of_sites`
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `no_of_sites` → `noOfSites`
pub fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Renames every object key, recursing through nested objects and arrays.
/// Values themselves are never rewritten.
pub fn rename_keys(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (rename(&key), rename_keys(inner, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| rename_keys(item, rename)).collect())
        }
        other => other,
    }
}

pub fn keys_to_snake(value: Value) -> Value {
    rename_keys(value, camel_to_snake)
}

pub fn keys_to_camel(value: Value) -> Value {
    rename_keys(value, snake_to_camel)
}
