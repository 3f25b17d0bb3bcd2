use crate::error::{AgentkitError, Result};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Look up a dotted path (`launch_types.hybrid.region`) in a YAML tree.
pub fn get_path<'a>(root: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .filter(|s| !s.is_empty())
        .try_fold(root, |node, key| node.as_mapping()?.get(key))
}

/// Set a dotted path, creating intermediate mappings as needed.
pub fn set_path(root: &mut Value, dotted: &str, value: Value) -> Result<()> {
    let keys: Vec<&str> = dotted.split('.').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = keys.split_last() else {
        return Err(AgentkitError::InvalidConfig("empty key path".to_string()));
    };

    let mut node = root;
    for key in parents {
        if !node.is_mapping() {
            *node = Value::Mapping(Mapping::new());
        }
        let map = node
            .as_mapping_mut()
            .ok_or_else(|| AgentkitError::InvalidConfig(format!("'{}' is not a mapping", key)))?;
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            map.insert(k.clone(), Value::Mapping(Mapping::new()));
        }
        node = map
            .get_mut(&k)
            .ok_or_else(|| AgentkitError::InvalidConfig(format!("cannot create '{}'", key)))?;
    }

    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }
    if let Some(map) = node.as_mapping_mut() {
        map.insert(Value::String(last.to_string()), value);
    }
    Ok(())
}

/// Interpret a command-line value as a YAML scalar (`8000` → int, `true` → bool).
///
/// Lists and maps must be written in flow style (`[a, b]`, `{k: v}`).
pub fn parse_scalar(raw: &str) -> Value {
    if raw.trim_start().starts_with("{{") {
        return Value::String(raw.to_string());
    }
    match serde_yaml::from_str::<Value>(raw) {
        Ok(Value::Null) if !raw.trim().is_empty() && raw.trim() != "null" && raw.trim() != "~" => {
            Value::String(raw.to_string())
        }
        Ok(value) => value,
        Err(_) => Value::String(raw.to_string()),
    }
}

/// Render a scalar for display; collections are dumped as YAML.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Flatten nested mappings into `PARENT_CHILD` keys, uppercased.
pub fn flatten_upper(value: &Value) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten_into(value, "", &mut out);
    out
}

fn flatten_into(value: &Value, prefix: &str, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let key = match k {
                    Value::String(s) => s.clone(),
                    other => display(other),
                };
                let joined = if prefix.is_empty() {
                    key.to_uppercase()
                } else {
                    format!("{}_{}", prefix, key.to_uppercase())
                };
                flatten_into(v, &joined, out);
            }
        }
        Value::Null => {}
        Value::Sequence(_) => {
            if let Ok(json) = serde_json::to_string(value) {
                out.insert(prefix.to_string(), json);
            }
        }
        scalar => {
            out.insert(prefix.to_string(), display(scalar));
        }
    }
}

/// Recursively merge `overlay` into `base`; mappings merge, everything else replaces.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (k, v) in overlay_map {
                match base_map.get_mut(&k) {
                    Some(existing) => deep_merge(existing, v),
                    None => {
                        base_map.insert(k, v);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
