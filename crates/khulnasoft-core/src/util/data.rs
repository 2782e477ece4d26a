//! YAML and JSON data handling utilities.

use khulnasoft_types::{KhulnasoftError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Load YAML from string.
///
/// An empty document loads as an empty mapping rather than `null`.
pub fn load_yaml(content: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(content)?;
    Ok(match value {
        Value::Null => Value::Object(Map::new()),
        other => other,
    })
}

/// Load YAML from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(KhulnasoftError::Io)?;
    load_yaml(&content)
}

/// Deep merge two values.
/// Recursively merges objects, with overlay values taking precedence.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay_val) => overlay_val,
    }
}

/// Set a value at a dotted path, creating intermediate objects as needed.
pub fn set_path(data: &mut Value, path: &str, value: Value) -> Result<()> {
    let parts: Vec<&str> = path.split('.').filter(|p| !p.is_empty()).collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(KhulnasoftError::Config("Empty path".to_string()));
    };

    let mut current = data;
    for part in parents {
        current = ensure_object(current)
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(current).insert(last.to_string(), value);

    Ok(())
}

// Replace a non-object value with an empty object and hand back the map.
fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just coerced to an object"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_overlay_wins() {
        let base = json!({"renderer": {"interpreter": "python3", "stdout_flag": "--write-to-stdout"}});
        let overlay = json!({"renderer": {"interpreter": "sh"}});

        let merged = deep_merge(base, overlay);
        assert_eq!(merged["renderer"]["interpreter"], "sh");
        assert_eq!(merged["renderer"]["stdout_flag"], "--write-to-stdout");
    }

    #[test]
    fn test_set_path_creates_parents() {
        let mut data = json!({"log": "flat"});
        set_path(&mut data, "log.level", json!("DEBUG")).unwrap();
        assert_eq!(data, json!({"log": {"level": "DEBUG"}}));
        assert!(set_path(&mut data, "", json!(1)).is_err());
    }

    #[test]
    fn test_empty_yaml_is_empty_mapping() {
        assert_eq!(load_yaml("").unwrap(), json!({}));
        assert_eq!(load_yaml("env_prefix: SPLK_\n").unwrap(), json!({"env_prefix": "SPLK_"}));
    }
}
