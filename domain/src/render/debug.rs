//! Debug text rendering of serializable values.
//!
//! Field names and order come from the value's `Serialize` impl, so a
//! `#[serde(rename_all = "PascalCase")] struct Animal { name, age }` renders
//! as `{Name:Dog Age:5}` in simple form and
//! `my_crate::Animal{Name:"Dog", Age:5}` in detailed form.

use super::finite::ensure_finite;
use serde::Serialize;
use serde_json::Value;

/// Render `value` as human-readable text.
///
/// `simple = true` gives field-qualified output without type names or
/// quoting. `simple = false` prefixes structs and sequences with the Rust type
/// path and quotes strings. Values that cannot be represented (non-string map
/// keys, NaN or infinite floats) render as `<type>{<error>}` rather than failing.
pub fn render_debug<T: Serialize + ?Sized>(value: &T, simple: bool) -> String {
    let type_name = std::any::type_name::<T>();
    match ensure_finite(value).and_then(|()| serde_json::to_value(value)) {
        Ok(v) if simple => render_simple(&v),
        Ok(v @ (Value::Object(_) | Value::Array(_))) => {
            format!("{type_name}{}", render_detailed(&v))
        }
        Ok(v) => render_detailed(&v),
        Err(e) => format!("{type_name}{{{e}}}"),
    }
}

fn render_simple(value: &Value) -> String {
    match value {
        Value::Null => "<nil>".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render_simple).collect();
            format!("[{}]", parts.join(" "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}:{}", render_simple(v)))
                .collect();
            format!("{{{}}}", parts.join(" "))
        }
        other => other.to_string(),
    }
}

fn render_detailed(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(render_detailed).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}:{}", render_detailed(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        // JSON encoding quotes and escapes strings
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Animal {
        name: String,
        age: u32,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Owner {
        name: &'static str,
        pets: Vec<Animal>,
        nickname: Option<String>,
    }

    fn dog() -> Animal {
        Animal {
            name: "Dog".to_string(),
            age: 5,
        }
    }

    #[test]
    fn test_simple_struct() {
        assert_eq!(render_debug(&dog(), true), "{Name:Dog Age:5}");
        let cat = Animal {
            name: "Cat".to_string(),
            age: 3,
        };
        assert_eq!(render_debug(&cat, true), "{Name:Cat Age:3}");
    }

    #[test]
    fn test_detailed_struct_has_type_and_quotes() {
        let rendered = render_debug(&dog(), false);
        assert_eq!(
            rendered,
            format!(
                "{}{{Name:\"Dog\", Age:5}}",
                std::any::type_name::<Animal>()
            )
        );
        assert!(rendered.ends_with("Animal{Name:\"Dog\", Age:5}"));
    }

    #[test]
    fn test_nested_values() {
        let owner = Owner {
            name: "Ann",
            pets: vec![dog()],
            nickname: None,
        };
        assert_eq!(
            render_debug(&owner, true),
            "{Name:Ann Pets:[{Name:Dog Age:5}] Nickname:<nil>}"
        );
        assert!(
            render_debug(&owner, false)
                .ends_with("Owner{Name:\"Ann\", Pets:[{Name:\"Dog\", Age:5}], Nickname:nil}")
        );
    }

    #[test]
    fn test_scalars_have_no_type_prefix() {
        assert_eq!(render_debug("Dog", true), "Dog");
        assert_eq!(render_debug("Dog", false), "\"Dog\"");
        assert_eq!(render_debug(&5, false), "5");
    }

    #[test]
    fn test_unrepresentable_value_does_not_fail() {
        let mut map = HashMap::new();
        map.insert((1, 2), "pair");
        let rendered = render_debug(&map, true);
        assert!(rendered.starts_with(std::any::type_name::<HashMap<(i32, i32), &str>>()));
        assert!(rendered.contains("key must be a string"));
    }

    #[derive(Serialize)]
    struct Reading {
        value: f64,
    }

    #[test]
    fn test_nan_uses_type_fallback() {
        let reading = Reading { value: f64::NAN };
        let expected = format!("{}{{unsupported value: NaN}}", std::any::type_name::<Reading>());
        assert_eq!(render_debug(&reading, true), expected);
        assert_eq!(render_debug(&reading, false), expected);
        assert_eq!(render_debug(&Reading { value: 0.5 }, true), "{value:0.5}");
    }
}
