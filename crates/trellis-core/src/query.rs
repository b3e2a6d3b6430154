//! Query-param value casting.

use serde_json::Value;
use trellis_router::RouteParams;

/// Cast a raw query-param string into a typed JSON value.
///
/// Integer and float strings become numbers, `"true"`/`"false"` booleans,
/// `"null"`/`"undefined"` null, empty strings null; everything else passes
/// through as a string.
pub fn cast_query_value(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    if raw.contains('.') {
        if let Ok(float) = raw.parse::<f64>() {
            return Value::from(float);
        }
    }

    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" | "undefined" | "" => Value::Null,
        other => Value::String(other.to_string()),
    }
}

/// Cast a full query-param map for render args.
pub fn cast_query_params(params: &RouteParams) -> serde_json::Map<String, Value> {
    params
        .iter()
        .map(|(key, value)| (key.clone(), cast_query_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(cast_query_value("42"), Value::from(42));
        assert_eq!(cast_query_value("-3"), Value::from(-3));
        assert_eq!(cast_query_value("2.5"), Value::from(2.5));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(cast_query_value("true"), Value::Bool(true));
        assert_eq!(cast_query_value("false"), Value::Bool(false));
    }

    #[test]
    fn test_nils() {
        assert_eq!(cast_query_value("null"), Value::Null);
        assert_eq!(cast_query_value("undefined"), Value::Null);
        assert_eq!(cast_query_value(""), Value::Null);
    }

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(
            cast_query_value("settings"),
            Value::String("settings".to_string())
        );
        // Not a parseable number; stays a string.
        assert_eq!(cast_query_value("1.2.3"), Value::String("1.2.3".to_string()));
    }

    #[test]
    fn test_map_casting() {
        let mut params = RouteParams::new();
        params.insert("page".to_string(), "2".to_string());
        params.insert("filter".to_string(), "".to_string());

        let cast = cast_query_params(&params);
        assert_eq!(cast["page"], Value::from(2));
        assert_eq!(cast["filter"], Value::Null);
    }
}
