use std::collections::HashSet;

use serde_json::Value;

pub type TokenSet = HashSet<String>;

pub fn unique_tokens<I>(values: I) -> TokenSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().to_string())
        .collect()
}

/// Builds a token set from JSON array elements, stringifying non-string values.
pub fn tokens_from_values(values: &[Value]) -> TokenSet {
    values.iter().map(token_from_value).collect()
}

pub fn token_from_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{token_from_value, tokens_from_values, unique_tokens};
    use serde_json::json;

    #[test]
    fn collapses_duplicates() {
        let tokens = unique_tokens(["grant", "grant", "patent"]);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("grant"));
        assert!(tokens.contains("patent"));
    }

    #[test]
    fn keeps_tokens_verbatim() {
        let tokens = unique_tokens(["  Grant ", "grant"]);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("  Grant "));
    }

    #[test]
    fn stringifies_scalars() {
        assert_eq!(token_from_value(&json!("text")), "text");
        assert_eq!(token_from_value(&json!(3)), "3");
        assert_eq!(token_from_value(&json!(1.5)), "1.5");
        assert_eq!(token_from_value(&json!(true)), "True");
        assert_eq!(token_from_value(&json!(false)), "False");
        assert_eq!(token_from_value(&json!(null)), "None");
    }

    #[test]
    fn stringifies_nested_values_as_json() {
        assert_eq!(token_from_value(&json!([1, "a"])), "[1,\"a\"]");
        assert_eq!(token_from_value(&json!({"k": 1})), "{\"k\":1}");
    }

    #[test]
    fn number_and_string_forms_collapse() {
        let values = vec![json!(7), json!("7")];
        let tokens = tokens_from_values(&values);
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("7"));
    }
}
