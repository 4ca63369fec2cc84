//! Placeholder rendering over a result payload

use serde_json::Value;

use super::types::{TemplateError, TemplateResult};

/// Render `{{variable}}` placeholders in a template against a result payload.
/// Supports a `default` filter as fallback for absent variables:
/// `{{ result_type | default('none') }}`.
pub fn render(
    template: &str,
    result: &serde_json::Map<String, Value>,
) -> TemplateResult<String> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| {
            TemplateError::InvalidTemplate("unterminated placeholder".to_string())
        })?;

        rendered.push_str(&eval_placeholder(after[..end].trim(), result)?);
        rest = &after[end + 2..];
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Evaluate one placeholder expression: a variable name optionally piped
/// through filters.
fn eval_placeholder(
    expr: &str,
    result: &serde_json::Map<String, Value>,
) -> TemplateResult<String> {
    let mut segments = expr.split('|').map(str::trim);

    let name = segments
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| TemplateError::InvalidTemplate("empty placeholder".to_string()))?;

    let mut value = result.get(name).map(format_value);

    for filter in segments {
        value = apply_filter(filter, value)?;
    }

    value.ok_or_else(|| TemplateError::UndefinedVariable(name.to_string()))
}

fn apply_filter(filter: &str, value: Option<String>) -> TemplateResult<Option<String>> {
    let (name, arg) = match filter.split_once('(') {
        Some((name, rest)) => {
            let arg = rest
                .strip_suffix(')')
                .ok_or_else(|| {
                    TemplateError::InvalidTemplate(format!("malformed filter: {filter}"))
                })?
                .trim();
            (name.trim(), Some(arg))
        }
        None => (filter, None),
    };

    match name {
        "default" => {
            let fallback = unquote(arg.unwrap_or("")).to_string();
            Ok(value.or(Some(fallback)))
        }
        _ => Err(TemplateError::UnknownFilter(name.to_string())),
    }
}

/// Strip matching single or double quotes from a filter argument.
fn unquote(arg: &str) -> &str {
    let stripped = arg
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            arg.strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        });
    stripped.unwrap_or(arg)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // For arrays and objects, use JSON representation
        _ => value.to_string(),
    }
}
