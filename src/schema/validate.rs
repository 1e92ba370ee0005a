//! Schema validation
//!
//! Parse-and-validate for untrusted JSON values. A [`Schema<T>`] pairs a compiled
//! JSON Schema with the Rust type it describes; [`validate`] checks a value against
//! the schema, collects every violation, and only then deserializes into `T`.
//!
//! Validation never coerces. Any string/number/boolean conversion has to happen
//! before a value reaches this module (see [`crate::config::loader`]). The one
//! normalization is numeric: JSON Schema counts `1.0` as an integer, so integral
//! floats are handed to serde as integers.

use crate::domain::{Result, UserflowError};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, Validator};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A compiled schema for values of type `T`
pub struct Schema<T> {
    name: &'static str,
    document: Value,
    validator: Validator,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Schema<T> {
    /// Compile a schema document (draft 2020-12, with `format` assertions enabled)
    ///
    /// # Errors
    ///
    /// Returns [`UserflowError::Schema`] if the document is not a valid schema.
    pub fn compile(name: &'static str, document: Value) -> Result<Self> {
        let mut options = jsonschema::options();
        options.with_draft(Draft::Draft202012);
        options.should_validate_formats(true);

        let validator = options
            .build(&document)
            .map_err(|e| UserflowError::Schema(format!("Failed to compile {name} schema: {e}")))?;

        Ok(Self {
            name,
            document,
            validator,
            _marker: PhantomData,
        })
    }

    /// Schema name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw schema document, used to compose larger schemas
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Quick check without building violation details
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validator.is_valid(value)
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("name", &self.name).finish()
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value (empty for the root); for a missing
    /// required property, the pointer to where that property should be
    pub instance_path: String,
    /// Human-readable description
    pub message: String,
}

impl Violation {
    /// Field name the violation refers to, `(root)` when it applies to the whole value
    pub fn field(&self) -> &str {
        let path = self.instance_path.trim_start_matches('/');
        if path.is_empty() {
            "(root)"
        } else {
            path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message)
    }
}

/// Validation failure carrying every violated constraint and the context label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    context: String,
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(context: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            context: context.into(),
            violations,
        }
    }

    /// The context label supplied by the caller (e.g. "User input")
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Distinct field names that failed, in order of first appearance
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            let field = violation.field();
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }

    /// Whether any violation points at `field`
    pub fn has_violation_for(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }

    fn summary(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: {}", self.context, self.summary())
    }
}

impl std::error::Error for ValidationError {}

/// Validate `value` against `schema` and deserialize it into `T`
///
/// Every violated constraint is reported, not just the first. On failure an error
/// diagnostic is logged before the error is returned, so the detail survives even
/// when a caller replaces it with a coarser error.
///
/// # Examples
///
/// ```
/// use userflow::schema::{registry, validate};
/// use serde_json::json;
///
/// let schema = registry::user_schema().unwrap();
/// let user = validate(&schema, &json!({"id": 1, "name": "Ann", "email": "ann@example.com"}), "User").unwrap();
/// assert!(user.is_active);
///
/// let err = validate(&schema, &json!({"id": 1, "name": "", "email": "nope"}), "User").unwrap_err();
/// assert!(err.has_violation_for("name"));
/// assert!(err.has_violation_for("email"));
/// ```
pub fn validate<T>(
    schema: &Schema<T>,
    value: &Value,
    context: &str,
) -> std::result::Result<T, ValidationError>
where
    T: DeserializeOwned,
{
    let violations: Vec<Violation> = schema
        .validator
        .iter_errors(value)
        .map(|e| {
            let mut instance_path = e.instance_path.to_string();
            if let ValidationErrorKind::Required { property } = &e.kind {
                if let Some(name) = property.as_str() {
                    instance_path = format!("{instance_path}/{name}");
                }
            }
            Violation {
                instance_path,
                message: e.to_string(),
            }
        })
        .collect();

    let result = if violations.is_empty() {
        // Schemas without range bounds can still accept a value serde rejects
        // (e.g. 300 for a u8); that is reported against the root.
        serde_json::from_value::<T>(integral_floats_as_integers(value)).map_err(|e| {
            ValidationError::new(
                context,
                vec![Violation {
                    instance_path: String::new(),
                    message: e.to_string(),
                }],
            )
        })
    } else {
        Err(ValidationError::new(context, violations))
    };

    if let Err(ref err) = result {
        tracing::error!(
            context = context,
            schema = schema.name(),
            fields = ?err.fields(),
            error = %err,
            "Schema validation failed"
        );
    }

    result
}

fn integral_floats_as_integers(value: &Value) -> Value {
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats_as_integers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats_as_integers(v)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Outcome for one element of a batch
#[derive(Debug)]
pub struct BatchItem<T> {
    pub index: usize,
    pub result: std::result::Result<T, ValidationError>,
}

/// Per-element results of [`validate_batch`]
#[derive(Debug)]
pub struct BatchValidation<T> {
    items: Vec<BatchItem<T>>,
}

impl<T> BatchValidation<T> {
    pub fn items(&self) -> &[BatchItem<T>] {
        &self.items
    }

    /// Number of elements that validated
    pub fn successful(&self) -> usize {
        self.items.iter().filter(|item| item.result.is_ok()).count()
    }

    /// Number of elements that failed
    pub fn failed(&self) -> usize {
        self.items.len() - self.successful()
    }

    pub fn is_all_valid(&self) -> bool {
        self.items.iter().all(|item| item.result.is_ok())
    }

    /// Validated values, in input order
    pub fn valid(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter_map(|item| item.result.as_ref().ok())
    }

    /// Failures with their input index
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ValidationError)> {
        self.items
            .iter()
            .filter_map(|item| item.result.as_ref().err().map(|e| (item.index, e)))
    }

    /// Consume the batch, keeping only validated values
    pub fn into_valid(self) -> Vec<T> {
        self.items
            .into_iter()
            .filter_map(|item| item.result.ok())
            .collect()
    }
}

/// Validate each element of `values` independently
///
/// A failing element does not stop the batch; each element gets its own
/// outcome, labelled `context[index]`.
pub fn validate_batch<T>(schema: &Schema<T>, values: &[Value], context: &str) -> BatchValidation<T>
where
    T: DeserializeOwned,
{
    let items: Vec<BatchItem<T>> = values
        .iter()
        .enumerate()
        .map(|(index, value)| BatchItem {
            index,
            result: validate(schema, value, &format!("{context}[{index}]")),
        })
        .collect();

    let batch = BatchValidation { items };
    tracing::debug!(
        context = context,
        total = values.len(),
        successful = batch.successful(),
        failed = batch.failed(),
        "Batch validation finished"
    );
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
        count: u8,
    }

    fn item_schema() -> Schema<Item> {
        Schema::compile(
            "Item",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "minLength": 1 },
                    "count": { "type": "integer", "minimum": 0 }
                },
                "required": ["name", "count"]
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_accepts_valid_value() {
        let item = validate(&item_schema(), &json!({"name": "a", "count": 3}), "Item").unwrap();
        assert_eq!(
            item,
            Item {
                name: "a".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let err = validate(&item_schema(), &json!({"name": "", "count": -1}), "Item").unwrap_err();
        assert_eq!(err.context(), "Item");
        assert_eq!(err.violations().len(), 2);
        assert!(err.has_violation_for("name"));
        assert!(err.has_violation_for("count"));
        assert!(err.to_string().starts_with("Item validation failed: "));
    }

    #[test]
    fn test_validate_missing_field_names_the_field() {
        let err = validate(&item_schema(), &json!({"name": "a"}), "Item").unwrap_err();
        assert_eq!(err.fields(), vec!["count"]);
        assert!(err.has_violation_for("count"));
    }

    #[test]
    fn test_validate_missing_nested_field_keeps_parent_path() {
        let schema = Schema::<Value>::compile(
            "Wrapper",
            json!({
                "type": "object",
                "properties": { "item": { "type": "object", "required": ["count"] } }
            }),
        )
        .unwrap();

        let err = validate(&schema, &json!({"item": {}}), "Wrapper").unwrap_err();
        assert_eq!(err.fields(), vec!["item/count"]);
    }

    #[test]
    fn test_validate_accepts_integral_float() {
        let item = validate(&item_schema(), &json!({"name": "a", "count": 3.0}), "Item").unwrap();
        assert_eq!(item.count, 3);

        let err = validate(&item_schema(), &json!({"name": "a", "count": 3.5}), "Item").unwrap_err();
        assert!(err.has_violation_for("count"));
    }

    #[test]
    fn test_validate_does_not_coerce() {
        let err = validate(&item_schema(), &json!({"name": "a", "count": "3"}), "Item").unwrap_err();
        assert!(err.has_violation_for("count"));
    }

    #[test]
    fn test_validate_reports_out_of_range_after_schema() {
        // 300 satisfies the schema but not u8
        let err = validate(&item_schema(), &json!({"name": "a", "count": 300}), "Item").unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field(), "(root)");
    }

    #[test]
    fn test_compile_rejects_invalid_schema() {
        let result = Schema::<Item>::compile("Broken", json!({"type": 12}));
        assert!(matches!(result, Err(UserflowError::Schema(_))));
    }

    #[test]
    fn test_batch_keeps_valid_results() {
        let values = vec![
            json!({"name": "a", "count": 1}),
            json!({"name": "", "count": 2}),
            json!({"name": "c", "count": 3}),
        ];
        let batch = validate_batch(&item_schema(), &values, "Items");

        assert_eq!(batch.successful(), 2);
        assert_eq!(batch.failed(), 1);
        assert!(!batch.is_all_valid());

        let failures: Vec<_> = batch.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 1);
        assert_eq!(failures[0].1.context(), "Items[1]");

        let names: Vec<_> = batch.valid().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(batch.into_valid().len(), 2);
    }

    #[test]
    fn test_batch_empty_input() {
        let batch = validate_batch(&item_schema(), &[], "Items");
        assert!(batch.is_all_valid());
        assert_eq!(batch.items().len(), 0);
    }
}
