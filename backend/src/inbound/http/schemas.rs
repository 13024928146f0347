//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; these
//! wrappers mirror their serialised shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "User not found")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "6f1c2d4e-8a9b-4c3d-9e8f-0a1b2c3d4e5f")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Laborer`].
#[derive(ToSchema)]
#[schema(as = Laborer)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LaborerSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "a@x.com")]
    email: String,
    #[schema(example = "Ada")]
    name: Option<String>,
    #[schema(example = "555")]
    mobile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        let value = serde_json::to_value(T::schema()).expect("schema serialises");
        let mut names: Vec<String> = value["properties"]
            .as_object()
            .expect("object schema")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    #[rstest]
    fn error_schema_has_no_code_field() {
        assert_eq!(
            property_names::<ErrorSchema>(),
            vec!["details", "message", "traceId"]
        );
    }

    #[rstest]
    fn laborer_schema_omits_credentials() {
        assert_eq!(
            property_names::<LaborerSchema>(),
            vec!["email", "id", "mobile", "name"]
        );
    }
}
