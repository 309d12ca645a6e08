use crate::{domain::models::StudentId, services::errors::ServiceError};

/// Coerces a textual identifier (GraphQL `ID`, path segment) into a [`StudentId`].
pub fn parse_student_id(raw: &str) -> Result<StudentId, ServiceError> {
    raw.trim()
        .parse::<StudentId>()
        .map_err(|_| ServiceError::Validation(format!("invalid student id: {raw:?}")))
}

pub fn require_student_id(raw: Option<&str>) -> Result<StudentId, ServiceError> {
    match raw {
        Some(raw) => parse_student_id(raw),
        None => Err(ServiceError::Validation("student id is required".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_student_id("42").unwrap(), 42);
        assert_eq!(parse_student_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_student_id("abc").unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "validation error: invalid student id: \"abc\"");
    }

    #[test]
    fn missing_id_is_a_validation_error() {
        assert!(matches!(
            require_student_id(None),
            Err(ServiceError::Validation(_))
        ));
        assert_eq!(require_student_id(Some("3")).unwrap(), 3);
    }
}
