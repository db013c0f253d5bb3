use thiserror::Error;

/// Field-level rule violations, rendered verbatim to API clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("hour end ({end}) must be after hour start ({start})")]
    HourRange { start: String, end: String },

    #[error("{0}")]
    Rule(String),
}

impl ValidationError {
    pub fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Trims `value` and rejects it when empty or longer than `max`
pub fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_string())
}

/// Like [`required_text`] but blank input collapses to `None`
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max).map(Some),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Redes  ", 10).unwrap(), "Redes");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert_eq!(
            required_text("name", "   ", 10),
            Err(ValidationError::Required("name"))
        );
    }

    #[test]
    fn test_required_text_counts_chars() {
        // "ção" is three chars but five bytes
        assert!(required_text("acronym", "ção", 3).is_ok());
        assert_eq!(
            required_text("acronym", "ações", 3),
            Err(ValidationError::TooLong {
                field: "acronym",
                max: 3
            })
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("annex", None, 5).unwrap(), None);
        assert_eq!(optional_text("annex", Some(" "), 5).unwrap(), None);
        assert_eq!(
            optional_text("annex", Some("a.pdf"), 5).unwrap(),
            Some("a.pdf".to_string())
        );
    }
}
