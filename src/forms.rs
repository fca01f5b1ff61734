use std::collections::BTreeMap;

pub const REQUIRED_FIELDS: &[&str] = &["name", "email", "phone"];

// Values and errors live and die with the owning component; a remount is the
// only reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl FormState {
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn set_value(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
        self.errors.remove(field);
    }

    pub fn validate_field(&mut self, field: &'static str) {
        match validate(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn validate_submission(&mut self) -> bool {
        for field in REQUIRED_FIELDS {
            self.validate_field(field);
        }
        self.errors.is_empty()
    }
}

pub fn validate(field: &str, value: &str) -> Option<String> {
    match field {
        "name" => value
            .trim()
            .is_empty()
            .then(|| "Name is required.".to_string()),
        "email" => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Some("Email is required.".to_string())
            } else if !is_valid_email(trimmed) {
                Some("Email address is invalid.".to_string())
            } else {
                None
            }
        }
        "phone" => value
            .trim()
            .is_empty()
            .then(|| "Phone number is required.".to_string()),
        _ => None,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_required_fields_error_and_others_do_not() {
        let mut form = FormState::default();
        form.set_value("phone", "+1 (555) 123-4567".to_string());
        assert!(!form.validate_submission());
        assert_eq!(form.error("name"), Some("Name is required."));
        assert_eq!(form.error("email"), Some("Email is required."));
        assert_eq!(form.error("phone"), None);
    }

    #[test]
    fn malformed_email_yields_a_shape_error() {
        let mut form = FormState::default();
        form.set_value("email", "foo".to_string());
        form.validate_field("email");
        assert_eq!(form.error("email"), Some("Email address is invalid."));
    }

    #[test]
    fn well_formed_email_passes() {
        let mut form = FormState::default();
        form.set_value("email", "a@b.com".to_string());
        form.validate_field("email");
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = FormState::default();
        form.validate_field("name");
        assert!(form.error("name").is_some());
        form.set_value("name", "Ada".to_string());
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn fully_valid_submission_reports_clean() {
        let mut form = FormState::default();
        form.set_value("name", "Ada Lovelace".to_string());
        form.set_value("email", "ada@example.com".to_string());
        form.set_value("phone", "555-0100".to_string());
        form.set_value("company", "Analytical Engines".to_string());
        assert!(form.validate_submission());
    }

    #[test]
    fn optional_fields_never_error() {
        assert_eq!(validate("company", ""), None);
        assert_eq!(validate("message", ""), None);
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
    }
}
