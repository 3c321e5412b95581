use regex::Regex;

/// One failed field check.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered field-error accumulator for one rule group. Checks never
/// short-circuit: every check runs and every failure is recorded in
/// evaluation order before the verdict is read.
#[derive(Debug, Default)]
pub struct Validation {
    errors: Vec<FieldError>,
}

impl Validation {
    pub fn required(&mut self, value: &str, field: &str) {
        if value.is_empty() {
            self.fail(field, "cannot be empty");
        }
    }

    /// Generic presence check for numeric fields: zero counts as absent.
    pub fn required_nonzero(&mut self, value: u32, field: &str) {
        if value == 0 {
            self.fail(field, "cannot be empty");
        }
    }

    pub fn matches(&mut self, value: &str, pattern: &Regex, field: &str) {
        if !pattern.is_match(value) {
            self.fail(field, &format!("must match {}", pattern.as_str()));
        }
    }

    fn fail(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::Validation;
    use regex::Regex;

    #[test]
    fn collects_failures_in_evaluation_order() {
        let mut v = Validation::default();
        v.required("", "first");
        v.required("present", "second");
        v.required("", "third");

        assert!(v.has_errors());
        let fields: Vec<&str> = v.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["first", "third"]);
    }

    #[test]
    fn empty_value_fails_both_presence_and_pattern() {
        let re = Regex::new(r"^\d+$").expect("test pattern");
        let mut v = Validation::default();
        v.required("", "version");
        v.matches("", &re, "version");
        assert_eq!(v.errors().len(), 2);
    }

    #[test]
    fn zero_counts_as_absent_for_numeric_presence() {
        let mut v = Validation::default();
        v.required_nonzero(0, "uid");
        v.required_nonzero(1000, "gid");
        assert_eq!(v.errors().len(), 1);
        assert_eq!(v.errors()[0].field, "uid");
        assert_eq!(v.errors()[0].message, "cannot be empty");
    }

    #[test]
    fn no_errors_means_pass() {
        let v = Validation::default();
        assert!(!v.has_errors());
        assert!(v.errors().is_empty());
    }
}
