//! Declarative validation rules for text fields

use once_cell::sync::Lazy;
use regex::Regex;

/// One check of a field; the message is shown as-is when the check fails
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be non-empty
    Required(&'static str),
    /// At most N characters (Unicode scalar values, not bytes)
    MaxChars(usize, &'static str),
    /// Whole value must match; empty values are left to `Required`
    Pattern(&'static Lazy<Regex>, &'static str),
}

impl Rule {
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        match *self {
            Rule::Required(message) => {
                if value.is_empty() {
                    return Err(message);
                }
            }
            Rule::MaxChars(max, message) => {
                if value.chars().count() > max {
                    return Err(message);
                }
            }
            Rule::Pattern(regex, message) => {
                if !value.is_empty() && !regex.is_match(value) {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// Run rules in declared order, first failure wins
pub fn run_rules(rules: &[Rule], value: &str) -> Result<(), &'static str> {
    rules.iter().try_for_each(|rule| rule.check(value))
}
