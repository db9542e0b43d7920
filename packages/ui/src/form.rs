//! Form machinery shared by the entity forms: the create/edit/view mode and
//! the declarative per-field validation rules.
//!
//! Rules are evaluated at submit time; the first violated rule of each field
//! becomes that field's inline message, and a form with any message blocks
//! submission. The messages carry the user-facing Portuguese text directly,
//! so rule declarations read like the form labels do.

use std::collections::HashMap;

/// Mode of an entity form, derived from the route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    View,
}

impl FormMode {
    /// Map the `opr` route parameter plus id presence to a mode. Anything
    /// with an id that is not explicitly `view` is an edit.
    pub fn from_route(opr: Option<&str>, id: Option<i64>) -> Self {
        match (opr, id) {
            (Some("view"), Some(_)) => FormMode::View,
            (_, Some(_)) => FormMode::Edit,
            _ => FormMode::Create,
        }
    }

    /// View mode renders every field disabled and hides the submit control.
    pub fn is_read_only(&self) -> bool {
        matches!(self, FormMode::View)
    }

    /// Form title, e.g. "Editar Cliente: 15" / "Novo Cliente".
    pub fn title(&self, entity: &str, id: Option<i64>) -> String {
        match (self, id) {
            (FormMode::View, Some(id)) => format!("Visualizar {entity}: {id}"),
            (_, Some(id)) => format!("Editar {entity}: {id}"),
            _ => format!("Novo {entity}"),
        }
    }
}

/// A single declarative validation rule with its user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Non-blank after trimming.
    Required(&'static str),
    /// At least this many characters.
    MinLen(usize, &'static str),
    /// Exactly this many characters, all ASCII digits.
    Digits(usize, &'static str),
}

/// Evaluate `rules` in order against `value`; the first violation wins.
pub fn validate(value: &str, rules: &[Rule]) -> Option<String> {
    for rule in rules {
        match rule {
            Rule::Required(message) => {
                if value.trim().is_empty() {
                    return Some((*message).to_string());
                }
            }
            Rule::MinLen(min, message) => {
                if value.chars().count() < *min {
                    return Some((*message).to_string());
                }
            }
            Rule::Digits(len, message) => {
                if value.chars().count() != *len || !value.chars().all(|c| c.is_ascii_digit()) {
                    return Some((*message).to_string());
                }
            }
        }
    }
    None
}

/// Per-field validation outcome of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    messages: HashMap<&'static str, String>,
}

impl FieldErrors {
    /// Validate one field, recording its first violation if any.
    pub fn check(&mut self, field: &'static str, value: &str, rules: &[Rule]) {
        if let Some(message) = validate(value, rules) {
            self.messages.insert(field, message);
        }
    }

    /// Inline message for a field, when it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    /// True when every checked field passed — the form may submit.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Optional text field: blank input means the field is absent, not empty.
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_route() {
        assert_eq!(FormMode::from_route(None, None), FormMode::Create);
        assert_eq!(FormMode::from_route(Some("edit"), Some(3)), FormMode::Edit);
        assert_eq!(FormMode::from_route(Some("view"), Some(3)), FormMode::View);
        // view without an id has nothing to show read-only
        assert_eq!(FormMode::from_route(Some("view"), None), FormMode::Create);
    }

    #[test]
    fn titles_follow_mode() {
        assert_eq!(FormMode::Create.title("Cliente", None), "Novo Cliente");
        assert_eq!(FormMode::Edit.title("Cliente", Some(15)), "Editar Cliente: 15");
        assert_eq!(
            FormMode::View.title("Funcionário", Some(7)),
            "Visualizar Funcionário: 7"
        );
    }

    #[test]
    fn required_blocks_blank_nome() {
        let mut errors = FieldErrors::default();
        errors.check("nome", "   ", &[Rule::Required("Nome é obrigatório")]);
        assert_eq!(errors.get("nome"), Some("Nome é obrigatório"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn min_len_blocks_short_senha() {
        let rules = [
            Rule::Required("Senha obrigatória"),
            Rule::MinLen(6, "Pelo menos 6 caracteres"),
        ];
        assert_eq!(validate("12345", &rules).as_deref(), Some("Pelo menos 6 caracteres"));
        assert_eq!(validate("", &rules).as_deref(), Some("Senha obrigatória"));
        assert!(validate("123456", &rules).is_none());
    }

    #[test]
    fn digits_rule_wants_exact_numeric_length() {
        let rules = [
            Rule::Required("CPF é obrigatório"),
            Rule::Digits(11, "CPF deve conter 11 dígitos"),
        ];
        assert!(validate("12345678901", &rules).is_none());
        assert_eq!(
            validate("1234567890", &rules).as_deref(),
            Some("CPF deve conter 11 dígitos")
        );
        assert_eq!(
            validate("123456789ab", &rules).as_deref(),
            Some("CPF deve conter 11 dígitos")
        );
    }

    #[test]
    fn first_violation_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.check(
            "senha",
            "",
            &[
                Rule::Required("Senha obrigatória"),
                Rule::MinLen(6, "Pelo menos 6 caracteres"),
            ],
        );
        assert_eq!(errors.get("senha"), Some("Senha obrigatória"));
    }

    #[test]
    fn optional_trims_to_none() {
        assert_eq!(optional("  ".to_string()), None);
        assert_eq!(optional(" 49999 ".to_string()).as_deref(), Some("49999"));
    }
}
