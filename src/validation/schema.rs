//! Declarative form schema and the validator that evaluates it

use super::error::{FieldPath, ValidationError, ValidationErrors};
use super::rules::{self, check, Rule};
use super::transform::capitalize_words;
use super::types::{FormInput, NormalizedOutput, TechEntry, ValidationResult};
use super::variant::FormVariant;

pub const DEFAULT_EMAIL_SUFFIX: &str = "@gmail.com";
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_MIN_TECHS: usize = 2;
pub const KNOWLEDGE_MIN: u32 = 1;
pub const KNOWLEDGE_MAX: u32 = 100;

/// Tunable limits that the variant presets plug into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSettings {
    pub required_email_suffix: String,
    pub min_password_len: usize,
    pub min_techs: usize,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            required_email_suffix: DEFAULT_EMAIL_SUFFIX.to_string(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            min_techs: DEFAULT_MIN_TECHS,
        }
    }
}

/// Rules for the repeatable technology rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRule {
    pub min_entries: usize,
    pub title: Vec<Rule>,
    pub knowledge: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub name: Vec<Rule>,
    pub email: Vec<Rule>,
    /// `None` when the form has no password input
    pub password: Option<Vec<Rule>>,
    /// `None` when the form has no technology list
    pub techs: Option<ArrayRule>,
}

impl Schema {
    pub fn for_variant(variant: FormVariant, settings: &SchemaSettings) -> Self {
        let mut email = vec![Rule::Required, Rule::Email];
        if variant.restricts_domain() {
            email.push(Rule::EndsWith(settings.required_email_suffix.clone()));
        }

        let password = variant
            .has_password()
            .then(|| vec![Rule::MinChars(settings.min_password_len)]);

        let techs = variant.has_techs().then(|| ArrayRule {
            min_entries: settings.min_techs,
            title: vec![Rule::Required],
            knowledge: vec![Rule::WholeNumber {
                min: KNOWLEDGE_MIN,
                max: KNOWLEDGE_MAX,
            }],
        });

        Self {
            name: vec![Rule::Required],
            email,
            password,
            techs,
        }
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn has_techs(&self) -> bool {
        self.techs.is_some()
    }

    /// Validate every field and collect every failure.
    ///
    /// Returns the normalized payload only when no rule failed anywhere.
    pub fn validate(&self, input: &FormInput) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        record(&mut errors, FieldPath::Name, check(&self.name, &input.name));
        record(
            &mut errors,
            FieldPath::Email,
            check(&self.email, &input.email),
        );
        if let Some(rules) = &self.password {
            record(
                &mut errors,
                FieldPath::Password,
                check(rules, &input.password),
            );
        }
        let techs = self
            .techs
            .as_ref()
            .map(|array| validate_techs(array, input, &mut errors));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NormalizedOutput {
            name: capitalize_words(&input.name),
            email: input.email.clone(),
            password: self.password.as_ref().map(|_| input.password.clone()),
            techs,
        })
    }
}

fn record(
    errors: &mut ValidationErrors,
    path: FieldPath,
    outcome: Result<(), ValidationError>,
) -> Option<()> {
    match outcome {
        Ok(()) => Some(()),
        Err(error) => {
            errors.insert(path, error);
            None
        }
    }
}

fn validate_techs(
    array: &ArrayRule,
    input: &FormInput,
    errors: &mut ValidationErrors,
) -> Vec<TechEntry> {
    let entries = input.techs.as_deref().unwrap_or_default();
    let mut valid = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let title = record(
            errors,
            FieldPath::TechTitle(index),
            check(&array.title, &entry.title),
        );
        let knowledge = record(
            errors,
            FieldPath::TechKnowledge(index),
            check(&array.knowledge, &entry.knowledge),
        )
        .and_then(|()| knowledge_value(&entry.knowledge));

        if knowledge.is_none() && !errors.contains(&FieldPath::TechKnowledge(index)) {
            errors.insert(
                FieldPath::TechKnowledge(index),
                ValidationError::OutOfRange {
                    min: KNOWLEDGE_MIN,
                    max: KNOWLEDGE_MAX,
                },
            );
        }

        if let (Some(()), Some(knowledge)) = (title, knowledge) {
            valid.push(TechEntry {
                title: entry.title.clone(),
                knowledge,
            });
        }
    }

    if entries.len() < array.min_entries {
        errors.insert(
            FieldPath::Techs,
            ValidationError::TooFewEntries {
                min: array.min_entries,
            },
        );
    }

    valid
}

fn knowledge_value(raw: &str) -> Option<u8> {
    rules::coerce_number(raw)
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(n))
        .map(|n| n as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::types::TechEntryInput;

    fn schema(variant: FormVariant) -> Schema {
        Schema::for_variant(variant, &SchemaSettings::default())
    }

    fn full_input(techs: Vec<TechEntryInput>) -> FormInput {
        FormInput {
            name: "ana silva".to_string(),
            email: "ana@gmail.com".to_string(),
            password: "123456".to_string(),
            techs: Some(techs),
        }
    }

    fn error_paths(errors: &ValidationErrors) -> Vec<FieldPath> {
        errors.iter().map(|(path, _)| *path).collect()
    }

    mod presets {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_basic_has_no_password_or_techs() {
            let schema = schema(FormVariant::Basic);
            assert!(!schema.has_password());
            assert!(!schema.has_techs());
            assert_eq!(schema.email, vec![Rule::Required, Rule::Email]);
        }

        #[test]
        fn test_credentials_restricts_domain() {
            let schema = schema(FormVariant::Credentials);
            assert!(schema.has_password());
            assert!(!schema.has_techs());
            assert_eq!(
                schema.email.last(),
                Some(&Rule::EndsWith("@gmail.com".to_string()))
            );
        }

        #[test]
        fn test_settings_flow_into_rules() {
            let settings = SchemaSettings {
                required_email_suffix: "@corp.example".to_string(),
                min_password_len: 10,
                min_techs: 3,
            };
            let schema = Schema::for_variant(FormVariant::Full, &settings);
            assert_eq!(schema.password, Some(vec![Rule::MinChars(10)]));
            assert_eq!(schema.techs.as_ref().map(|t| t.min_entries), Some(3));
            assert!(schema
                .email
                .contains(&Rule::EndsWith("@corp.example".to_string())));
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_credentials_are_normalized() {
            let input = FormInput {
                name: "ana silva".to_string(),
                email: "ana@gmail.com".to_string(),
                password: "123456".to_string(),
                techs: None,
            };
            let output = schema(FormVariant::Credentials).validate(&input).unwrap();
            assert_eq!(
                output,
                NormalizedOutput {
                    name: "Ana Silva".to_string(),
                    email: "ana@gmail.com".to_string(),
                    password: Some("123456".to_string()),
                    techs: None,
                }
            );
        }

        #[test]
        fn test_every_violated_field_is_reported() {
            let input = FormInput {
                name: String::new(),
                email: "bad".to_string(),
                password: "12".to_string(),
                techs: None,
            };
            let errors = schema(FormVariant::Credentials)
                .validate(&input)
                .unwrap_err();
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.get(&FieldPath::Name), Some(&ValidationError::EmptyField));
            assert_eq!(
                errors.get(&FieldPath::Email),
                Some(&ValidationError::InvalidFormat)
            );
            assert_eq!(
                errors.get(&FieldPath::Password),
                Some(&ValidationError::TooShort { min: 6 })
            );
        }

        #[test]
        fn test_single_tech_is_too_few() {
            let input = full_input(vec![TechEntryInput::new("Go", "80")]);
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(error_paths(&errors), vec![FieldPath::Techs]);
            assert_eq!(
                errors.get(&FieldPath::Techs),
                Some(&ValidationError::TooFewEntries { min: 2 })
            );
        }

        #[test]
        fn test_foreign_domain_is_restricted() {
            let input = FormInput {
                email: "user@yahoo.com".to_string(),
                ..full_input(vec![
                    TechEntryInput::new("Go", "80"),
                    TechEntryInput::new("Rust", "60"),
                ])
            };
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(
                errors.get(&FieldPath::Email),
                Some(&ValidationError::DomainRestricted {
                    suffix: "@gmail.com".to_string()
                })
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_gmail_address_with_stray_dot_is_malformed() {
            for email in [".ana@gmail.com", "ana.@gmail.com", "ana..silva@gmail.com"] {
                let input = FormInput {
                    name: "ana".to_string(),
                    email: email.to_string(),
                    password: "123456".to_string(),
                    techs: None,
                };
                let errors = schema(FormVariant::Credentials)
                    .validate(&input)
                    .unwrap_err();
                assert_eq!(
                    errors.get(&FieldPath::Email),
                    Some(&ValidationError::InvalidFormat),
                    "{email}"
                );
            }
        }
    }

    mod techs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_techs_are_coerced() {
            let input = full_input(vec![
                TechEntryInput::new("Go", "80"),
                TechEntryInput::new("Rust", " 100 "),
            ]);
            let output = schema(FormVariant::Full).validate(&input).unwrap();
            assert_eq!(
                output.techs,
                Some(vec![
                    TechEntry {
                        title: "Go".to_string(),
                        knowledge: 80
                    },
                    TechEntry {
                        title: "Rust".to_string(),
                        knowledge: 100
                    },
                ])
            );
        }

        #[test]
        fn test_entry_errors_are_keyed_by_position() {
            let input = full_input(vec![
                TechEntryInput::new("Go", "80"),
                TechEntryInput::new("", "0"),
                TechEntryInput::new("Zig", ""),
            ]);
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(
                error_paths(&errors),
                vec![
                    FieldPath::TechTitle(1),
                    FieldPath::TechKnowledge(1),
                    FieldPath::TechKnowledge(2),
                ]
            );
        }

        #[test]
        fn test_too_few_reported_alongside_entry_errors() {
            let input = full_input(vec![TechEntryInput::new("  ", "500")]);
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(
                error_paths(&errors),
                vec![
                    FieldPath::Techs,
                    FieldPath::TechTitle(0),
                    FieldPath::TechKnowledge(0),
                ]
            );
        }

        #[test]
        fn test_missing_list_counts_as_empty() {
            let input = FormInput {
                techs: None,
                ..full_input(Vec::new())
            };
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(
                errors.get(&FieldPath::Techs),
                Some(&ValidationError::TooFewEntries { min: 2 })
            );
        }

        #[test]
        fn test_list_ignored_when_variant_has_none() {
            let input = FormInput {
                name: "ana".to_string(),
                email: "ana@gmail.com".to_string(),
                password: "123456".to_string(),
                techs: Some(vec![TechEntryInput::new("", "")]),
            };
            let output = schema(FormVariant::Credentials).validate(&input).unwrap();
            assert_eq!(output.techs, None);
        }
    }

    mod properties {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ok_payload_equals_input_modulo_transforms() {
            let input = full_input(vec![
                TechEntryInput::new("Go", "1"),
                TechEntryInput::new("Rust", "42"),
            ]);
            let output = schema(FormVariant::Full).validate(&input).unwrap();
            assert_eq!(output.name, capitalize_words(&input.name));
            assert_eq!(output.email, input.email);
            assert_eq!(output.password.as_deref(), Some(input.password.as_str()));
            let techs = output.techs.unwrap();
            let raw = input.techs.unwrap();
            assert_eq!(techs.len(), raw.len());
            for (entry, raw) in techs.iter().zip(&raw) {
                assert_eq!(entry.title, raw.title);
                assert_eq!(entry.knowledge.to_string(), raw.knowledge);
            }
        }

        #[test]
        fn test_unviolated_fields_have_no_entry() {
            let input = FormInput {
                password: "123".to_string(),
                ..full_input(vec![
                    TechEntryInput::new("Go", "80"),
                    TechEntryInput::new("Rust", "60"),
                ])
            };
            let errors = schema(FormVariant::Full).validate(&input).unwrap_err();
            assert_eq!(error_paths(&errors), vec![FieldPath::Password]);
        }

        #[test]
        fn test_basic_variant_accepts_any_domain_and_omits_password() {
            let input = FormInput {
                name: "joão".to_string(),
                email: "joao@example.org".to_string(),
                password: String::new(),
                techs: None,
            };
            let output = schema(FormVariant::Basic).validate(&input).unwrap();
            assert_eq!(output.name, "João");
            assert_eq!(output.password, None);
        }

        #[test]
        fn test_rejection_always_names_a_field() {
            let inputs = [
                FormInput::default(),
                full_input(vec![]),
                full_input(vec![TechEntryInput::new("Go", "0")]),
                full_input(vec![
                    TechEntryInput::new("", "50"),
                    TechEntryInput::new("Rust", "101"),
                ]),
                FormInput {
                    email: "ana@yahoo.com".to_string(),
                    ..full_input(vec![
                        TechEntryInput::new("Go", "80"),
                        TechEntryInput::new("Rust", "60"),
                    ])
                },
            ];
            for variant in [FormVariant::Basic, FormVariant::Credentials, FormVariant::Full] {
                for input in &inputs {
                    if let Err(errors) = schema(variant).validate(input) {
                        assert!(!errors.is_empty(), "{variant}: {input:?}");
                    }
                }
            }
        }

        #[test]
        fn test_empty_list_accepted_when_no_minimum() {
            let settings = SchemaSettings {
                min_techs: 0,
                ..SchemaSettings::default()
            };
            let schema = Schema::for_variant(FormVariant::Full, &settings);
            let output = schema.validate(&full_input(vec![])).unwrap();
            assert_eq!(output.techs, Some(vec![]));
        }
    }
}
