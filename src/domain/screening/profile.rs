//! Candidate profile collected during intake.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A profile slot filled by one intake stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Experience,
    Role,
    Location,
    TechStack,
}

impl ProfileField {
    /// Field name used in validation errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Experience => "experience",
            Self::Role => "role",
            Self::Location => "location",
            Self::TechStack => "tech_stack",
        }
    }
}

/// Interview difficulty derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// 5+ years is advanced, 2+ intermediate, anything less basic.
    pub fn for_experience(years: u32) -> Self {
        match years {
            y if y >= 5 => Self::Advanced,
            y if y >= 2 => Self::Intermediate,
            _ => Self::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured data about the candidate.
///
/// Every field starts empty and is written exactly once, in intake order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    experience: Option<u32>,
    role: Option<String>,
    location: Option<String>,
    tech_stack: Option<Vec<String>>,
}

impl CandidateProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills `field` from the candidate's raw reply.
    ///
    /// Text fields are stored verbatim. Experience keeps only the digits of the
    /// reply. The tech stack is split on commas.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the reply is blank
    /// - `InvalidFormat` if the field was already collected or experience has no digits
    pub fn fill(&mut self, field: ProfileField, raw: &str) -> Result<(), ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field(field.as_str()));
        }
        if self.is_filled(field) {
            return Err(ValidationError::invalid_format(
                field.as_str(),
                "already collected",
            ));
        }

        match field {
            ProfileField::Name => self.name = Some(raw.to_string()),
            ProfileField::Email => self.email = Some(raw.to_string()),
            ProfileField::Phone => self.phone = Some(raw.to_string()),
            ProfileField::Experience => self.experience = Some(parse_experience(raw)?),
            ProfileField::Role => self.role = Some(raw.to_string()),
            ProfileField::Location => self.location = Some(raw.to_string()),
            ProfileField::TechStack => self.tech_stack = Some(parse_tech_stack(raw)),
        }
        Ok(())
    }

    /// Returns true once `field` holds a value.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Name => self.name.is_some(),
            ProfileField::Email => self.email.is_some(),
            ProfileField::Phone => self.phone.is_some(),
            ProfileField::Experience => self.experience.is_some(),
            ProfileField::Role => self.role.is_some(),
            ProfileField::Location => self.location.is_some(),
            ProfileField::TechStack => self.tech_stack.is_some(),
        }
    }

    /// Full name as typed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Email address as typed, unvalidated.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Phone number as typed, unvalidated.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Years of experience read from the reply.
    pub fn experience(&self) -> Option<u32> {
        self.experience
    }

    /// Desired position.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Current location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Technologies in the order the candidate listed them.
    pub fn tech_stack(&self) -> &[String] {
        self.tech_stack.as_deref().unwrap_or(&[])
    }

    /// Difficulty tier, once experience is known.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.experience.map(Difficulty::for_experience)
    }

    /// Name for prompts, with a neutral stand-in before it is collected.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("the candidate")
    }
}

/// Code point of the zero in each run of Unicode decimal digits (category Nd).
///
/// Every run holds the ten digits 0-9 in order starting at its zero.
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `c` as a decimal digit in any script, e.g. '5', '٥' or '५'.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    let code = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| code - zero)
}

/// Concatenates every decimal digit in `raw`, in any script, and parses the result.
///
/// "I have 5 years" yields 5; "2 or 3" yields 23; "٥ سنوات" yields 5.
pub fn parse_experience(raw: &str) -> Result<u32, ValidationError> {
    let mut digits = raw.chars().filter_map(decimal_digit_value).peekable();
    if digits.peek().is_none() {
        return Err(ValidationError::invalid_format(
            ProfileField::Experience.as_str(),
            "no digits found",
        ));
    }
    digits
        .try_fold(0u32, |acc, digit| acc.checked_mul(10)?.checked_add(digit))
        .ok_or_else(|| {
            ValidationError::invalid_format(ProfileField::Experience.as_str(), "number too large")
        })
}

/// Splits a comma-separated list, trimming each entry.
///
/// Order and duplicates are preserved. Blank entries are dropped, so
/// "Go,,Rust" yields two technologies rather than an empty middle one.
pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod experience {
        use super::*;

        #[test]
        fn extracts_number_from_sentence() {
            assert_eq!(parse_experience("I have 5 years").unwrap(), 5);
        }

        #[test]
        fn concatenates_all_digits() {
            assert_eq!(parse_experience("2 or 3").unwrap(), 23);
        }

        #[test]
        fn rejects_input_without_digits() {
            assert!(matches!(
                parse_experience("five years"),
                Err(ValidationError::InvalidFormat { .. })
            ));
        }

        #[test]
        fn rejects_overflowing_numbers() {
            assert!(parse_experience("99999999999999").is_err());
        }

        #[test]
        fn reads_digits_from_other_scripts() {
            assert_eq!(parse_experience("५ साल").unwrap(), 5);
            assert_eq!(parse_experience("٥ سنوات").unwrap(), 5);
            assert_eq!(parse_experience("５年").unwrap(), 5);
            assert_eq!(parse_experience("১০ বছর").unwrap(), 10);
        }

        #[test]
        fn mixes_scripts_in_reading_order() {
            assert_eq!(parse_experience("1٥").unwrap(), 15);
        }

        #[test]
        fn digit_table_covers_ten_numeric_chars_per_run() {
            for &zero in DECIMAL_DIGIT_ZEROS {
                for offset in 0..10 {
                    let c = char::from_u32(zero + offset).unwrap();
                    assert!(c.is_numeric(), "U+{:04X} is not numeric", zero + offset);
                    assert_eq!(decimal_digit_value(c), Some(offset));
                }
            }
        }

        #[test]
        fn other_numeric_chars_are_not_digits() {
            assert_eq!(decimal_digit_value('½'), None);
            assert_eq!(decimal_digit_value('Ⅻ'), None);
            assert!(parse_experience("Ⅻ years").is_err());
        }

        proptest! {
            #[test]
            fn parsed_value_equals_concatenated_digits(
                prefix in "[a-zA-Z ]{0,10}",
                n in 0u32..100_000,
                suffix in "[a-zA-Z ]{0,10}",
            ) {
                let raw = format!("{prefix}{n}{suffix}");
                prop_assert_eq!(parse_experience(&raw).unwrap(), n);
            }

            #[test]
            fn parsed_value_is_script_independent(
                zero in prop::sample::select(vec![0x0030u32, 0x0660, 0x0966, 0x09E6, 0x0E50, 0xFF10]),
                n in 0u32..100_000,
                suffix in "[a-zA-Z ]{0,10}",
            ) {
                let rendered: String = n
                    .to_string()
                    .chars()
                    .filter_map(|c| c.to_digit(10))
                    .filter_map(|d| char::from_u32(zero + d))
                    .collect();
                let raw = format!("{rendered}{suffix}");
                prop_assert_eq!(parse_experience(&raw).unwrap(), n);
            }

            #[test]
            fn letters_only_never_parse(raw in "[a-zA-Z ,.!?]{0,30}") {
                prop_assert!(parse_experience(&raw).is_err());
            }
        }
    }

    mod tech_stack {
        use super::*;

        #[test]
        fn splits_and_trims_preserving_order() {
            assert_eq!(
                parse_tech_stack("Python, Go , Rust"),
                vec!["Python", "Go", "Rust"]
            );
        }

        #[test]
        fn keeps_duplicates() {
            assert_eq!(parse_tech_stack("Go, Go"), vec!["Go", "Go"]);
        }

        #[test]
        fn drops_blank_entries() {
            assert_eq!(parse_tech_stack("Go,, ,Rust,"), vec!["Go", "Rust"]);
        }

        proptest! {
            #[test]
            fn round_trips_clean_lists(items in prop::collection::vec("[A-Za-z+#]{1,8}", 1..6)) {
                let raw = items.join(" , ");
                prop_assert_eq!(parse_tech_stack(&raw), items);
            }
        }
    }

    mod difficulty {
        use super::*;

        #[test]
        fn tiers_follow_experience() {
            assert_eq!(Difficulty::for_experience(1), Difficulty::Basic);
            assert_eq!(Difficulty::for_experience(3), Difficulty::Intermediate);
            assert_eq!(Difficulty::for_experience(7), Difficulty::Advanced);
        }

        #[test]
        fn boundaries_are_inclusive() {
            assert_eq!(Difficulty::for_experience(0), Difficulty::Basic);
            assert_eq!(Difficulty::for_experience(2), Difficulty::Intermediate);
            assert_eq!(Difficulty::for_experience(5), Difficulty::Advanced);
        }
    }

    mod fill {
        use super::*;

        #[test]
        fn text_fields_are_stored_verbatim() {
            let mut profile = CandidateProfile::new();
            profile.fill(ProfileField::Email, "not an email").unwrap();
            assert_eq!(profile.email(), Some("not an email"));
        }

        #[test]
        fn blank_reply_is_rejected() {
            let mut profile = CandidateProfile::new();
            assert!(matches!(
                profile.fill(ProfileField::Name, "   "),
                Err(ValidationError::EmptyField { .. })
            ));
            assert!(!profile.is_filled(ProfileField::Name));
        }

        #[test]
        fn field_is_written_once() {
            let mut profile = CandidateProfile::new();
            profile.fill(ProfileField::Name, "Ada").unwrap();
            assert!(profile.fill(ProfileField::Name, "Grace").is_err());
            assert_eq!(profile.name(), Some("Ada"));
        }

        #[test]
        fn failed_experience_leaves_field_empty() {
            let mut profile = CandidateProfile::new();
            assert!(profile.fill(ProfileField::Experience, "lots").is_err());
            assert_eq!(profile.experience(), None);
            assert_eq!(profile.difficulty(), None);
        }

        #[test]
        fn experience_sets_difficulty() {
            let mut profile = CandidateProfile::new();
            profile.fill(ProfileField::Experience, "I have 5 years").unwrap();
            assert_eq!(profile.experience(), Some(5));
            assert_eq!(profile.difficulty(), Some(Difficulty::Advanced));
        }

        #[test]
        fn tech_stack_of_only_commas_is_collected_empty() {
            let mut profile = CandidateProfile::new();
            profile.fill(ProfileField::TechStack, ", ,").unwrap();
            assert!(profile.is_filled(ProfileField::TechStack));
            assert!(profile.tech_stack().is_empty());
        }

        #[test]
        fn display_name_falls_back_before_collection() {
            let profile = CandidateProfile::new();
            assert_eq!(profile.display_name(), "the candidate");
        }
    }
}
