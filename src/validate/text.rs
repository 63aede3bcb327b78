use std::fmt;

use serde::Serialize;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy)]
struct TextRule {
    field: &'static str,
    min: usize,
    max: Option<usize>,
    hyphens: bool,
}

const NAME_RULE: TextRule = TextRule {
    field: "Name",
    min: 2,
    max: None,
    hyphens: false,
};

const HOMETOWN_RULE: TextRule = TextRule {
    field: "Hometown",
    min: 3,
    max: None,
    hyphens: true,
};

const HOBBY_RULE: TextRule = TextRule {
    field: "Hobby",
    min: 4,
    max: Some(50),
    hyphens: true,
};

impl TextRule {
    fn allowed(&self) -> &'static str {
        if self.hyphens {
            "letters, spaces and hyphens"
        } else {
            "letters and spaces"
        }
    }

    // ASCII letters only; case mapping then never changes the length.
    fn permits(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch.is_ascii_whitespace() || (self.hyphens && ch == '-')
    }

    fn apply(&self, raw: &str) -> Result<String, FieldError> {
        let value = raw.trim().to_ascii_lowercase();
        let len = value.chars().count();

        if len == 0 {
            return Err(FieldError::Empty { field: self.field });
        }
        if len < self.min {
            return Err(FieldError::TooShort {
                field: self.field,
                min: self.min,
            });
        }
        if let Some(max) = self.max.filter(|max| len > *max) {
            return Err(FieldError::TooLong {
                field: self.field,
                max,
            });
        }
        if !value.chars().all(|ch| self.permits(ch)) {
            return Err(FieldError::InvalidCharacters {
                field: self.field,
                allowed: self.allowed(),
            });
        }

        Ok(title_case(&value))
    }
}

pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_ascii_alphabetic() {
            out.push(if at_word_start {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            });
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

macro_rules! text_field {
    ($ty:ident, $rule:expr) => {
        #[derive(Debug, Clone, Eq, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $ty(String);

        impl $ty {
            pub fn parse(raw: &str) -> Result<Self, FieldError> {
                $rule.apply(raw).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(Name, NAME_RULE);
text_field!(Hometown, HOMETOWN_RULE);
text_field!(Hobby, HOBBY_RULE);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words_and_hyphenated_parts() {
        assert_eq!(title_case("jOHN   smith"), "John   Smith");
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
    }

    #[test]
    fn title_case_leaves_non_ascii_alone() {
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case("ß").chars().count(), 1);
    }

    #[test]
    fn valid_names_keep_their_length() {
        let cases = [
            ("ab", "Ab"),
            ("AB", "Ab"),
            ("ada lovelace", "Ada Lovelace"),
            ("  mARY  ann  ", "Mary  Ann"),
            ("a b", "A B"),
            ("jean paul SARTRE", "Jean Paul Sartre"),
        ];

        for (raw, expected) in cases {
            let name = Name::parse(raw).expect("valid name");
            assert_eq!(name.as_str(), expected, "{raw:?}");
            assert_eq!(
                name.as_str().chars().count(),
                raw.trim().chars().count(),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn rejects_name_reasons_in_order() {
        assert_eq!(Name::parse("   "), Err(FieldError::Empty { field: "Name" }));
        assert_eq!(
            Name::parse("a"),
            Err(FieldError::TooShort {
                field: "Name",
                min: 2
            })
        );
        assert!(matches!(
            Name::parse("r2d2"),
            Err(FieldError::InvalidCharacters { .. })
        ));
        assert!(matches!(
            Name::parse("jean-luc"),
            Err(FieldError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn rejects_letters_outside_ascii() {
        for raw in ["élodie", "zoë", "straße"] {
            assert!(
                matches!(Name::parse(raw), Err(FieldError::InvalidCharacters { .. })),
                "{raw}"
            );
        }
        assert!(matches!(
            Hometown::parse("Σπάρτη"),
            Err(FieldError::InvalidCharacters { .. })
        ));
        assert!(matches!(
            Hobby::parse("café hopping"),
            Err(FieldError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn expanding_case_mapping_cannot_overflow_hobby() {
        let raw = format!("ß{}", "a".repeat(49));
        assert!(matches!(
            Hobby::parse(&raw),
            Err(FieldError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn hometown_allows_hyphens() {
        let town = Hometown::parse("stratford-upon-avon").expect("valid hometown");
        assert_eq!(town.as_str(), "Stratford-Upon-Avon");
        assert!(matches!(
            Hometown::parse("ny"),
            Err(FieldError::TooShort { min: 3, .. })
        ));
        assert!(Hometown::parse("rye").is_ok());
        assert!(matches!(
            Hometown::parse("st. louis"),
            Err(FieldError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn hobby_length_bounds() {
        assert!(Hobby::parse("golf").is_ok());
        assert!(matches!(
            Hobby::parse("ab"),
            Err(FieldError::TooShort { min: 4, .. })
        ));
        assert!(Hobby::parse(&"a".repeat(50)).is_ok());
        assert!(matches!(
            Hobby::parse(&"a".repeat(51)),
            Err(FieldError::TooLong { max: 50, .. })
        ));
        assert!(matches!(
            Hobby::parse("3d printing"),
            Err(FieldError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn accepted_values_revalidate_unchanged() {
        for raw in ["mary ann", "o neil", "JOHN"] {
            let first = Name::parse(raw).expect("valid name");
            let again = Name::parse(first.as_str()).expect("still valid");
            assert_eq!(first, again);
        }
        let town = Hometown::parse("winston-salem").expect("valid hometown");
        assert_eq!(Hometown::parse(town.as_str()), Ok(town));
        let hobby = Hobby::parse(&format!("x{}", "y".repeat(49))).expect("valid hobby");
        assert_eq!(Hobby::parse(hobby.as_str()), Ok(hobby));
    }
}
