//! Client-side checks run before anything is submitted to the gateway.
//!
//! Lengths are counted in characters, not bytes, so accented titles get the
//! same limits as ASCII ones.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    CATEGORY_MAX, CATEGORY_MIN, DESCRIPTION_MAX, DESCRIPTION_MIN, SUBTASK_MAX, SUBTASK_MIN, TITLE_MAX, TITLE_MIN,
    USERNAME_MAX, USERNAME_MIN,
};
use crate::models::TaskDraft;

// local@domain.tld with no whitespace and a single `@`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Allowed alphabet and minimum length. `regex` has no look-ahead, so each
// required character class is checked by its own pattern below.
static PASSWORD_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("PASSWORD_CHARSET_REGEX: invalid regex pattern")
});

static PASSWORD_CLASS_REGEXES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [r"[a-z]", r"[A-Z]", r"[0-9]", r"[@$!%*?&]"].map(|pattern| {
        Regex::new(pattern).expect("PASSWORD_CLASS_REGEXES: invalid regex pattern")
    })
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Task title must be between 3 and 50 characters")]
    TitleLength,

    #[error("Task description must be between 3 and 500 characters")]
    DescriptionLength,

    #[error("Each subtask must be between 3 and 150 characters")]
    SubtaskLength,

    #[error("Category name cannot be empty")]
    CategoryEmpty,

    #[error("Category name must be between 3 and 25 characters")]
    CategoryLength,

    #[error("Username must be between 3 and 20 characters")]
    UsernameLength,

    #[error("Email address is not valid")]
    Email,

    #[error(
        "Password must be at least 8 characters and include an uppercase letter, \
         a lowercase letter, a number and a special character"
    )]
    PasswordComplexity,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter your email or username and password")]
    MissingCredentials,
}

fn char_len_within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if char_len_within(title, TITLE_MIN, TITLE_MAX) {
        Ok(())
    } else {
        Err(ValidationError::TitleLength)
    }
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if char_len_within(description, DESCRIPTION_MIN, DESCRIPTION_MAX) {
        Ok(())
    } else {
        Err(ValidationError::DescriptionLength)
    }
}

pub fn validate_subtask_title(title: &str) -> Result<(), ValidationError> {
    if char_len_within(title, SUBTASK_MIN, SUBTASK_MAX) {
        Ok(())
    } else {
        Err(ValidationError::SubtaskLength)
    }
}

/// Title, then description, then every subtask. The first failure wins.
pub fn validate_task_draft(draft: &TaskDraft) -> Result<(), ValidationError> {
    validate_title(&draft.title)?;
    validate_description(&draft.description)?;
    for subtask in &draft.subtasks {
        validate_subtask_title(&subtask.title)?;
    }
    Ok(())
}

/// A name of only whitespace counts as empty.
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::CategoryEmpty);
    }
    if char_len_within(name, CATEGORY_MIN, CATEGORY_MAX) {
        Ok(())
    } else {
        Err(ValidationError::CategoryLength)
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if char_len_within(username, USERNAME_MIN, USERNAME_MAX) {
        Ok(())
    } else {
        Err(ValidationError::UsernameLength)
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least eight characters from letters, digits and `@$!%*?&`, with at
/// least one of each class.
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(password) && PASSWORD_CLASS_REGEXES.iter().all(|class| class.is_match(password))
}

/// Registration form as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::Email);
        }
        if !is_valid_password(&self.password) {
            return Err(ValidationError::PasswordComplexity);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

pub fn validate_credentials(identifier: &str, password: &str) -> Result<(), ValidationError> {
    if identifier.is_empty() || password.is_empty() {
        Err(ValidationError::MissingCredentials)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subtask;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: "A reasonable description".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn title_bounds() {
        assert_eq!(validate_task_draft(&draft("ab")), Err(ValidationError::TitleLength));
        assert!(validate_task_draft(&draft("abc")).is_ok());
        assert!(validate_task_draft(&draft(&"x".repeat(50))).is_ok());
        assert_eq!(
            validate_task_draft(&draft(&"x".repeat(51))),
            Err(ValidationError::TitleLength)
        );
    }

    #[test]
    fn title_counts_characters() {
        // 50 two-byte characters
        assert!(validate_title(&"\u{f1}".repeat(50)).is_ok());
    }

    #[test]
    fn title_message_names_the_bounds() {
        let message = ValidationError::TitleLength.to_string();
        assert!(message.contains("3"));
        assert!(message.contains("50"));
    }

    #[test]
    fn description_and_subtasks() {
        let mut d = draft("Groceries");
        d.description = "no".to_string();
        assert_eq!(validate_task_draft(&d), Err(ValidationError::DescriptionLength));

        d.description = "x".repeat(500);
        d.subtasks = vec![Subtask::new("Milk"), Subtask::new("Eg")];
        assert_eq!(validate_task_draft(&d), Err(ValidationError::SubtaskLength));

        d.subtasks[1] = Subtask::new(&"e".repeat(150));
        assert!(validate_task_draft(&d).is_ok());
    }

    #[test]
    fn category_names() {
        assert_eq!(validate_category_name(""), Err(ValidationError::CategoryEmpty));
        assert_eq!(validate_category_name("   "), Err(ValidationError::CategoryEmpty));
        assert_eq!(validate_category_name("\t\n "), Err(ValidationError::CategoryEmpty));
        assert_eq!(validate_category_name("ab"), Err(ValidationError::CategoryLength));
        assert!(validate_category_name("Groceries!").is_ok());
        assert_eq!(
            validate_category_name(&"c".repeat(26)),
            Err(ValidationError::CategoryLength)
        );
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana@example."));
    }

    #[test]
    fn passwords() {
        assert!(is_valid_password("Secret1!"));
        assert!(!is_valid_password("Secret1"));
        assert!(!is_valid_password("secret1!"));
        assert!(!is_valid_password("SECRET1!"));
        assert!(!is_valid_password("Secreto!"));
        assert!(!is_valid_password("Secret1#"));
        assert!(!is_valid_password("Sec1!"));
        assert!(!is_valid_password("Secret1! "));
        assert!(is_valid_password("aB3$aB3$aB3$"));
        // non-ASCII digits are not digits here
        assert!(!is_valid_password("Secret\u{663}!"));
    }

    #[test]
    fn registration_checks_in_order() {
        let mut form = RegistrationForm {
            username: "an".to_string(),
            email: "bad".to_string(),
            password: "weak".to_string(),
            confirm_password: "other".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::UsernameLength));

        form.username = "ana".to_string();
        assert_eq!(form.validate(), Err(ValidationError::Email));

        form.email = "ana@example.com".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordComplexity));

        form.password = "Secret1!".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        form.confirm_password = "Secret1!".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn credentials_must_be_present() {
        assert_eq!(validate_credentials("", "x"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_credentials("ana", ""), Err(ValidationError::MissingCredentials));
        assert!(validate_credentials("ana", "pw").is_ok());
    }
}
