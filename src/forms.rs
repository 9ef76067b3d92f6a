//! Login and registration form state

use crate::error::{ApiError, Result};
use crate::types::LoginRequest;
use serde::Serialize;

/// Check the login form's required fields.
pub fn validate_login(form: &LoginRequest) -> Result<()> {
    if form.username.is_empty() {
        return Err(ApiError::Validation("username".into()));
    }
    if form.password.is_empty() {
        return Err(ApiError::Validation("password".into()));
    }
    Ok(())
}

/// Registration payload, posted verbatim
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RegistrationForm {
    pub user_name: String,
    pub password: String,
    pub competency: String,
    pub purpose: String,
    pub education: String,
    pub pack: String,
    pub preference: String,
    pub foundby: String,
    pub circuit_count: String,
    pub review: String,
    pub notesby_user: String,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserName,
    Password,
    Competency,
    Purpose,
    Education,
    Pack,
    Preference,
    FoundBy,
    CircuitCount,
    Review,
    NotesByUser,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::UserName => "user_name",
            Field::Password => "password",
            Field::Competency => "competency",
            Field::Purpose => "purpose",
            Field::Education => "education",
            Field::Pack => "pack",
            Field::Preference => "preference",
            Field::FoundBy => "foundby",
            Field::CircuitCount => "circuit_count",
            Field::Review => "review",
            Field::NotesByUser => "notesby_user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::UserName => "User Name",
            Field::Password => "Password",
            Field::Competency => "Competency",
            Field::Purpose => "Purpose",
            Field::Education => "Education",
            Field::Pack => "Pack",
            Field::Preference => "Preference",
            Field::FoundBy => "Found By",
            Field::CircuitCount => "Circuit Count",
            Field::Review => "Review",
            Field::NotesByUser => "Notes By User",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::UserName => "Enter your user name",
            Field::Password => "Enter your password",
            Field::Competency => "Enter your competency",
            Field::Purpose => "Enter the purpose",
            Field::Education => "Enter your education",
            Field::Pack => "Enter pack details",
            Field::Preference => "Enter your preference",
            Field::FoundBy => "Enter how you found us",
            Field::CircuitCount => "Enter the circuit count",
            Field::Review => "Enter your review",
            Field::NotesByUser => "Enter your notes",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Password => FieldKind::Password,
            Field::CircuitCount => FieldKind::Number,
            Field::Review | Field::NotesByUser => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Field::UserName | Field::Password)
    }
}

impl RegistrationForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::UserName => &self.user_name,
            Field::Password => &self.password,
            Field::Competency => &self.competency,
            Field::Purpose => &self.purpose,
            Field::Education => &self.education,
            Field::Pack => &self.pack,
            Field::Preference => &self.preference,
            Field::FoundBy => &self.foundby,
            Field::CircuitCount => &self.circuit_count,
            Field::Review => &self.review,
            Field::NotesByUser => &self.notesby_user,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::UserName => &mut self.user_name,
            Field::Password => &mut self.password,
            Field::Competency => &mut self.competency,
            Field::Purpose => &mut self.purpose,
            Field::Education => &mut self.education,
            Field::Pack => &mut self.pack,
            Field::Preference => &mut self.preference,
            Field::FoundBy => &mut self.foundby,
            Field::CircuitCount => &mut self.circuit_count,
            Field::Review => &mut self.review,
            Field::NotesByUser => &mut self.notesby_user,
        };
        *slot = value;
    }

    /// First required field in `fields` that is still blank.
    pub fn first_missing(&self, fields: &[Field]) -> Option<Field> {
        fields
            .iter()
            .copied()
            .find(|f| f.required() && self.get(*f).trim().is_empty())
    }
}

/// Registration wizard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Account,
    Profile,
    Feedback,
}

impl Step {
    pub fn title(self) -> &'static str {
        match self {
            Step::Account => "Account",
            Step::Profile => "Profile",
            Step::Feedback => "Feedback",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Account => &[Field::UserName, Field::Password, Field::Competency],
            Step::Profile => &[
                Field::Purpose,
                Field::Education,
                Field::Pack,
                Field::Preference,
            ],
            Step::Feedback => &[
                Field::FoundBy,
                Field::CircuitCount,
                Field::Review,
                Field::NotesByUser,
            ],
        }
    }

    pub fn number(self) -> usize {
        match self {
            Step::Account => 1,
            Step::Profile => 2,
            Step::Feedback => 3,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Account => Some(Step::Profile),
            Step::Profile => Some(Step::Feedback),
            Step::Feedback => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Account => None,
            Step::Profile => Some(Step::Account),
            Step::Feedback => Some(Step::Profile),
        }
    }
}

pub const STEP_COUNT: usize = 3;

/// Stepped registration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWizard {
    pub form: RegistrationForm,
    step: Step,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self {
            form: RegistrationForm::default(),
            step: Step::Account,
        }
    }
}

impl RegistrationWizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Move forward if the current step's required fields are filled.
    pub fn advance(&mut self) -> Result<Step> {
        if let Some(missing) = self.form.first_missing(self.step.fields()) {
            return Err(ApiError::Validation(missing.name().into()));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back. Never validates.
    pub fn back(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// The full form, once every required field is filled.
    pub fn submission(&self) -> Result<&RegistrationForm> {
        let all = [Step::Account, Step::Profile, Step::Feedback];
        for step in all {
            if let Some(missing) = self.form.first_missing(step.fields()) {
                return Err(ApiError::Validation(missing.name().into()));
            }
        }
        Ok(&self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let mut form = LoginRequest::default();
        assert_eq!(
            validate_login(&form),
            Err(ApiError::Validation("username".into()))
        );
        form.username = "ada".into();
        assert_eq!(
            validate_login(&form),
            Err(ApiError::Validation("password".into()))
        );
        form.password = "secret".into();
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn wizard_blocks_until_required_fields_filled() {
        let mut wizard = RegistrationWizard::default();
        assert_eq!(
            wizard.advance(),
            Err(ApiError::Validation("user_name".into()))
        );
        assert_eq!(wizard.step(), Step::Account);

        wizard.form.set(Field::UserName, "ada".into());
        assert_eq!(
            wizard.advance(),
            Err(ApiError::Validation("password".into()))
        );

        wizard.form.set(Field::Password, "hunter2".into());
        assert_eq!(wizard.advance(), Ok(Step::Profile));
        // Optional fields never block
        assert_eq!(wizard.advance(), Ok(Step::Feedback));
        assert!(wizard.is_last_step());
        assert_eq!(wizard.advance(), Ok(Step::Feedback));
    }

    #[test]
    fn back_does_not_validate() {
        let mut wizard = RegistrationWizard::default();
        wizard.form.set(Field::UserName, "ada".into());
        wizard.form.set(Field::Password, "hunter2".into());
        wizard.advance().unwrap();
        wizard.form.set(Field::UserName, String::new());
        assert_eq!(wizard.back(), Step::Account);
        assert_eq!(wizard.back(), Step::Account);
    }

    #[test]
    fn submission_checks_every_step() {
        let mut wizard = RegistrationWizard::default();
        wizard.form.set(Field::Password, "hunter2".into());
        assert!(wizard.submission().is_err());
        wizard.form.set(Field::UserName, "ada".into());
        assert_eq!(wizard.submission().map(|f| f.user_name.as_str()), Ok("ada"));
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let mut form = RegistrationForm::default();
        form.set(Field::FoundBy, "a friend".into());
        form.set(Field::CircuitCount, "3".into());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["foundby"], "a friend");
        assert_eq!(json["circuit_count"], "3");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn every_field_appears_in_exactly_one_step() {
        let mut seen: Vec<&str> = [Step::Account, Step::Profile, Step::Feedback]
            .iter()
            .flat_map(|s| s.fields().iter().map(|f| f.name()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 11);
        assert_eq!(STEP_COUNT, 3);
    }
}
