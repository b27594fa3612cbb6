//! Form editing state types.
//!
//! This module contains the text inputs backing the login, signup and task
//! forms, and the checks run before a form is submitted.

use log::*;
use regex::Regex;
use std::sync::OnceLock;
use tui_textarea::{CursorMove, TextArea};

const MASK_CHAR: char = '\u{2022}';
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

pub const LOGIN_EMAIL: usize = 0;
pub const LOGIN_PASSWORD: usize = 1;

pub const SIGNUP_NAME: usize = 0;
pub const SIGNUP_EMAIL: usize = 1;
pub const SIGNUP_PASSWORD: usize = 2;
pub const SIGNUP_CONFIRM_PASSWORD: usize = 3;

pub const TASK_TITLE: usize = 0;
pub const TASK_DESCRIPTION: usize = 1;

/// Reasons a form cannot be submitted.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a task title")]
    MissingTitle,
}

/// A single labelled input.
///
pub struct FormField {
    pub label: &'static str,
    pub input: TextArea<'static>,
    multiline: bool,
    secret: bool,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        let mut input = TextArea::default();
        input.set_placeholder_text(format!("Enter {}", label.to_lowercase()));
        FormField {
            label,
            input,
            multiline: false,
            secret: false,
        }
    }

    fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self.input.set_mask_char(MASK_CHAR);
        self
    }

    /// Returns true if the field accepts line breaks.
    ///
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Returns true if the field holds a password.
    ///
    pub fn is_secret(&self) -> bool {
        self.secret
    }

    /// Return the field content with lines joined by newlines.
    ///
    pub fn value(&self) -> String {
        self.input.lines().join("\n")
    }
}

/// Ordered set of inputs with one focused field.
///
pub struct Form {
    fields: Vec<FormField>,
    focused: usize,
    secrets_visible: bool,
}

impl Form {
    fn with_fields(fields: Vec<FormField>) -> Self {
        Form {
            fields,
            focused: 0,
            secrets_visible: false,
        }
    }

    /// Return the login form.
    ///
    pub fn login() -> Self {
        Form::with_fields(vec![
            FormField::new("Email"),
            FormField::new("Password").secret(),
        ])
    }

    /// Return the signup form.
    ///
    pub fn signup() -> Self {
        Form::with_fields(vec![
            FormField::new("Name"),
            FormField::new("Email"),
            FormField::new("Password").secret(),
            FormField::new("Confirm Password").secret(),
        ])
    }

    /// Return the form used to add and edit tasks.
    ///
    pub fn task() -> Self {
        Form::with_fields(vec![
            FormField::new("Title"),
            FormField::new("Description").multiline(),
        ])
    }

    /// Return all fields.
    ///
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Return all fields for rendering.
    ///
    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    /// Return the index of the focused field.
    ///
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Return the content of the field at the index.
    ///
    pub fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(FormField::value)
            .unwrap_or_default()
    }

    /// Replace the content of the field at the index.
    ///
    pub fn set_value(&mut self, index: usize, value: &str) -> &mut Self {
        if let Some(field) = self.fields.get_mut(index) {
            let lines: Vec<String> = value.lines().map(str::to_owned).collect();
            let mut input = if lines.is_empty() {
                TextArea::default()
            } else {
                TextArea::new(lines)
            };
            input.set_placeholder_text(format!("Enter {}", field.label.to_lowercase()));
            if field.secret && !self.secrets_visible {
                input.set_mask_char(MASK_CHAR);
            }
            input.move_cursor(CursorMove::Bottom);
            input.move_cursor(CursorMove::End);
            field.input = input;
        }
        self
    }

    /// Move focus to the next field, wrapping around.
    ///
    pub fn focus_next(&mut self) -> &mut Self {
        self.focused = (self.focused + 1) % self.fields.len();
        self
    }

    /// Move focus to the previous field, wrapping around.
    ///
    pub fn focus_previous(&mut self) -> &mut Self {
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
        self
    }

    /// Returns true if the last field is focused.
    ///
    pub fn is_last_focused(&self) -> bool {
        self.focused + 1 == self.fields.len()
    }

    fn focused_field(&mut self) -> &mut FormField {
        &mut self.fields[self.focused]
    }

    /// Type a character into the focused field.
    ///
    pub fn insert_char(&mut self, c: char) -> &mut Self {
        self.focused_field().input.insert_char(c);
        self
    }

    /// Insert a line break if the focused field accepts one. Returns true if
    /// the break was inserted.
    ///
    pub fn insert_newline(&mut self) -> bool {
        let field = self.focused_field();
        if field.multiline {
            field.input.insert_newline();
            true
        } else {
            false
        }
    }

    /// Delete the character before the cursor.
    ///
    pub fn backspace(&mut self) -> &mut Self {
        self.focused_field().input.delete_char();
        self
    }

    /// Delete the character under the cursor.
    ///
    pub fn delete(&mut self) -> &mut Self {
        self.focused_field().input.delete_next_char();
        self
    }

    /// Move the cursor of the focused field.
    ///
    pub fn move_cursor(&mut self, movement: CursorMove) -> &mut Self {
        self.focused_field().input.move_cursor(movement);
        self
    }

    /// Returns true if password fields show their content.
    ///
    pub fn secrets_visible(&self) -> bool {
        self.secrets_visible
    }

    /// Show or hide the content of password fields.
    ///
    pub fn toggle_secrets(&mut self) -> &mut Self {
        self.secrets_visible = !self.secrets_visible;
        for field in self.fields.iter_mut().filter(|f| f.secret) {
            if self.secrets_visible {
                field.input.clear_mask_char();
            } else {
                field.input.set_mask_char(MASK_CHAR);
            }
        }
        self
    }

    /// Empty all fields and focus the first one.
    ///
    pub fn clear(&mut self) -> &mut Self {
        for index in 0..self.fields.len() {
            self.set_value(index, "");
        }
        self.focused = 0;
        self
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile email pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Returns true if the text looks like an email address.
///
pub fn is_valid_email(email: &str) -> bool {
    match email_pattern() {
        Some(re) => re.is_match(email.trim()),
        None => email.contains('@'),
    }
}

/// Check login input.
///
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok(())
}

/// Check signup input.
///
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FormError> {
    if name.trim().is_empty()
        || email.trim().is_empty()
        || password.is_empty()
        || confirm_password.is_empty()
    {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

/// Check task input.
///
pub fn validate_task(title: &str) -> Result<(), FormError> {
    if title.trim().is_empty() {
        return Err(FormError::MissingTitle);
    }
    Ok(())
}
