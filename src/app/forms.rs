// ABOUTME: Editable form state behind the auth screen and the registration wizard screen
// Tracks field focus, text input and the last validation failure for inline display

use crate::auth::RegistrationForm;
use crate::models::{ApplicationDraft, Field, FieldKind, Role};
use crate::wizard::{FieldProblem, ValidationError, WizardController, WizardError, WizardStep};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Role,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
            Self::Role => "Role",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl AuthTab {
    pub fn fields(&self) -> &'static [AuthField] {
        match self {
            Self::Login => &[AuthField::Email, AuthField::Password],
            Self::Register => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Phone,
                AuthField::Password,
                AuthField::ConfirmPassword,
                AuthField::Role,
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub focus: usize,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn focused_field(&self) -> AuthField {
        let fields = self.tab.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        };
        self.focus = 0;
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.tab.fields().len();
    }

    pub fn previous_field(&mut self) {
        let len = self.tab.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Phone => &self.phone,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
            AuthField::Role => self.role.as_str(),
        }
    }

    fn slot_mut(&mut self, field: AuthField) -> Option<&mut String> {
        match field {
            AuthField::Name => Some(&mut self.name),
            AuthField::Email => Some(&mut self.email),
            AuthField::Phone => Some(&mut self.phone),
            AuthField::Password => Some(&mut self.password),
            AuthField::ConfirmPassword => Some(&mut self.confirm_password),
            AuthField::Role => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(slot) = self.slot_mut(self.focused_field()) {
            slot.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(slot) = self.slot_mut(self.focused_field()) {
            slot.pop();
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Student => Role::Admin,
            Role::Admin => Role::Student,
        };
    }

    pub fn registration(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            role: self.role,
        }
    }

    /// Forget passwords after an attempt
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

/// Wizard controller plus the field cursor and the last error set
#[derive(Debug, Clone)]
pub struct WizardForm {
    pub controller: WizardController,
    pub selected: usize,
    pub errors: Option<ValidationError>,
}

impl WizardForm {
    pub fn new(controller: WizardController) -> Self {
        Self {
            controller,
            selected: 0,
            errors: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.controller.current_step()
    }

    pub fn fields(&self) -> &'static [Field] {
        self.step().fields()
    }

    pub fn selected_field(&self) -> Field {
        let fields = self.fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.fields().len();
    }

    pub fn previous_field(&mut self) {
        let len = self.fields().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn problem(&self, field: Field) -> Option<&FieldProblem> {
        self.errors.as_ref().and_then(|errors| errors.problem_for(field))
    }

    /// Values a choice field cycles through; optional fields start with an empty entry
    pub fn options(&self, field: Field) -> Vec<String> {
        let mut options: Vec<String> = if let Some(tokens) = field.fixed_options() {
            tokens.iter().map(|t| t.to_string()).collect()
        } else if field.is_school_choice() {
            self.controller.rules().schools.clone()
        } else if field.is_program_choice() {
            self.controller.rules().programs.clone()
        } else {
            Vec::new()
        };
        if !field.is_required() {
            options.insert(0, String::new());
        }
        options
    }

    /// Whether typing edits `field`; school and program choices take free text
    /// when the catalogue for them is empty
    pub fn accepts_text(&self, field: Field) -> bool {
        match field.kind() {
            FieldKind::Text | FieldKind::LongText | FieldKind::Date | FieldKind::Number => true,
            FieldKind::Choice => {
                let rules = self.controller.rules();
                (field.is_school_choice() && rules.schools.is_empty())
                    || (field.is_program_choice() && rules.programs.is_empty())
            }
            _ => false,
        }
    }

    pub fn input_char(&mut self, c: char) -> Result<(), WizardError> {
        let field = self.selected_field();
        if !self.accepts_text(field) {
            return Ok(());
        }
        let mut value = self.controller.value(field).into_owned();
        value.push(c);
        self.controller.set_field(field, value)
    }

    pub fn backspace(&mut self) -> Result<(), WizardError> {
        let field = self.selected_field();
        if !self.accepts_text(field) {
            return Ok(());
        }
        let mut value = self.controller.value(field).into_owned();
        value.pop();
        self.controller.set_field(field, value)
    }

    /// Step a choice field forwards or backwards through its options
    pub fn cycle_choice(&mut self, forward: bool) -> Result<(), WizardError> {
        let field = self.selected_field();
        if field.kind() != FieldKind::Choice || self.accepts_text(field) {
            return Ok(());
        }
        let options = self.options(field);
        if options.is_empty() {
            return Ok(());
        }

        let current = self.controller.value(field);
        let index = options.iter().position(|o| o.eq_ignore_ascii_case(&current));
        let next = match (index, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        let value = options[next].clone();
        self.controller.set_field(field, value)
    }

    pub fn toggle_flag(&mut self) -> Result<(), WizardError> {
        let field = self.selected_field();
        if field.kind() != FieldKind::Flag {
            return Ok(());
        }
        let set = self.controller.draft().is_filled(field);
        self.controller.set_field(field, if set { "false" } else { "true" })
    }

    /// Validate and move forward; on failure the cursor jumps to the first bad field
    pub fn advance(&mut self) -> Result<(), WizardError> {
        let result = self.controller.advance();
        self.absorb(result)
    }

    pub fn retreat(&mut self) -> Result<(), WizardError> {
        let result = self.controller.retreat();
        self.absorb(result)
    }

    /// Submit via the controller and remember any validation failure
    pub fn submit_with<F>(&mut self, submit: F) -> Result<ApplicationDraft, WizardError>
    where
        F: FnOnce(&mut WizardController) -> Result<ApplicationDraft, WizardError>,
    {
        match submit(&mut self.controller) {
            Ok(draft) => {
                self.errors = None;
                Ok(draft)
            }
            Err(err) => {
                self.remember(&err);
                Err(err)
            }
        }
    }

    fn absorb(&mut self, result: Result<(), WizardError>) -> Result<(), WizardError> {
        match result {
            Ok(()) => {
                self.errors = None;
                self.selected = 0;
                Ok(())
            }
            Err(err) => {
                self.remember(&err);
                Err(err)
            }
        }
    }

    fn remember(&mut self, err: &WizardError) {
        let Some(errors) = err.validation() else {
            return;
        };
        // Earlier steps may be at fault after a failed submit
        if let Some(field) = errors.fields().into_iter().find(|f| self.fields().contains(f)) {
            if let Some(index) = self.fields().iter().position(|f| *f == field) {
                self.selected = index;
            }
        }
        self.errors = Some(errors.clone());
    }
}
