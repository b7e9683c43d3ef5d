use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 2_000;

pub const SERVICES: &[&str] = &[
    "Meta Advertising",
    "Google Advertising",
    "Web Development",
    "SEO Services",
    "Marketplace Ads",
    "Graphic Design",
];

pub const BUDGETS: &[&str] = &[
    "Under ₹1 Lakh / month",
    "₹1 – 5 Lakh / month",
    "₹5 – 25 Lakh / month",
    "₹25 Lakh+ / month",
    "Not sure yet",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStep {
    Details,
    Project,
    Message,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [FormStep::Details, FormStep::Project, FormStep::Message];

    pub fn number(self) -> usize {
        match self {
            FormStep::Details => 1,
            FormStep::Project => 2,
            FormStep::Message => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormStep::Details => "About You",
            FormStep::Project => "Your Project",
            FormStep::Message => "Your Message",
        }
    }

    fn next(self) -> Option<FormStep> {
        match self {
            FormStep::Details => Some(FormStep::Project),
            FormStep::Project => Some(FormStep::Message),
            FormStep::Message => None,
        }
    }

    fn prev(self) -> Option<FormStep> {
        match self {
            FormStep::Details => None,
            FormStep::Project => Some(FormStep::Details),
            FormStep::Message => Some(FormStep::Project),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Service,
    Budget,
    Message,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please choose the service you're interested in")]
    MissingService,
    #[error("Tell us a little more, at least {min} characters")]
    MessageTooShort { min: usize },
    #[error("Please keep your message under {max} characters")]
    MessageTooLong { max: usize },
}

impl FormError {
    pub fn field(&self) -> Field {
        match self {
            FormError::MissingName => Field::Name,
            FormError::InvalidEmail => Field::Email,
            FormError::MissingService => Field::Service,
            FormError::MessageTooShort { .. } | FormError::MessageTooLong { .. } => Field::Message,
        }
    }
}

/// What gets posted to the form relay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// The three-step contact form. Moving forward validates the step being
/// left; moving back never does.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub step: FormStep,
    pub name: String,
    pub email: String,
    pub service: String,
    pub budget: String,
    pub message: String,
    pub errors: Vec<FormError>,
    pub status: SubmitStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            step: FormStep::Details,
            name: String::new(),
            email: String::new(),
            service: String::new(),
            budget: String::new(),
            message: String::new(),
            errors: Vec::new(),
            status: SubmitStatus::Idle,
        }
    }
}

impl ContactForm {
    pub fn error_for(&self, field: Field) -> Option<&FormError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Service => self.service = value,
            Field::Budget => self.budget = value,
            Field::Message => self.message = value,
        }
        self.errors.retain(|e| e.field() != field);
    }

    pub fn validate_step(&self, step: FormStep) -> Vec<FormError> {
        let mut errors = Vec::new();
        match step {
            FormStep::Details => {
                if self.name.trim().is_empty() {
                    errors.push(FormError::MissingName);
                }
                if !is_valid_email(self.email.trim()) {
                    errors.push(FormError::InvalidEmail);
                }
            }
            FormStep::Project => {
                if self.service.trim().is_empty() {
                    errors.push(FormError::MissingService);
                }
            }
            FormStep::Message => {
                let chars = self.message.trim().chars().count();
                if chars < MESSAGE_MIN_CHARS {
                    errors.push(FormError::MessageTooShort { min: MESSAGE_MIN_CHARS });
                } else if chars > MESSAGE_MAX_CHARS {
                    errors.push(FormError::MessageTooLong { max: MESSAGE_MAX_CHARS });
                }
            }
        }
        errors
    }

    /// Advances when the current step is valid. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        self.errors = self.validate_step(self.step);
        if !self.errors.is_empty() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
            self.errors.clear();
        }
    }

    /// Validates every step and builds the payload. On failure the form
    /// jumps to the first step with a problem.
    pub fn prepare_submission(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }
        for step in FormStep::ALL {
            let errors = self.validate_step(step);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors;
                return None;
            }
        }

        let name = self.name.trim().to_string();
        let budget = Some(self.budget.trim())
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        Some(ContactSubmission {
            subject: format!("New enquiry from {} ({})", name, self.service.trim()),
            name,
            email: self.email.trim().to_string(),
            service: self.service.trim().to_string(),
            budget,
            message: self.message.trim().to_string(),
        })
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Next,
    Back,
    /// Re-runs full validation so the form lands on the first bad step.
    Review,
    Sending,
    Sent,
    Failed(String),
    DismissStatus,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => form.edit(field, value),
            ContactAction::Next => {
                form.next();
            }
            ContactAction::Back => form.back(),
            ContactAction::Review => {
                form.prepare_submission();
            }
            ContactAction::Sending => form.status = SubmitStatus::Sending,
            ContactAction::Sent => {
                form = ContactForm {
                    status: SubmitStatus::Sent,
                    ..ContactForm::default()
                };
            }
            ContactAction::Failed(reason) => form.status = SubmitStatus::Failed(reason),
            ContactAction::DismissStatus => {
                if !form.is_sending() {
                    form.status = SubmitStatus::Idle;
                }
            }
        }
        Rc::new(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "  Priya Shah ".into());
        form.edit(Field::Email, "priya@brand.co".into());
        form.edit(Field::Service, "Meta Advertising".into());
        form.edit(Field::Message, "We want to scale our D2C store.".into());
        form
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        for bad in ["", "plain", "@b.co", "a@b", "a@.co", "a@b.", "a@@b.co", "a b@c.co", "a@b..co"] {
            assert!(!is_valid_email(bad), "{bad:?} accepted");
        }
    }

    #[test]
    fn next_blocks_on_invalid_details() {
        let mut form = ContactForm::default();
        form.edit(Field::Email, "nope".into());

        assert!(!form.next());
        assert_eq!(form.step, FormStep::Details);
        assert_eq!(form.errors, vec![FormError::MissingName, FormError::InvalidEmail]);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::default();
        form.next();
        form.edit(Field::Name, "Priya".into());

        assert!(form.error_for(Field::Name).is_none());
        assert_eq!(form.error_for(Field::Email), Some(&FormError::InvalidEmail));
    }

    #[test]
    fn walks_forward_and_back() {
        let mut form = filled();
        assert!(form.next());
        assert_eq!(form.step, FormStep::Project);
        assert!(form.next());
        assert_eq!(form.step, FormStep::Message);
        assert!(!form.next());
        assert_eq!(form.step, FormStep::Message);

        form.back();
        form.back();
        form.back();
        assert_eq!(form.step, FormStep::Details);
    }

    #[test]
    fn back_skips_validation() {
        let mut form = filled();
        form.next();
        form.edit(Field::Service, String::new());
        form.back();
        assert_eq!(form.step, FormStep::Details);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn message_length_bounds() {
        let mut form = filled();
        form.edit(Field::Message, "   too short   ".into());
        assert_eq!(
            form.validate_step(FormStep::Message),
            vec![FormError::MessageTooShort { min: MESSAGE_MIN_CHARS }]
        );

        form.edit(Field::Message, "x".repeat(MESSAGE_MAX_CHARS + 1));
        assert_eq!(
            form.validate_step(FormStep::Message),
            vec![FormError::MessageTooLong { max: MESSAGE_MAX_CHARS }]
        );
    }

    #[test]
    fn submission_trims_and_omits_empty_budget() {
        let mut form = filled();
        let submission = form.prepare_submission().expect("valid form");
        assert_eq!(submission.name, "Priya Shah");
        assert_eq!(submission.budget, None);
        assert_eq!(submission.subject, "New enquiry from Priya Shah (Meta Advertising)");

        let json = serde_json::to_value(&submission).expect("serializable");
        assert_eq!(json["_subject"], "New enquiry from Priya Shah (Meta Advertising)");
        assert!(json.get("budget").is_none());
    }

    #[test]
    fn invalid_submission_jumps_to_first_bad_step() {
        let mut form = filled();
        form.step = FormStep::Message;
        form.edit(Field::Service, String::new());

        assert!(form.prepare_submission().is_none());
        assert_eq!(form.step, FormStep::Project);
        assert_eq!(form.errors, vec![FormError::MissingService]);
    }

    #[test]
    fn no_second_submission_while_sending() {
        let mut form = filled();
        form.status = SubmitStatus::Sending;
        assert!(form.prepare_submission().is_none());
    }

    #[test]
    fn sent_resets_fields_and_keeps_status() {
        let form = Rc::new(filled()).reduce(ContactAction::Sending);
        assert!(form.is_sending());

        let form = form.reduce(ContactAction::DismissStatus);
        assert!(form.is_sending());

        let form = form.reduce(ContactAction::Sent);
        assert_eq!(form.status, SubmitStatus::Sent);
        assert_eq!(form.step, FormStep::Details);
        assert!(form.name.is_empty());

        let form = form.reduce(ContactAction::DismissStatus);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn review_surfaces_errors_without_sending() {
        let mut start = filled();
        start.email = "nope".into();
        start.step = FormStep::Message;

        let form = Rc::new(start).reduce(ContactAction::Review);
        assert_eq!(form.step, FormStep::Details);
        assert_eq!(form.errors, vec![FormError::InvalidEmail]);
        assert_eq!(form.status, SubmitStatus::Idle);
    }
}
