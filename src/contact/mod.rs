pub mod form;
pub mod relay;

pub use form::{ContactAction, ContactForm, Field, FormStep, SubmitStatus};

/// `mailto:` link with an encoded subject line.
pub fn mailto_link(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}
