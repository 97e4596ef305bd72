use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;
use yew::Reducible;

use crate::utils::acknowledgment::{AckTicket, Acknowledgment};
use crate::utils::validation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("Enter your email to subscribe")]
    EmptyEmail,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Already subscribed")]
    AlreadySubscribed,
}

/// Footer "Join the Blue Revolution" signup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterSignup {
    email: String,
    error: Option<NewsletterError>,
    ack: Acknowledgment,
}

impl NewsletterSignup {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<NewsletterError> {
        self.error
    }

    pub fn is_subscribed(&self) -> bool {
        self.ack.is_active()
    }

    pub fn pending_acknowledgment(&self) -> Option<AckTicket> {
        self.ack.pending()
    }

    /// Ignored while the thank-you state is showing (the input is disabled).
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.is_subscribed() {
            return;
        }
        self.email = email.into();
        self.error = None;
    }

    pub fn subscribe(&mut self) -> Result<AckTicket, NewsletterError> {
        let result = if self.is_subscribed() {
            Err(NewsletterError::AlreadySubscribed)
        } else if validation::is_blank(&self.email) {
            Err(NewsletterError::EmptyEmail)
        } else if !validation::is_email(&self.email) {
            Err(NewsletterError::InvalidEmail)
        } else {
            info!("newsletter subscription for {}", self.email.trim());
            Ok(self.ack.raise())
        };
        self.error = result.err();
        result
    }

    /// Clears both the flag and the email once the delay for `ticket` passes.
    pub fn acknowledgment_elapsed(&mut self, ticket: AckTicket) {
        if self.ack.expire(ticket) {
            self.email.clear();
        }
    }
}

pub enum NewsletterAction {
    SetEmail(String),
    Subscribe,
    AcknowledgmentElapsed(AckTicket),
}

impl Reducible for NewsletterSignup {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NewsletterAction::SetEmail(email) => next.set_email(email),
            NewsletterAction::Subscribe => {
                if let Err(e) = next.subscribe() {
                    debug!("newsletter signup rejected: {}", e);
                }
            }
            NewsletterAction::AcknowledgmentElapsed(ticket) => next.acknowledgment_elapsed(ticket),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_does_nothing() {
        let mut signup = NewsletterSignup::default();
        assert_eq!(signup.subscribe(), Err(NewsletterError::EmptyEmail));
        assert!(!signup.is_subscribed());
        assert_eq!(signup.error(), Some(NewsletterError::EmptyEmail));
    }

    #[test]
    fn test_subscribe_then_reset_clears_email() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("reader@example.com");
        let ticket = signup.subscribe().unwrap();
        assert!(signup.is_subscribed());
        assert_eq!(signup.email(), "reader@example.com");

        signup.acknowledgment_elapsed(ticket);
        assert!(!signup.is_subscribed());
        assert_eq!(signup.email(), "");
    }

    #[test]
    fn test_input_locked_while_subscribed() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("reader@example.com");
        signup.subscribe().unwrap();
        signup.set_email("other@example.com");
        assert_eq!(signup.email(), "reader@example.com");
        assert_eq!(signup.subscribe(), Err(NewsletterError::AlreadySubscribed));
    }

    #[test]
    fn test_editing_clears_error() {
        let mut signup = NewsletterSignup::default();
        signup.set_email("nope");
        assert_eq!(signup.subscribe(), Err(NewsletterError::InvalidEmail));
        signup.set_email("yes@example.com");
        assert_eq!(signup.error(), None);
    }
}
