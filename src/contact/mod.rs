//! Contact form and newsletter state. Nothing here talks to a network; a
//! submission is acknowledged locally and reset on a timer owned by the page.

pub mod category;
pub mod form;
pub mod inquiry;
pub mod newsletter;

pub use category::{FieldKind, FieldSpec, InquiryCategory, SelectOption};
pub use form::{FieldIssue, FormError, FormPhase, InquiryAction, InquiryForm, Submission};
pub use inquiry::{CareersInquiry, DemoInquiry, GovernmentInquiry, Inquiry, InvestorInquiry};
pub use newsletter::{NewsletterAction, NewsletterError, NewsletterSignup};
