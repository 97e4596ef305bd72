use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use yew::Reducible;

use super::category::{FieldKind, FieldSpec, InquiryCategory};
use super::inquiry::{Drafts, Inquiry};
use crate::utils::acknowledgment::{AckTicket, Acknowledgment};
use crate::utils::validation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldIssue {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Enter a valid phone number")]
    InvalidPhone,
    #[error("Enter a full link starting with https://")]
    InvalidUrl,
    #[error("Choose one of the listed options")]
    UnknownOption,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{category} form has no field named {name:?}")]
    UnknownField {
        category: InquiryCategory,
        name: String,
    },
    #[error("{} field(s) need attention", .0.len())]
    Invalid(BTreeMap<&'static str, FieldIssue>),
}

/// Outcome of a submit. There is no transport, so it always succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: AckTicket,
    pub inquiry: Inquiry,
}

/// Contact form controller: active category, per-category drafts, field
/// issues and the transient thank-you flag.
///
/// The controller never schedules anything itself. Whoever owns it arms a
/// reset timer with the ticket from [`Submission`] and calls
/// [`InquiryForm::acknowledgment_elapsed`] when it fires.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    active: InquiryCategory,
    drafts: Drafts,
    issues: BTreeMap<&'static str, FieldIssue>,
    phase: FormPhase,
    ack: Acknowledgment,
}

impl InquiryForm {
    pub fn new(category: InquiryCategory) -> Self {
        Self {
            active: category,
            ..Self::default()
        }
    }

    pub fn active_category(&self) -> InquiryCategory {
        self.active
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_acknowledged(&self) -> bool {
        self.ack.is_active()
    }

    pub fn pending_acknowledgment(&self) -> Option<AckTicket> {
        self.ack.pending()
    }

    pub fn visible_fields(&self) -> &'static [FieldSpec] {
        self.active.fields()
    }

    /// Drafts of other categories are kept but stay in their own slots.
    pub fn select_category(&mut self, category: InquiryCategory) {
        if self.active != category {
            self.issues.clear();
        }
        self.active = category;
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self
            .drafts
            .get_mut(self.active)
            .slot_mut(name)
            .ok_or_else(|| FormError::UnknownField {
                category: self.active,
                name: name.to_string(),
            })?;
        *slot = value.into();
        self.issues.remove(name);
        if self.phase == FormPhase::Idle {
            self.phase = FormPhase::Editing;
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.drafts.get(self.active).slot(name).map(String::as_str)
    }

    pub fn issue(&self, name: &str) -> Option<FieldIssue> {
        self.issues.get(name).copied()
    }

    pub fn issues(&self) -> &BTreeMap<&'static str, FieldIssue> {
        &self.issues
    }

    /// Checks the active category's fields against their declarations and
    /// records any issues for display.
    pub fn validate(&mut self) -> Result<(), FormError> {
        let draft = self.drafts.get(self.active);
        let issues: BTreeMap<_, _> = self
            .active
            .fields()
            .iter()
            .filter_map(|spec| {
                let value = draft.slot(spec.name).map(String::as_str).unwrap_or_default();
                check_field(spec, value).map(|issue| (spec.name, issue))
            })
            .collect();
        self.issues = issues.clone();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(issues))
        }
    }

    /// Acknowledges the active draft unconditionally. Values are kept.
    pub fn submit(&mut self) -> Submission {
        let inquiry = self.drafts.snapshot(self.active);
        let fields = self.active.fields();
        let filled = fields
            .iter()
            .filter(|spec| inquiry.field(spec.name).map_or(false, |v| !validation::is_blank(v)))
            .count();
        match inquiry.to_json() {
            Ok(_) => debug!(
                "{} inquiry accepted locally ({} of {} fields filled)",
                self.active,
                filled,
                fields.len()
            ),
            Err(e) => warn!("{} inquiry not serializable: {}", self.active, e),
        }
        self.phase = FormPhase::Submitted;
        Submission {
            ticket: self.ack.raise(),
            inquiry,
        }
    }

    /// `validate` followed by `submit`.
    pub fn try_submit(&mut self) -> Result<Submission, FormError> {
        self.validate()?;
        Ok(self.submit())
    }

    /// Called when the reset delay for `ticket` has passed. Stale tickets are
    /// ignored so an older timer cannot hide a newer acknowledgment.
    pub fn acknowledgment_elapsed(&mut self, ticket: AckTicket) {
        if self.ack.expire(ticket) {
            self.phase = FormPhase::Idle;
        }
    }

    /// Clears every draft, issue and acknowledgment. Keeps the category and
    /// the ticket counter, so timers armed before the reset stay stale.
    pub fn reset(&mut self) {
        let mut ack = self.ack;
        ack.clear();
        *self = Self {
            ack,
            ..Self::new(self.active)
        };
    }
}

fn check_field(spec: &FieldSpec, value: &str) -> Option<FieldIssue> {
    if validation::is_blank(value) {
        return spec.required.then_some(FieldIssue::Required);
    }
    match spec.kind {
        FieldKind::Email if !validation::is_email(value) => Some(FieldIssue::InvalidEmail),
        FieldKind::Tel if !validation::is_phone(value) => Some(FieldIssue::InvalidPhone),
        FieldKind::Url if !validation::is_web_url(value) => Some(FieldIssue::InvalidUrl),
        FieldKind::Select { options, .. } if !options.iter().any(|o| o.value == value) => {
            Some(FieldIssue::UnknownOption)
        }
        _ => None,
    }
}

pub enum InquiryAction {
    Select(InquiryCategory),
    SetField { name: &'static str, value: String },
    Submit,
    AcknowledgmentElapsed(AckTicket),
    Reset,
}

impl Reducible for InquiryForm {
    type Action = InquiryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InquiryAction::Select(category) => next.select_category(category),
            InquiryAction::SetField { name, value } => {
                if let Err(e) = next.set_field(name, value) {
                    warn!("{}", e);
                }
            }
            InquiryAction::Submit => {
                if let Err(e) = next.try_submit() {
                    debug!("inquiry not submitted: {}", e);
                }
            }
            InquiryAction::AcknowledgmentElapsed(ticket) => next.acknowledgment_elapsed(ticket),
            InquiryAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[FieldSpec]) -> Vec<&'static str> {
        fields.iter().map(|f| f.name).collect()
    }

    fn filled_investor() -> InquiryForm {
        let mut form = InquiryForm::new(InquiryCategory::Investor);
        form.set_field("full_name", "Ada Lovelace").unwrap();
        form.set_field("organization", "Blue Fund").unwrap();
        form.set_field("investor_type", "fund").unwrap();
        form.set_field("email", "ada@bluefund.com").unwrap();
        form
    }

    #[test]
    fn test_defaults() {
        let form = InquiryForm::default();
        assert_eq!(form.active_category(), InquiryCategory::Demo);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_acknowledged());
    }

    #[test]
    fn test_visible_fields_follow_last_selection() {
        let mut form = InquiryForm::default();
        form.select_category(InquiryCategory::Investor);
        form.select_category(InquiryCategory::Careers);
        form.select_category(InquiryCategory::Investor);
        assert_eq!(
            names(form.visible_fields()),
            names(InquiryCategory::Investor.fields())
        );
    }

    #[test]
    fn test_phase_transitions() {
        let mut form = InquiryForm::default();
        form.set_field("email", "x@y.com").unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);

        let submission = form.submit();
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert!(form.is_acknowledged());

        form.acknowledgment_elapsed(submission.ticket);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_acknowledged());
    }

    #[test]
    fn test_submit_from_idle_is_allowed() {
        let mut form = InquiryForm::default();
        let submission = form.submit();
        assert_eq!(submission.inquiry.category(), InquiryCategory::Demo);
        assert!(form.is_acknowledged());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = InquiryForm::new(InquiryCategory::Investor);
        let err = form.set_field("species", "shrimp").unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                category: InquiryCategory::Investor,
                name: "species".into()
            }
        );
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_drafts_do_not_leak_between_categories() {
        let mut form = InquiryForm::new(InquiryCategory::Demo);
        form.set_field("email", "farm@example.com").unwrap();
        form.select_category(InquiryCategory::Careers);
        assert_eq!(form.field("email"), Some(""));

        let submission = form.submit();
        assert_eq!(submission.inquiry.field("email"), Some(""));

        form.select_category(InquiryCategory::Demo);
        assert_eq!(form.field("email"), Some("farm@example.com"));
    }

    #[test]
    fn test_validate_reports_missing_and_malformed() {
        let mut form = InquiryForm::new(InquiryCategory::Careers);
        form.set_field("email", "not-an-email").unwrap();
        form.set_field("linkedin", "linkedin.com/in/me").unwrap();
        form.set_field("expertise", "marketing").unwrap();

        let Err(FormError::Invalid(issues)) = form.validate() else {
            panic!("expected validation failure");
        };
        assert_eq!(issues.get("full_name"), Some(&FieldIssue::Required));
        assert_eq!(issues.get("location"), Some(&FieldIssue::Required));
        assert_eq!(issues.get("email"), Some(&FieldIssue::InvalidEmail));
        assert_eq!(issues.get("linkedin"), Some(&FieldIssue::InvalidUrl));
        assert_eq!(issues.get("expertise"), Some(&FieldIssue::UnknownOption));
        assert_eq!(issues.get("motivation"), None);
        assert_eq!(form.issue("email"), Some(FieldIssue::InvalidEmail));
    }

    #[test]
    fn test_editing_clears_that_fields_issue() {
        let mut form = InquiryForm::new(InquiryCategory::Investor);
        assert!(form.validate().is_err());
        assert!(form.issue("full_name").is_some());

        form.set_field("full_name", "Ada").unwrap();
        assert_eq!(form.issue("full_name"), None);
        assert!(form.issue("email").is_some());
    }

    #[test]
    fn test_try_submit_gates_on_validation() {
        let mut empty = InquiryForm::new(InquiryCategory::Investor);
        assert!(empty.try_submit().is_err());
        assert!(!empty.is_acknowledged());

        let mut form = filled_investor();
        let submission = form.try_submit().unwrap();
        assert_eq!(submission.inquiry.field("investor_type"), Some("fund"));
        assert!(form.issues().is_empty());
    }

    #[test]
    fn test_optional_fields_checked_only_when_filled() {
        let mut form = InquiryForm::new(InquiryCategory::Demo);
        for (name, value) in [
            ("full_name", "Lan"),
            ("organization", "Mekong Shrimp"),
            ("system_type", "pond"),
            ("email", "lan@mekong.vn"),
        ] {
            form.set_field(name, value).unwrap();
        }
        assert!(form.validate().is_ok());

        form.set_field("phone", "abc").unwrap();
        assert!(form.validate().is_err());
        assert_eq!(form.issue("phone"), Some(FieldIssue::InvalidPhone));
    }

    #[test]
    fn test_stale_ticket_ignored_after_resubmit() {
        let mut form = filled_investor();
        let first = form.submit();
        let second = form.submit();
        form.acknowledgment_elapsed(first.ticket);
        assert!(form.is_acknowledged());
        form.acknowledgment_elapsed(second.ticket);
        assert!(!form.is_acknowledged());
    }

    #[test]
    fn test_reset_clears_everything_but_category() {
        let mut form = filled_investor();
        form.submit();
        form.reset();
        assert_eq!(form.active_category(), InquiryCategory::Investor);
        assert_eq!(form.field("email"), Some(""));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_acknowledged());
    }

    #[test]
    fn test_timer_from_before_reset_stays_stale() {
        let mut form = filled_investor();
        let before = form.submit();
        form.reset();
        assert!(!form.is_acknowledged());

        form.set_field("email", "ada@bluefund.com").unwrap();
        let after = form.submit();
        assert_ne!(before.ticket, after.ticket);

        form.acknowledgment_elapsed(before.ticket);
        assert!(form.is_acknowledged());
        form.acknowledgment_elapsed(after.ticket);
        assert!(!form.is_acknowledged());
    }

    #[test]
    fn test_reducer_reset_keeps_category() {
        let form = Rc::new(filled_investor()).reduce(InquiryAction::Submit);
        let form = form.reduce(InquiryAction::Reset);
        assert_eq!(form.active_category(), InquiryCategory::Investor);
        assert_eq!(form.field("full_name"), Some(""));
        assert_eq!(form.pending_acknowledgment(), None);
    }

    #[test]
    fn test_reducer_submit_validates() {
        let form = Rc::new(InquiryForm::new(InquiryCategory::Investor));
        let form = form.reduce(InquiryAction::Submit);
        assert!(!form.is_acknowledged());
        assert!(!form.issues().is_empty());

        let form = Rc::new(filled_investor()).reduce(InquiryAction::Submit);
        let ticket = form.pending_acknowledgment().unwrap();
        let form = form.reduce(InquiryAction::AcknowledgmentElapsed(ticket));
        assert!(!form.is_acknowledged());
    }
}
