use std::cell::RefCell;
use std::rc::Rc;

use aquacortex_site::config;
use aquacortex_site::contact::{FormPhase, InquiryCategory, InquiryForm, NewsletterSignup};
use aquacortex_site::theme::{DisplayMode, FixedSignal, MemoryStorage, PreferenceStore, RootMarker};
use aquacortex_site::utils::timer::{ManualScheduler, ResetTimer};

/// Records every mode written to the document root.
#[derive(Clone, Default)]
struct RecordingRoot {
    marks: Rc<RefCell<Vec<DisplayMode>>>,
}

impl RecordingRoot {
    fn last(&self) -> Option<DisplayMode> {
        self.marks.borrow().last().copied()
    }
}

impl RootMarker for RecordingRoot {
    fn mark(&self, mode: DisplayMode) {
        self.marks.borrow_mut().push(mode);
    }
}

type Store = PreferenceStore<MemoryStorage, FixedSignal, RecordingRoot>;

fn session(storage: &MemoryStorage, prefers_dark: Option<bool>) -> (Store, RecordingRoot) {
    let root = RecordingRoot::default();
    let store = PreferenceStore::new(storage.clone(), FixedSignal(prefers_dark), root.clone());
    (store, root)
}

/// Submits the form and arms a reset the way the contact page does.
fn submit_with_reset(form: &Rc<RefCell<InquiryForm>>, timer: &mut ResetTimer<ManualScheduler>) {
    let ticket = form.borrow_mut().submit().ticket;
    let form = Rc::clone(form);
    timer.arm(config::INQUIRY_ACK_MS, move || {
        form.borrow_mut().acknowledgment_elapsed(ticket)
    });
}

#[test]
fn light_preference_survives_into_next_session() {
    let storage = MemoryStorage::new();

    let (mut first, root) = session(&storage, Some(false));
    assert_eq!(first.initialize(), DisplayMode::Light);
    assert_eq!(root.last(), Some(DisplayMode::Light));
    assert_eq!(storage.get(first.storage_key()), None);

    assert_eq!(first.toggle_mode(), DisplayMode::Dark);
    assert_eq!(storage.get(first.storage_key()).as_deref(), Some("dark"));
    assert_eq!(root.last(), Some(DisplayMode::Dark));

    let (mut second, second_root) = session(&storage, Some(false));
    assert_eq!(second.initialize(), DisplayMode::Dark);
    assert_eq!(second_root.last(), Some(DisplayMode::Dark));
}

#[test]
fn unset_ambient_signal_starts_dark() {
    let storage = MemoryStorage::new();
    let (mut store, _) = session(&storage, None);
    assert_eq!(store.initialize(), DisplayMode::Dark);
}

#[test]
fn persisted_mode_wins_over_ambient_signal() {
    for ambient in [Some(true), Some(false), None] {
        for saved in DisplayMode::ALL {
            let storage = MemoryStorage::new();
            let (mut seed, _) = session(&storage, None);
            seed.set_mode(saved);

            let (mut store, _) = session(&storage, ambient);
            store.initialize();
            assert_eq!(store.current_mode(), saved, "ambient {:?}", ambient);
        }
    }
}

#[test]
fn toggle_parity() {
    let storage = MemoryStorage::new();
    let (mut store, _) = session(&storage, Some(true));
    let start = store.initialize();
    for n in 1..=7 {
        store.toggle_mode();
        let expected = if n % 2 == 0 { start } else { start.toggled() };
        assert_eq!(store.current_mode(), expected, "after {} toggles", n);
    }
}

#[test]
fn investor_submission_is_acknowledged_for_five_seconds() {
    let clock = ManualScheduler::new();
    let mut timer = ResetTimer::new(clock.clone());
    let form = Rc::new(RefCell::new(InquiryForm::default()));

    form.borrow_mut().select_category(InquiryCategory::Investor);
    form.borrow_mut().set_field("email", "a@b.com").unwrap();
    submit_with_reset(&form, &mut timer);
    assert!(form.borrow().is_acknowledged());
    assert_eq!(form.borrow().phase(), FormPhase::Submitted);

    clock.advance(4_999);
    assert!(form.borrow().is_acknowledged());

    clock.advance(1);
    assert!(!form.borrow().is_acknowledged());
    assert_eq!(form.borrow().phase(), FormPhase::Idle);
    assert_eq!(form.borrow().field("email"), Some("a@b.com"));
}

#[test]
fn resubmitting_restarts_the_acknowledgment_window() {
    let clock = ManualScheduler::new();
    let mut timer = ResetTimer::new(clock.clone());
    let form = Rc::new(RefCell::new(InquiryForm::new(InquiryCategory::Demo)));

    submit_with_reset(&form, &mut timer);
    clock.advance(3_000);
    submit_with_reset(&form, &mut timer);
    assert_eq!(clock.pending(), 1);

    clock.advance(3_000);
    assert!(form.borrow().is_acknowledged());

    clock.advance(2_000);
    assert!(!form.borrow().is_acknowledged());
}

#[test]
fn unmounting_cancels_the_pending_reset() {
    let clock = ManualScheduler::new();
    let form = Rc::new(RefCell::new(InquiryForm::default()));
    {
        let mut timer = ResetTimer::new(clock.clone());
        submit_with_reset(&form, &mut timer);
        assert_eq!(clock.pending(), 1);
    }
    assert_eq!(clock.pending(), 0);
    clock.advance(10_000);
    assert!(form.borrow().is_acknowledged());
}

#[test]
fn switching_away_and_back_restores_field_set_and_values() {
    let mut form = InquiryForm::new(InquiryCategory::Careers);
    form.set_field("location", "Oslo").unwrap();
    let careers = form.visible_fields();

    form.select_category(InquiryCategory::Government);
    assert_ne!(form.visible_fields(), careers);
    assert_eq!(form.field("location"), None);

    form.select_category(InquiryCategory::Careers);
    assert_eq!(form.visible_fields(), careers);
    assert_eq!(form.field("location"), Some("Oslo"));
}

#[test]
fn newsletter_clears_after_its_window() {
    let clock = ManualScheduler::new();
    let mut timer = ResetTimer::new(clock.clone());
    let signup = Rc::new(RefCell::new(NewsletterSignup::default()));

    signup.borrow_mut().set_email("grower@farm.io");
    let ticket = signup.borrow_mut().subscribe().unwrap();
    {
        let signup = Rc::clone(&signup);
        timer.arm(config::NEWSLETTER_ACK_MS, move || {
            signup.borrow_mut().acknowledgment_elapsed(ticket)
        });
    }
    assert!(signup.borrow().is_subscribed());

    clock.advance(u64::from(config::NEWSLETTER_ACK_MS));
    assert!(!signup.borrow().is_subscribed());
    assert_eq!(signup.borrow().email(), "");
}
