use super::*;
use crate::notification::Severity;

fn contact(id: i64, name: &str) -> Contact {
    Contact {
        id: Some(RecordId::Number(id)),
        name: name.into(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone_number: None,
    }
}

#[test]
fn new_selection_overwrites_previous_one() {
    let mut state = CrudState::default();
    state.select(contact(1, "Ana").into());
    state.select(contact(2, "Bo").into());

    assert_eq!(state.selected::<Contact>(), Some(&contact(2, "Bo")));
    assert_eq!(state.selected::<Task>(), None);

    state.clear_selection(ResourceKind::Contacts);
    assert_eq!(state.selected::<Contact>(), None);
}

#[test]
fn only_one_confirmation_is_open_at_a_time() {
    let mut state = CrudState::default();
    assert!(state.request_update(contact(1, "Ana").into()));
    state.request_delete(ResourceKind::Tasks, RecordId::Number(8));

    assert_eq!(state.pending_update(), None);
    assert_eq!(
        state.pending_delete(),
        Some((ResourceKind::Tasks, &RecordId::Number(8)))
    );
}

#[test]
fn update_without_id_is_refused() {
    let mut state = CrudState::default();
    let mut unsaved = contact(1, "Ana");
    unsaved.id = None;

    assert!(!state.request_update(unsaved.into()));
    assert_eq!(state.confirmation, None);
}

#[test]
fn cancelling_the_wrong_kind_keeps_the_pending_confirmation() {
    let mut state = CrudState::default();
    state.request_delete(ResourceKind::Contacts, RecordId::Number(3));

    assert!(!state.cancel_update());
    assert!(state.pending_delete().is_some());
    assert!(state.cancel_delete());
    assert_eq!(state.confirmation, None);
}

#[test]
fn replace_records_is_wholesale() {
    let mut state = CrudState::default();
    state.replace_records(vec![contact(1, "Ana"), contact(2, "Bo")]);
    state.replace_records(vec![contact(3, "Cy")]);

    assert_eq!(state.records::<Contact>(), &[contact(3, "Cy")]);
    assert_eq!(state.record_count(ResourceKind::Contacts), 1);
    assert_eq!(state.record_count(ResourceKind::Tasks), 0);
}

#[test]
fn notifications_supersede_and_hide() {
    let mut state = CrudState::default();
    state.notify(Notification::new(Severity::Info, "first"));
    state.notify(Notification::new(Severity::Error, "second"));
    assert_eq!(
        state.visible_notification().map(|n| n.message.as_str()),
        Some("second")
    );

    state.dismiss_notification();
    assert_eq!(state.visible_notification(), None);
    assert!(state.notification.is_some());
}

#[test]
fn expiry_only_fires_once() {
    let mut state = CrudState::default();
    state.notify(Notification::new(Severity::Success, "done"));
    let raised_at = state.notification.as_ref().expect("notification").raised_at;
    let hide = Duration::milliseconds(6000);

    assert!(!state.expire_notification(raised_at + Duration::milliseconds(10), hide));
    assert!(state.expire_notification(raised_at + hide, hide));
    assert!(!state.expire_notification(raised_at + hide * 2, hide));
}
