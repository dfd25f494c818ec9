use super::*;
use crate::net::fetch::RequestSlot;
use crate::net::types::{Address, Company};

fn directory_record() -> DirectoryUser {
    DirectoryUser {
        id: 1,
        first_name: Some("Emily".to_owned()),
        last_name: Some("Johnson".to_owned()),
        email: Some("emily.johnson@x.dummyjson.com".to_owned()),
        phone: Some("+81 965-431-3024".to_owned()),
        image: Some("https://dummyjson.com/icon/emilys/128".to_owned()),
        birth_date: Some("1996-5-30".to_owned()),
        address: Some(Address {
            address: Some("626 Main Street".to_owned()),
            city: Some("Phoenix".to_owned()),
            country: None,
            postal_code: Some("29112".to_owned()),
        }),
        company: Some(Company {
            name: Some("Dooley, Kozey and Cronin".to_owned()),
            title: None,
            department: Some("Engineering".to_owned()),
        }),
        ..DirectoryUser::default()
    }
}

// =============================================================
// Defaults and field access
// =============================================================

#[test]
fn defaults_match_placeholder_profile() {
    let form = ProfileForm::default();
    assert_eq!(form.first_name, "Bonnie");
    assert_eq!(form.city, "San Francisco");
    assert!(form.phone.is_empty());
    assert!(form.validate().is_empty());
}

#[test]
fn get_and_set_cover_every_field() {
    let mut form = ProfileForm::default();
    for field in ProfileField::ALL {
        form.set(field, field.key().to_owned());
    }
    for field in ProfileField::ALL {
        assert_eq!(form.get(field), field.key());
    }
}

#[test]
fn only_email_uses_email_input() {
    assert_eq!(ProfileField::Email.input_type(), "email");
    assert_eq!(ProfileField::Zip.input_type(), "text");
}

// =============================================================
// Directory merge
// =============================================================

#[test]
fn merge_prefers_directory_fields() {
    let mut form = ProfileForm::default();
    form.merge_directory(&directory_record());
    assert_eq!(form.first_name, "Emily");
    assert_eq!(form.email, "emily.johnson@x.dummyjson.com");
    assert_eq!(form.phone, "+81 965-431-3024");
    assert_eq!(form.city, "Phoenix");
    assert_eq!(form.address, "626 Main Street");
    assert_eq!(form.organization, "Dooley, Kozey and Cronin");
}

#[test]
fn merge_keeps_current_values_for_missing_fields() {
    let mut form = ProfileForm::default();
    form.merge_directory(&directory_record());
    assert_eq!(form.country, "United States");
    assert_eq!(form.role, "React Developer");
    assert_eq!(form.department, "Development");
    assert!(form.zip.is_empty());
}

#[test]
fn merge_of_sparse_record_changes_nothing() {
    let mut form = ProfileForm::default();
    form.merge_directory(&DirectoryUser { id: 3, ..DirectoryUser::default() });
    assert_eq!(form, ProfileForm::default());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn names_are_required() {
    let mut form = ProfileForm::default();
    form.first_name = "  ".to_owned();
    form.last_name = String::new();
    let errors = form.validate();
    assert_eq!(errors.get("first-name"), Some(&"Required"));
    assert_eq!(errors.get("last-name"), Some(&"Required"));
}

#[test]
fn invalid_email_phone_and_zip_are_reported() {
    let mut form = ProfileForm::default();
    form.email = "nope".to_owned();
    form.phone = "12".to_owned();
    form.zip = "ab".to_owned();
    let errors = form.validate();
    assert_eq!(errors.get("email"), Some(&"Enter a valid email"));
    assert_eq!(errors.get("phone-number"), Some(&"Enter a valid phone"));
    assert_eq!(errors.get("zip-code"), Some(&"Enter a valid zip/postal code"));
}

#[test]
fn optional_fields_pass_when_valid() {
    let mut form = ProfileForm::default();
    form.phone = "+1 (555) 123-4567".to_owned();
    form.zip = "94107".to_owned();
    assert!(form.validate().is_empty());
}

// =============================================================
// Editor lifecycle
// =============================================================

#[test]
fn load_success_merges_and_sets_image() {
    let mut state = ProfileState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(&directory_record());
    assert!(!state.loading);
    assert_eq!(state.form.first_name, "Emily");
    assert_eq!(state.image.as_deref(), Some("https://dummyjson.com/icon/emilys/128"));
    assert_eq!(state.birth_date.as_deref(), Some("1996-5-30"));
}

#[test]
fn load_failure_sets_message_and_keeps_form() {
    let mut state = ProfileState::default();
    state.begin_load();
    state.fail_load();
    assert_eq!(state.load_error.as_deref(), Some("Failed to load user"));
    assert_eq!(state.form, ProfileForm::default());
    state.begin_load();
    assert!(state.load_error.is_none());
}

#[test]
fn save_is_blocked_by_validation_errors() {
    let mut state = ProfileState { editing: true, ..ProfileState::default() };
    state.form.email = "bad".to_owned();
    assert!(!state.begin_save());
    assert!(state.editing);
    assert!(!state.loading);
    assert!(state.errors.contains_key("email"));
}

#[test]
fn save_success_leaves_edit_mode() {
    let mut state = ProfileState::default();
    state.toggle_editing();
    assert!(state.editing);
    assert!(state.begin_save());
    assert!(state.loading);
    state.finish_save();
    assert!(!state.editing);
    assert!(!state.loading);
    assert_eq!(state.success.as_deref(), Some("Profile updated"));
}

#[test]
fn cancel_discards_field_errors() {
    let mut state = ProfileState { editing: true, ..ProfileState::default() };
    state.form.first_name.clear();
    assert!(!state.begin_save());
    state.cancel_editing();
    assert!(!state.editing);
    assert!(state.errors.is_empty());
}

#[test]
fn new_selection_starts_from_defaults() {
    let state = ProfileState::loading();
    assert!(state.loading);
    assert_eq!(state.form, ProfileForm::default());
    assert!(state.image.is_none());
}

#[test]
fn success_message_can_be_cleared() {
    let mut state = ProfileState::default();
    state.finish_save();
    state.clear_success();
    assert!(state.success.is_none());
}

#[test]
fn save_settles_while_its_ticket_is_current() {
    let slot = RequestSlot::default();
    let mut state = ProfileState { editing: true, ..ProfileState::default() };
    assert!(state.begin_save());
    let ticket = slot.begin();
    assert!(state.settle_save(&ticket));
    assert_eq!(state.success.as_deref(), Some(PROFILE_UPDATED));
    state.expire_success(&ticket);
    assert!(state.success.is_none());
}

#[test]
fn save_from_previous_id_does_not_touch_new_load() {
    let slot = RequestSlot::default();
    let mut state = ProfileState { editing: true, ..ProfileState::default() };
    assert!(state.begin_save());
    let save_ticket = slot.begin();

    // Navigating to another id restarts the page state under a new ticket.
    let _load_ticket = slot.begin();
    state = ProfileState::loading();

    assert!(!state.settle_save(&save_ticket));
    assert!(state.loading);
    assert!(state.success.is_none());
    assert!(!state.editing);
}

#[test]
fn stale_success_timer_keeps_newer_banner() {
    let slot = RequestSlot::default();
    let mut state = ProfileState { editing: true, ..ProfileState::default() };
    assert!(state.begin_save());
    let first = slot.begin();
    assert!(state.settle_save(&first));

    state.toggle_editing();
    assert!(state.begin_save());
    let second = slot.begin();
    assert!(state.settle_save(&second));

    state.expire_success(&first);
    assert_eq!(state.success.as_deref(), Some(PROFILE_UPDATED));
}
