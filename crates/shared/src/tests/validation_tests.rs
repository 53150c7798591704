use super::*;

fn filled() -> ContactFields {
    ContactFields {
        name: "Jan Peeters".into(),
        email: "jan@example.be".into(),
        phone: String::new(),
        service: "gyproc".into(),
        message: "Graag een offerte.".into(),
    }
}

#[test]
fn email_shape_matches_simple_addresses() {
    assert!(is_valid_email("jan@example.be"));
    assert!(is_valid_email("a.b+c@sub.domain.org"));
    assert!(!is_valid_email("jan@example"));
    assert!(!is_valid_email("jan example@x.be"));
    assert!(!is_valid_email("@example.be"));
    assert!(!is_valid_email("jan@@example.be"));
}

#[test]
fn filled_form_has_no_field_errors() {
    assert!(validate_fields(&filled()).is_empty());
}

#[test]
fn blank_required_fields_are_reported_in_form_order() {
    let mut fields = filled();
    fields.name = "   ".into();
    fields.message.clear();

    let errors = validate_fields(&fields);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, FormField::Name);
    assert_eq!(errors[1].field, FormField::Message);
    assert!(errors
        .iter()
        .all(|error| error.message == messages::FIELD_REQUIRED));
}

#[test]
fn malformed_email_gets_its_own_message() {
    let mut fields = filled();
    fields.email = "jan-at-example.be".into();

    let errors = validate_fields(&fields);
    assert_eq!(
        errors,
        vec![FieldError::new(FormField::Email, messages::FIELD_INVALID_EMAIL)]
    );
}

#[test]
fn phone_is_optional() {
    let fields = filled();
    assert!(!FormField::Phone.is_required());
    assert!(missing_required(&fields).is_empty());
    assert_eq!(fields.phone(), None);
}

#[test]
fn service_label_falls_back_to_raw_value() {
    let mut fields = filled();
    assert_eq!(fields.service_label(), "Gyproc");
    fields.service = "dakwerken".into();
    assert_eq!(fields.service_label(), "dakwerken");
}
