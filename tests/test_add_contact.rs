//! Tests for the add-contact command.

use contact_registry::domain::{Address, Email, Name, Phone, TagSet};
use contact_registry::{AddContact, AddContactParams, AddOutcome, ContactRecord, Registry};

fn params(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> AddContactParams {
    AddContactParams {
        name: name.to_string(),
        phone: phone.to_string(),
        is_phone_private: false,
        email: email.to_string(),
        is_email_private: false,
        address: address.to_string(),
        is_address_private: false,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Asserts that building an add command from the supplied input fails.
fn assert_construction_fails(input: AddContactParams) {
    let debug = format!("{:?}", input);
    assert!(
        AddContact::from_params(input).is_err(),
        "An add command was successfully constructed with invalid input: {}",
        debug
    );
}

fn generate_test_contact() -> ContactRecord {
    ContactRecord::new(
        Name::new(Name::EXAMPLE).unwrap(),
        Phone::new(Phone::EXAMPLE, false).unwrap(),
        Email::new(Email::EXAMPLE, true).unwrap(),
        Address::new(Address::EXAMPLE, false).unwrap(),
        TagSet::new(),
    )
}

#[test]
fn test_add_contact_invalid_name() {
    for name in ["", " ", "'", "[]\\[;]"] {
        assert_construction_fails(params(name, Phone::EXAMPLE, Email::EXAMPLE, Address::EXAMPLE, &[]));
    }
}

#[test]
fn test_add_contact_invalid_phone() {
    for phone in ["", " ", "1234-5678", "[]\\[;]", "abc", "a123", "+651234"] {
        assert_construction_fails(params(Name::EXAMPLE, phone, Email::EXAMPLE, Address::EXAMPLE, &[]));
    }
}

#[test]
fn test_add_contact_invalid_email() {
    for email in ["", " ", "def.com", "@", "@def", "@def.com", "abc@"] {
        assert_construction_fails(params(Name::EXAMPLE, Phone::EXAMPLE, email, Address::EXAMPLE, &[]));
    }
}

#[test]
fn test_add_contact_invalid_address() {
    for address in ["", " "] {
        assert_construction_fails(params(Name::EXAMPLE, Phone::EXAMPLE, Email::EXAMPLE, address, &[]));
    }
}

#[test]
fn test_add_contact_invalid_tags() {
    let invalid_tags: [&[&str]; 5] = [&[""], &[" "], &["'"], &["validTag", ""], &["", " "]];
    for tags in invalid_tags {
        assert_construction_fails(params(
            Name::EXAMPLE,
            Phone::EXAMPLE,
            Email::EXAMPLE,
            Address::EXAMPLE,
            tags,
        ));
    }
}

#[test]
fn test_add_contact_valid_data_correctly_constructed() {
    let cmd = AddContact::from_params(AddContactParams {
        name: "John Doe".to_string(),
        phone: "98765432".to_string(),
        is_phone_private: true,
        email: "johnd@gmail.com".to_string(),
        is_email_private: false,
        address: "Blk 123".to_string(),
        is_address_private: true,
        tags: vec!["friends".to_string()],
    })
    .unwrap();

    let record = cmd.record();
    assert_eq!(record.name().as_str(), "John Doe");
    assert_eq!(record.phone().as_str(), "98765432");
    assert!(record.phone().is_private());
    assert_eq!(record.email().as_str(), "johnd@gmail.com");
    assert!(!record.email().is_private());
    assert_eq!(record.address().as_str(), "Blk 123");
    assert!(record.address().is_private());
    assert_eq!(record.tags().len(), 1);
}

#[test]
fn test_add_contact_stores_trimmed_values() {
    let cmd = AddContact::from_params(params(
        "  Jane Roe ",
        " 123 ",
        " jane@roe.org",
        " Blk 9 ",
        &[" work "],
    ))
    .unwrap();
    let record = cmd.record();
    assert_eq!(record.name().as_str(), "Jane Roe");
    assert_eq!(record.phone().as_str(), "123");
    assert_eq!(record.email().as_str(), "jane@roe.org");
    assert_eq!(record.address().as_str(), "Blk 9");
    assert_eq!(record.tags().iter().next().unwrap().as_str(), "work");
}

#[test]
fn test_add_contact_empty_registry_contains_contact() {
    let contact = generate_test_contact();
    let cmd = AddContact::new(contact.clone());
    let mut registry = Registry::new();

    let outcome = cmd.execute(&mut registry);

    assert!(registry.contains_record(&contact));
    assert_eq!(registry.all_records().len(), 1);
    assert_eq!(outcome, AddOutcome::Added(contact.clone()));
    assert_eq!(outcome.feedback(), format!("New contact added: {}", contact));
}

#[test]
fn test_add_contact_registry_already_contains_contact() {
    let contact = generate_test_contact();
    let mut registry = Registry::new();
    registry.add_record(contact.clone()).unwrap();

    let outcome = AddContact::new(contact.clone()).execute(&mut registry);

    assert_eq!(outcome, AddOutcome::Duplicate);
    assert!(outcome.record().is_none());
    assert_eq!(outcome.feedback(), AddOutcome::MESSAGE_DUPLICATE);
    assert!(registry.contains_record(&contact));
    assert_eq!(registry.all_records().len(), 1);
}

#[test]
fn test_add_contact_repeated_execution_reports_duplicate() {
    let cmd = AddContact::from_params(AddContactParams {
        name: "John Doe".to_string(),
        phone: "98765432".to_string(),
        is_phone_private: true,
        email: "johnd@gmail.com".to_string(),
        is_email_private: false,
        address: "Blk 123".to_string(),
        is_address_private: true,
        tags: Vec::new(),
    })
    .unwrap();
    let mut registry = Registry::new();

    assert!(cmd.execute(&mut registry).is_added());
    assert_eq!(cmd.execute(&mut registry), AddOutcome::Duplicate);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_equivalent_contact_with_different_tags_is_duplicate() {
    let mut registry = Registry::new();
    let base = params(Name::EXAMPLE, Phone::EXAMPLE, Email::EXAMPLE, Address::EXAMPLE, &[]);
    let tagged = AddContactParams {
        is_phone_private: true,
        tags: vec!["family".to_string()],
        ..base.clone()
    };

    let first = AddContact::from_params(base).unwrap().execute(&mut registry);
    let second = AddContact::from_params(tagged).unwrap().execute(&mut registry);

    assert!(first.is_added());
    assert_eq!(second, AddOutcome::Duplicate);
    assert_eq!(registry.len(), 1);
}
