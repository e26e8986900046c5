/// Property-based tests using proptest
/// Locks the invariants both validation layers must share: no panics on
/// arbitrary input, blank fields always rejected, and an identical verdict
/// on email format from client and server.
use lead_capture_api::lead_client::LeadClient;
use lead_capture_api::lead_service::{LeadService, INVALID_EMAIL_MESSAGE};
use lead_capture_api::models::Lead;
use lead_capture_api::validation::is_valid_email;
use proptest::prelude::*;

fn lead(name: &str, email: &str, phone: &str) -> Lead {
    Lead {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

// Property: validation should never panic
proptest! {
    #[test]
    fn email_validation_never_panics(email in "\\PC*") {
        let _ = is_valid_email(&email);
    }

    #[test]
    fn both_validators_never_panic(name in "\\PC*", email in "\\PC*", phone in "\\PC*") {
        let l = lead(&name, &email, &phone);
        let _ = LeadService::validate(&l);
        let _ = LeadClient::validate(&l);
    }
}

// Property: blank fields are rejected by both layers before any network call
proptest! {
    #[test]
    fn blank_fields_rejected_by_both_layers(
        blank in "[ \t]{0,5}",
        which in 0usize..3
    ) {
        let mut l = lead("Ana Silva", "ana@example.com", "+5511999999999");
        match which {
            0 => l.name = blank,
            1 => l.email = blank,
            _ => l.phone = blank,
        }

        prop_assert!(LeadService::validate(&l).is_err());
        let client_err = LeadClient::validate(&l).unwrap_err();
        prop_assert_eq!(client_err.status_code, 400);
    }
}

// Property: well-formed local@domain.tld addresses pass both layers
proptest! {
    #[test]
    fn simple_addresses_accepted_by_both_layers(
        local in "[a-z0-9.+_-]{1,16}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{}@{}.{}", local, domain, tld);
        prop_assert!(is_valid_email(&email), "rejected: {}", email);

        let l = lead("Ana Silva", &email, "+5511999999999");
        prop_assert!(LeadService::validate(&l).is_ok());
        prop_assert!(LeadClient::validate(&l).is_ok());
    }
}

// Property: the two layers agree on email format for any non-blank input
proptest! {
    #[test]
    fn layers_agree_on_email_format(email in "\\PC*") {
        prop_assume!(!email.trim().is_empty());

        let l = lead("Ana Silva", &email, "+5511999999999");

        let server_rejects_format = matches!(
            LeadService::validate(&l),
            Err(ref e) if e.public_message() == INVALID_EMAIL_MESSAGE
        );
        let client_rejects_format = matches!(
            LeadClient::validate(&l),
            Err(ref e) if e.message.contains("Email format is invalid")
        );

        prop_assert_eq!(server_rejects_format, client_rejects_format, "email: {:?}", email);
    }
}
