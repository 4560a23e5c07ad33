//! Comprehensive tests for domain_party

use std::sync::Arc;

use proptest::prelude::*;

use core_kernel::{FixedClock, IdGenerator};
use domain_party::{
    Address, AddressType, Communication, ContactType, Party, PartyError, PartyFactory,
    PartyGroup, PartyNumber, PartyStatus, PartyType,
};
use test_utils::{
    assert_contains_in_order, assert_invalid_contact, assert_renders_completely,
    isolated_factory, AddressFixtures, CommunicationFixtures, PartyFixtures, TestAddressBuilder,
    TestPartyBuilder, FIXTURE_MILLIS,
};

// ============================================================================
// Party Tests
// ============================================================================

mod party_tests {
    use super::*;

    #[test]
    fn test_party_new() {
        let party = Party::new("Alice Johnson", PartyType::Person, "Customer", PartyStatus::Active)
            .unwrap();

        assert_eq!(party.name(), "Alice Johnson");
        assert_eq!(party.party_type(), PartyType::Person);
        assert_eq!(party.group(), &PartyGroup::Customer);
        assert_eq!(party.status(), PartyStatus::Active);
        assert!(party.addresses().is_empty());
        assert!(party.communications().is_empty());
        assert_eq!(party.number().prefix(), "CU");
    }

    #[test]
    fn test_party_new_short_group_fails() {
        let result = Party::new("Nobody", PartyType::Person, "C", PartyStatus::Active);
        assert!(matches!(result, Err(PartyError::InvalidArgument(_))));
    }

    #[test]
    fn test_global_ids_increase() {
        let first = Party::new("A", PartyType::Person, "Customer", PartyStatus::Active).unwrap();
        let second = Party::new("B", PartyType::Person, "Customer", PartyStatus::Active).unwrap();
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_add_address_preserves_order() {
        let factory = isolated_factory();
        let mut party = PartyFixtures::bare_customer(&factory);
        let a1 = AddressFixtures::billing(&factory);
        let a2 = AddressFixtures::shipping(&factory);
        let a3 = TestAddressBuilder::new().with_city("Chicago").build(&factory);

        party.add_address(a1.clone());
        party.add_address(a2.clone());
        party.add_address(a3.clone());

        let collected: Vec<&Address> = party.addresses().iter().collect();
        assert_eq!(collected, vec![&a1, &a2, &a3]);
    }

    #[test]
    fn test_duplicate_children_kept() {
        let factory = isolated_factory();
        let mut party = PartyFixtures::bare_customer(&factory);
        let address = AddressFixtures::billing(&factory);

        party.add_address(address.clone());
        party.add_address(address);
        party.add_communication(CommunicationFixtures::email());
        party.add_communication(CommunicationFixtures::email());

        assert_eq!(party.addresses().len(), 2);
        assert_eq!(party.communications().len(), 2);
        assert_eq!(party.addresses().get(0), party.addresses().get(1));
    }

    #[test]
    fn test_party_serialization() {
        let factory = isolated_factory();
        let party = PartyFixtures::customer(&factory);

        let json = serde_json::to_string(&party).unwrap();
        let deserialized: Party = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, party);
    }

    #[test]
    fn test_party_deserialization_rejects_bad_contact() {
        let factory = isolated_factory();
        let party = PartyFixtures::customer(&factory);
        let json = serde_json::to_string(&party)
            .unwrap()
            .replace("alice@example.com", "alice-at-example");

        assert!(serde_json::from_str::<Party>(&json).is_err());
    }

    fn customer_json(factory: &PartyFactory) -> serde_json::Value {
        serde_json::to_value(PartyFixtures::customer(factory)).unwrap()
    }

    fn load_error(json: serde_json::Value) -> String {
        serde_json::from_value::<Party>(json).unwrap_err().to_string()
    }

    #[test]
    fn test_party_deserialization_rejects_short_group() {
        let factory = isolated_factory();
        let mut json = customer_json(&factory);
        json["group"] = "X".into();

        assert!(load_error(json).contains("too short"));
    }

    #[test]
    fn test_party_deserialization_rejects_foreign_number() {
        let factory = isolated_factory();
        let mut json = customer_json(&factory);
        json["number"] = "ZZ_1".into();
        assert!(load_error(json).contains("does not match group"));

        let mut json = customer_json(&factory);
        json["group"] = "Vendor".into();
        assert!(load_error(json).contains("does not match group"));

        let mut json = customer_json(&factory);
        json["number"] = "CU_yesterday".into();
        assert!(load_error(json).contains("malformed party number"));
    }

    #[test]
    fn test_party_deserialization_rejects_shared_address_id() {
        let factory = isolated_factory();
        let mut json = customer_json(&factory);
        let mut shipping = serde_json::to_value(AddressFixtures::shipping(&factory)).unwrap();
        shipping["id"] = json["addresses"][0]["id"].clone();
        json["addresses"].as_array_mut().unwrap().push(shipping);

        assert!(load_error(json).contains("shared by different addresses"));
    }

    #[test]
    fn test_party_deserialization_keeps_repeated_address() {
        let factory = isolated_factory();
        let mut party = PartyFixtures::customer(&factory);
        party.add_address(party.addresses().get(0).unwrap().clone());

        let json = serde_json::to_string(&party).unwrap();
        let loaded: Party = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, party);
    }

    #[test]
    fn test_party_json_uses_plain_tags() {
        let factory = isolated_factory();
        let json = customer_json(&factory);
        assert_eq!(json["group"], "Customer");
        assert_eq!(json["addresses"][0]["address_type"], "Bill_To");
    }
}

// ============================================================================
// Factory Tests
// ============================================================================

mod factory_tests {
    use super::*;

    #[test]
    fn test_factory_ids_are_isolated() {
        let factory = isolated_factory();
        let first = PartyFixtures::bare_customer(&factory);
        let second = PartyFixtures::bare_customer(&factory);

        assert_eq!(first.id().value(), 1);
        assert_eq!(second.id().value(), 2);
        assert_eq!(AddressFixtures::billing(&factory).id().value(), 1);
    }

    #[test]
    fn test_number_determinism() {
        let factory = isolated_factory();
        let party = TestPartyBuilder::new().with_group("Vendor").build(&factory).unwrap();
        assert_eq!(party.number().as_str(), format!("VE_{}", FIXTURE_MILLIS));
    }

    #[test]
    fn test_same_millisecond_same_group_collides() {
        let factory = isolated_factory();
        let a = PartyFixtures::bare_customer(&factory);
        let b = PartyFixtures::bare_customer(&factory);

        assert_eq!(a.number(), b.number());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clock_advance_changes_number() {
        let clock = Arc::new(FixedClock::new(1_000));
        let factory = PartyFactory::new(Arc::new(IdGenerator::new()), clock.clone());

        let before = PartyFixtures::bare_customer(&factory);
        clock.advance(1);
        let after = PartyFixtures::bare_customer(&factory);

        assert_eq!(before.number().as_str(), "CU_1000");
        assert_eq!(after.number().as_str(), "CU_1001");
    }

    #[test]
    fn test_failed_party_leaves_id_gap() {
        let factory = isolated_factory();
        let ok = TestPartyBuilder::new().build(&factory).unwrap();
        let failed = TestPartyBuilder::new().with_group("Z").build(&factory);
        let next = TestPartyBuilder::new().build(&factory).unwrap();

        assert!(failed.is_err());
        assert_eq!(ok.id().value(), 1);
        assert_eq!(next.id().value(), 3);
    }

    #[test]
    fn test_reset_isolates_runs() {
        let factory = isolated_factory();
        PartyFixtures::bare_customer(&factory);
        factory.ids().reset();
        assert_eq!(PartyFixtures::bare_customer(&factory).id().value(), 1);
    }

    proptest! {
        #[test]
        fn prop_party_ids_unique_and_increasing(n in 1usize..100) {
            let factory = isolated_factory();
            let ids: Vec<_> = (0..n)
                .map(|_| PartyFixtures::bare_customer(&factory).id())
                .collect();
            for pair in ids.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn prop_address_ids_unique_and_increasing(n in 1usize..100) {
            let factory = isolated_factory();
            let ids: Vec<_> = (0..n)
                .map(|_| AddressFixtures::shipping(&factory).id())
                .collect();
            for pair in ids.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn prop_number_matches_formula(
            group in test_utils::group_strategy(),
            millis in test_utils::timestamp_strategy(),
        ) {
            let factory = PartyFactory::new(
                Arc::new(IdGenerator::new()),
                Arc::new(FixedClock::new(millis)),
            );
            let party = TestPartyBuilder::new().with_group(group.as_str()).build(&factory).unwrap();
            let prefix: String = group.chars().take(2).collect::<String>().to_uppercase();
            prop_assert_eq!(party.number().as_str(), format!("{}_{}", prefix, millis));
            prop_assert_eq!(party.number(), &PartyNumber::generate(&group, millis).unwrap());
        }
    }
}

// ============================================================================
// Address Tests
// ============================================================================

mod address_tests {
    use super::*;

    #[test]
    fn test_address_fields() {
        let factory = isolated_factory();
        let address = AddressFixtures::billing(&factory);

        assert_eq!(address.address_type(), &AddressType::BillTo);
        assert_eq!(address.line1(), "123 Billing St");
        assert_eq!(address.line2(), Some("Suite 100"));
        assert_eq!(address.city(), "New York");
        assert_eq!(address.state(), "NY");
        assert_eq!(address.country(), "USA");
        assert_eq!(address.postal_code(), "10001");
    }

    #[test]
    fn test_tag_rendered_with_caller_casing() {
        let factory = isolated_factory();
        let address = TestAddressBuilder::new().with_type("BILL_TO").build(&factory);
        assert_eq!(address.address_type(), &AddressType::Other("BILL_TO".to_string()));
        assert!(address.to_string().contains("type:BILL_TO,"));

        let party = TestPartyBuilder::new().with_group("customer").build(&factory).unwrap();
        assert!(party.to_string().contains("group:customer,"));
        assert_eq!(party.number().prefix(), "CU");
    }

    #[test]
    fn test_global_address_ids_increase() {
        let a = Address::new("Bill_To", "1 A St", "", "X", "Y", "Z", "1");
        let b = Address::new("Bill_To", "1 A St", "", "X", "Y", "Z", "1");
        assert!(b.id() > a.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_custom_tag() {
        let factory = isolated_factory();
        let address = TestAddressBuilder::new().with_type("Warehouse").build(&factory);
        assert_eq!(address.address_type().as_str(), "Warehouse");
        assert!(address.to_string().contains("type:Warehouse"));
    }
}

// ============================================================================
// Communication Tests
// ============================================================================

mod communication_tests {
    use super::*;

    #[test]
    fn test_validation_table() {
        let cases: [(&str, &str, bool); 5] = [
            ("email", "a@b.co", true),
            ("email", "not-an-email", false),
            ("phone", "+1-555-123-4567", true),
            ("fax", "12", false),
            ("pager", "123-4567", false),
        ];

        for (kind, contact, valid) in cases {
            let result = Communication::new(kind, contact);
            if valid {
                assert!(result.is_ok(), "({kind}, {contact}) should be valid");
            } else {
                assert_invalid_contact(result, kind);
            }
        }
    }

    #[test]
    fn test_failure_scenario_produces_nothing_attachable() {
        let result = Communication::new("Email", "not-an-email");
        assert_invalid_contact(result, "Email");
    }

    #[test]
    fn test_contact_types() {
        assert_eq!(CommunicationFixtures::email().contact_type(), ContactType::Email);
        assert_eq!(CommunicationFixtures::phone().contact_type(), ContactType::Phone);
        assert_eq!(CommunicationFixtures::fax().contact_type(), ContactType::Fax);
    }

    proptest! {
        #[test]
        fn prop_valid_emails_accepted(email in test_utils::valid_email_strategy()) {
            prop_assert!(Communication::new("email", email).is_ok());
        }

        #[test]
        fn prop_strings_without_at_rejected(text in test_utils::invalid_email_strategy()) {
            prop_assert!(Communication::new("email", text).is_err());
        }

        #[test]
        fn prop_valid_dials_accepted(
            number in test_utils::valid_dial_strategy(),
            kind in prop_oneof![Just("phone"), Just("fax")],
        ) {
            prop_assert!(Communication::new(kind, number).is_ok());
        }

        #[test]
        fn prop_short_dials_rejected(number in test_utils::short_dial_strategy()) {
            prop_assert!(Communication::new("phone", number).is_err());
        }

        #[test]
        fn prop_unknown_types_rejected(kind in test_utils::unknown_contact_type_strategy()) {
            let result = Communication::new(&kind, "alice@example.com");
            prop_assert_eq!(result, Err(PartyError::invalid_contact(kind.clone())));
        }

        #[test]
        fn prop_type_case_ignored(kind in test_utils::mixed_case_strategy("email")) {
            prop_assert!(Communication::new(&kind, "a@b.co").is_ok());
        }

        #[test]
        fn prop_typed_and_string_constructors_agree(
            kind in test_utils::contact_type_strategy(),
            contact in prop_oneof![
                test_utils::valid_email_strategy(),
                test_utils::valid_dial_strategy(),
                test_utils::short_dial_strategy(),
            ],
        ) {
            prop_assert_eq!(
                Communication::of(kind, contact.clone()).is_ok(),
                Communication::new(kind.as_str(), contact).is_ok()
            );
        }
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod rendering_tests {
    use super::*;

    #[test]
    fn test_customer_scenario() {
        let mut customer =
            Party::new("Alice Johnson", PartyType::Person, "Customer", PartyStatus::Active).unwrap();
        customer.add_address(Address::new(
            "Bill_To",
            "123 Billing St",
            "Suite 100",
            "New York",
            "NY",
            "USA",
            "10001",
        ));
        customer.add_communication(Communication::new("Email", "alice@example.com").unwrap());

        let rendered = customer.to_string();
        assert!(rendered.contains("name:Alice Johnson"));
        assert!(rendered.contains("city:New York"));
        assert!(rendered.contains("contact:alice@example.com"));
    }

    #[test]
    fn test_render_exact_with_isolated_factory() {
        let factory = isolated_factory();
        let party = PartyFixtures::customer(&factory);

        assert_eq!(
            party.to_string(),
            format!(
                "Party {{id:1, number:CU_{}, name:Alice Johnson, type:Person, group:Customer, status:Active, \
                 addresses:[Address{{id:1, type:Bill_To, line1:123 Billing St, line2:Suite 100, city:New York, \
                 state:NY, country:USA, postal:10001}}], communications:[Comm{{type:Email, contact:alice@example.com}}]}}",
                FIXTURE_MILLIS
            )
        );
    }

    #[test]
    fn test_render_completeness_vendor() {
        let factory = isolated_factory();
        let mut vendor = PartyFixtures::vendor(&factory);
        vendor.add_address(
            TestAddressBuilder::new()
                .with_type("Ship_To")
                .with_line1("321 Supply Rd")
                .with_city("Fremont")
                .with_postal_code("94536")
                .build(&factory),
        );

        assert_renders_completely(&vendor);
        assert_contains_in_order(
            &vendor.to_string(),
            &["city:San Jose", "city:Fremont", "type:Fax", "contact:support@techsupplies.com"],
        );
    }

    #[test]
    fn test_render_is_stable() {
        let factory = isolated_factory();
        let party = PartyFixtures::vendor(&factory);
        assert_eq!(party.to_string(), party.to_string());
    }
}
