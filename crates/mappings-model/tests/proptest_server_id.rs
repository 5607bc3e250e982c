use mappings_model::{expand_versions, ServerId, SERVER_ID_MAX_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_ids_round_trip(id in "[a-z0-9]{1,64}") {
        let parsed = ServerId::parse(&id).expect("id within charset and length");
        prop_assert_eq!(parsed.as_str(), id.as_str());
    }

    #[test]
    fn overlong_ids_are_rejected(id in "[a-z0-9]{65,96}") {
        prop_assert!(id.len() > SERVER_ID_MAX_LEN);
        prop_assert!(ServerId::parse(&id).is_err());
    }

    #[test]
    fn ids_with_forbidden_chars_are_rejected(id in "[a-z0-9]{0,8}[A-Z_. -][a-z0-9]{0,8}") {
        prop_assert!(ServerId::parse(&id).is_err());
    }

    #[test]
    fn expansion_output_is_duplicate_free(
        versions in proptest::collection::vec("1\\.(8|9|12|19)(\\.[0-9])?", 0..12)
    ) {
        let expanded = expand_versions(&versions).expect("no wildcards present");
        let mut seen = std::collections::BTreeSet::new();
        for v in &expanded {
            prop_assert!(seen.insert(v.clone()), "duplicate {} in expansion", v);
        }
    }
}
