//! Name and connection string properties

use armdeploy::domain::value_objects::{is_valid_resource_group_name, ConnectionString};
use proptest::prelude::*;

proptest! {
    #[test]
    fn well_formed_group_names_are_accepted(name in "[a-z0-9_.-]{0,20}[a-z0-9_-]") {
        prop_assert!(is_valid_resource_group_name(&name));
    }

    #[test]
    fn trailing_period_is_rejected(name in "[a-z0-9_.-]{0,20}") {
        let with_period = format!("{name}.");
        prop_assert!(!is_valid_resource_group_name(&with_period));
    }

    #[test]
    fn uppercase_is_rejected(prefix in "[a-z0-9]{0,8}", upper in "[A-Z]", suffix in "[a-z0-9]{0,8}") {
        let name = format!("{prefix}{upper}{suffix}");
        prop_assert!(!is_valid_resource_group_name(&name));
    }

    #[test]
    fn connection_string_fields_survive_base64_keys(
        hub in "[a-z][a-z0-9-]{0,15}",
        key in "[A-Za-z0-9+/]{4,40}={0,2}",
    ) {
        let raw = format!(
            "HostName={hub}.azure-devices.net;SharedAccessKeyName=iothubowner;SharedAccessKey={key}"
        );
        let parsed = ConnectionString::parse(&raw);

        prop_assert_eq!(parsed.hub_name(), Some(hub.as_str()));
        prop_assert_eq!(parsed.shared_access_key_name(), Some("iothubowner"));
        prop_assert_eq!(parsed.shared_access_key(), Some(key.as_str()));
    }

    #[test]
    fn connection_string_parse_never_panics(raw in any::<String>()) {
        let parsed = ConnectionString::parse(&raw);
        let _ = parsed.hub_name();
    }
}
