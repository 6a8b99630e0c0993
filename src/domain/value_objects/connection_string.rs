//! IoT Hub connection string value object
//!
//! Format: `Field=value;Field=value;...`. Values may themselves contain `=`
//! (base64 keys), so each segment splits on its first `=` only. When a field
//! appears more than once, the first occurrence wins.

/// Parsed `;`-delimited connection string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectionString {
    fields: Vec<(String, String)>,
}

impl ConnectionString {
    pub fn parse(input: &str) -> Self {
        let fields = input
            .split(';')
            .filter_map(|segment| segment.split_once('='))
            .map(|(name, value)| (name.trim().to_string(), value.to_string()))
            .collect();
        Self { fields }
    }

    /// First value for `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Hub name: the first label of `HostName`.
    ///
    /// A host name without a dot yields `None`.
    pub fn hub_name(&self) -> Option<&str> {
        self.field("HostName")
            .and_then(|host| host.split_once('.'))
            .map(|(name, _)| name)
    }

    pub fn shared_access_key_name(&self) -> Option<&str> {
        self.field("SharedAccessKeyName")
    }

    pub fn shared_access_key(&self) -> Option<&str> {
        self.field("SharedAccessKey")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "HostName=myhub.azure-devices.net;SharedAccessKeyName=iothubowner;SharedAccessKey=abc+def/ghi=";

    #[test]
    fn extracts_hub_fields() {
        let cs = ConnectionString::parse(SAMPLE);
        assert_eq!(cs.hub_name(), Some("myhub"));
        assert_eq!(cs.shared_access_key_name(), Some("iothubowner"));
        assert_eq!(cs.shared_access_key(), Some("abc+def/ghi="));
    }

    #[test]
    fn key_name_does_not_shadow_key() {
        let cs = ConnectionString::parse("HostName=h.net;SharedAccessKeyName=owner");
        assert_eq!(cs.shared_access_key(), None);
        assert_eq!(cs.shared_access_key_name(), Some("owner"));
    }

    #[test]
    fn first_occurrence_wins() {
        let cs = ConnectionString::parse("HostName=first.net;HostName=second.net");
        assert_eq!(cs.hub_name(), Some("first"));
    }

    #[test]
    fn host_without_dot_has_no_hub_name() {
        let cs = ConnectionString::parse("HostName=localhost");
        assert_eq!(cs.hub_name(), None);
    }

    #[test]
    fn trailing_separator_and_garbage_segments() {
        let cs = ConnectionString::parse("garbage;SharedAccessKey=k==;");
        assert_eq!(cs.shared_access_key(), Some("k=="));
        assert_eq!(cs.field("garbage"), None);
    }

    #[test]
    fn empty_input_has_no_fields() {
        let cs = ConnectionString::parse("");
        assert_eq!(cs, ConnectionString::default());
        assert_eq!(cs.hub_name(), None);
    }
}
