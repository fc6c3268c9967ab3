/// One declared wire field of a legacy request.
///
/// `name` is the wire key, not the Rust field name. A field flagged
/// `omit_if_empty` is dropped from both the signature and the XML body when
/// its value is empty; a field flagged `skip_signing` stays on the wire but
/// never enters the canonical string. The literal name `sign` is always
/// excluded from signing regardless of flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
    pub omit_if_empty: bool,
    pub skip_signing: bool,
}

/// The ordered field list a request declares, built explicitly per request
/// kind. Declaration order is preserved for the XML body; the canonical
/// string sorts independently, so order never affects the signature.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// A required field, serialized and signed even when empty.
    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            name,
            value: value.into(),
            omit_if_empty: false,
            skip_signing: false,
        });
        self
    }

    /// An optional field, dropped entirely when its value is empty.
    pub fn field_opt(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            name,
            value: value.into(),
            omit_if_empty: true,
            skip_signing: false,
        });
        self
    }

    /// A required numeric field, stringified in base-10 decimal.
    pub fn field_i64(self, name: &'static str, value: i64) -> Self {
        self.field(name, value.to_string())
    }

    /// An optional numeric field, dropped when zero.
    pub fn field_i64_opt(mut self, name: &'static str, value: i64) -> Self {
        let value = if value == 0 {
            String::new()
        } else {
            value.to_string()
        };
        self.fields.push(Field {
            name,
            value,
            omit_if_empty: true,
            skip_signing: false,
        });
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The `(name, value)` pairs that participate in signing: exclusions and
    /// omissions applied, declaration order preserved.
    pub fn signable_pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter(|f| !f.skip_signing && f.name != "sign")
            .filter(|f| !(f.omit_if_empty && f.value.is_empty()))
            .map(|f| (f.name, f.value.as_str()))
            .collect()
    }

    /// The pairs that go on the wire: omissions applied, nothing else.
    pub fn wire_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|f| !(f.omit_if_empty && f.value.is_empty()))
            .map(|f| (f.name, f.value.as_str()))
    }

    /// The surviving `sign_type` value, if any. Inspected by the canonical
    /// builder to select the symmetric scheme.
    pub fn sign_type(&self) -> Option<&str> {
        self.signable_pairs()
            .into_iter()
            .find(|(name, _)| *name == "sign_type")
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omit_if_empty_drops_empty_values() {
        let fields = FieldSet::new()
            .field("appid", "A")
            .field_opt("device_info", "")
            .field_opt("attach", "memo");
        let pairs = fields.signable_pairs();
        assert_eq!(pairs, vec![("appid", "A"), ("attach", "memo")]);
    }

    #[test]
    fn test_required_empty_value_is_kept() {
        let fields = FieldSet::new().field("body", "");
        assert_eq!(fields.signable_pairs(), vec![("body", "")]);
    }

    #[test]
    fn test_sign_is_always_excluded_from_signing() {
        let mut fields = FieldSet::new().field("appid", "A");
        fields.push(Field {
            name: "sign",
            value: "SHOULD_NOT_APPEAR".into(),
            omit_if_empty: false,
            skip_signing: false,
        });
        assert_eq!(fields.signable_pairs(), vec![("appid", "A")]);
        // still present on the wire
        assert_eq!(fields.wire_pairs().count(), 2);
    }

    #[test]
    fn test_skip_signing_field_stays_on_wire() {
        let mut fields = FieldSet::new().field("appid", "A");
        fields.push(Field {
            name: "echo",
            value: "x".into(),
            omit_if_empty: false,
            skip_signing: true,
        });
        assert_eq!(fields.signable_pairs(), vec![("appid", "A")]);
        let wire: Vec<_> = fields.wire_pairs().collect();
        assert_eq!(wire, vec![("appid", "A"), ("echo", "x")]);
    }

    #[test]
    fn test_numeric_fields_are_base10() {
        let fields = FieldSet::new()
            .field_i64("total_fee", 100)
            .field_i64_opt("offset", 0)
            .field_i64_opt("coupon_fee", 25);
        let pairs = fields.signable_pairs();
        assert_eq!(pairs, vec![("total_fee", "100"), ("coupon_fee", "25")]);
    }

    #[test]
    fn test_required_zero_is_kept() {
        let fields = FieldSet::new().field_i64("total_fee", 0);
        assert_eq!(fields.signable_pairs(), vec![("total_fee", "0")]);
    }

    #[test]
    fn test_sign_type_detection() {
        let fields = FieldSet::new()
            .field("appid", "A")
            .field_opt("sign_type", "HMAC-SHA256");
        assert_eq!(fields.sign_type(), Some("HMAC-SHA256"));

        let omitted = FieldSet::new().field("appid", "A").field_opt("sign_type", "");
        assert_eq!(omitted.sign_type(), None);
    }
}
