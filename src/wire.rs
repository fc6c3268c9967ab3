use quick_xml::escape::escape;
use serde::de::DeserializeOwned;

use crate::crypto::fields::FieldSet;
use crate::error::PayError;

/// Emit the legacy XML request body from a field set plus the computed
/// signature. Fields keep their declaration order; `sign` always goes last.
pub(crate) fn xml_body(fields: &FieldSet, sign: &str) -> String {
    let mut out = String::from("<xml>");
    for (name, value) in fields.wire_pairs() {
        push_element(&mut out, name, value);
    }
    push_element(&mut out, "sign", sign);
    out.push_str("</xml>");
    out
}

fn push_element(out: &mut String, name: &str, value: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&escape(value));
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Decode a legacy XML response body. Unknown elements are ignored and
/// absent ones take their zero value, so the same body can be decoded both
/// as a status envelope and as a typed payload.
pub(crate) fn from_xml<T: DeserializeOwned>(body: &str) -> Result<T, PayError> {
    quick_xml::de::from_str(body).map_err(PayError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_xml_body_order_and_sign_placement() {
        let fields = FieldSet::new()
            .field("appid", "A")
            .field("mch_id", "M")
            .field_opt("device_info", "")
            .field_i64("total_fee", 100);
        let body = xml_body(&fields, "SIG");
        assert_eq!(
            body,
            "<xml><appid>A</appid><mch_id>M</mch_id><total_fee>100</total_fee><sign>SIG</sign></xml>"
        );
    }

    #[test]
    fn test_xml_body_escapes_values() {
        let fields = FieldSet::new().field("desc", "a&b <c>");
        let body = xml_body(&fields, "S");
        assert_eq!(
            body,
            "<xml><desc>a&amp;b &lt;c&gt;</desc><sign>S</sign></xml>"
        );
    }

    #[test]
    fn test_from_xml_typed_payload() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default)]
            prepay_id: String,
            #[serde(default)]
            total_fee: i64,
        }
        let payload: Payload = from_xml(
            "<xml><return_code><![CDATA[SUCCESS]]></return_code>\
             <prepay_id><![CDATA[wx20091234567890]]></prepay_id>\
             <total_fee>100</total_fee></xml>",
        )
        .unwrap();
        assert_eq!(payload.prepay_id, "wx20091234567890");
        assert_eq!(payload.total_fee, 100);
    }

    #[test]
    fn test_from_xml_missing_fields_default() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default)]
            prepay_id: String,
        }
        let payload: Payload = from_xml("<xml></xml>").unwrap();
        assert_eq!(payload.prepay_id, "");
    }

    #[test]
    fn test_from_xml_rejects_garbage() {
        #[derive(Deserialize)]
        struct Payload {}
        let result: Result<Payload, _> = from_xml("this is not xml at all <");
        assert!(result.is_err());
    }
}
