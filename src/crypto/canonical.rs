use super::fields::FieldSet;
use super::sign::SignatureScheme;

/// Build the canonical string-to-sign for the legacy protocol and report the
/// scheme the request selected.
///
/// Algorithm: take the signable pairs, sort byte-wise lexicographically by
/// name, join as `name=value` with `&`, then append `&key=<secret>` (no
/// leading `&` when the field part is empty). The output is deterministic
/// for a fixed field mapping, which the gateway relies on to recompute the
/// same signature.
///
/// A surviving `sign_type` field selects the scheme but still participates
/// in the canonical string like any other field.
pub fn string_to_sign(fields: &FieldSet, secret: &str) -> (String, SignatureScheme) {
    let scheme = SignatureScheme::from_sign_type(fields.sign_type());

    let mut pairs = fields.signable_pairs();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (name, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(value);
    }
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str("key=");
    out.push_str(secret);

    (out, scheme)
}
