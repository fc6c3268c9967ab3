pub mod envelope;
pub mod order;
pub mod refund;
pub mod transfer;
pub mod transfer_batch;

use crate::crypto::fields::FieldSet;

/// A legacy request declares its wire fields explicitly, as a deterministic
/// ordered list. The client appends `nonce_str`, signs, and serializes;
/// there is no runtime inspection of the request type.
pub(crate) trait LegacyRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet;
}
