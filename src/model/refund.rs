use serde::Deserialize;

use super::LegacyRequest;
use crate::crypto::fields::FieldSet;

#[derive(Debug, Clone, Default)]
pub struct RefundOrderRequest {
    pub app_id: String,    // required
    pub sign_type: String, // optional, either MD5 (default) or HMAC-SHA256
    // either transaction_id or out_trade_no is required
    pub transaction_id: String,
    pub out_trade_no: String,
    pub out_refund_no: String,   // required, max length is 64
    pub total_fee: i64,          // required, in cents
    pub refund_fee: i64,         // required, in cents
    pub refund_fee_type: String, // optional, defaults to CNY
    pub refund_desc: String,     // optional
    pub refund_account: String,  // optional
    pub notify_url: String,      // optional
}

impl LegacyRequest for RefundOrderRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        FieldSet::new()
            .field("appid", &self.app_id)
            .field("mch_id", mch_id)
            .field_opt("sign_type", &self.sign_type)
            .field_opt("transaction_id", &self.transaction_id)
            .field_opt("out_trade_no", &self.out_trade_no)
            .field("out_refund_no", &self.out_refund_no)
            .field_i64("total_fee", self.total_fee)
            .field_i64("refund_fee", self.refund_fee)
            .field_opt("refund_fee_type", &self.refund_fee_type)
            .field_opt("refund_desc", &self.refund_desc)
            .field_opt("refund_account", &self.refund_account)
            .field_opt("notify_url", &self.notify_url)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefundOrderResponse {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub mch_id: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub out_trade_no: String,
    #[serde(default)]
    pub out_refund_no: String,
    #[serde(default)]
    pub refund_id: String,
    #[serde(default)]
    pub refund_fee: i64,
    #[serde(default)]
    pub settlement_refund_fee: i64,
    #[serde(default)]
    pub total_fee: i64,
    #[serde(default)]
    pub settlement_total_fee: i64,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub cash_fee: i64,
    #[serde(default)]
    pub cash_fee_type: String,
    #[serde(default)]
    pub cash_refund_fee: i64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryRefundRequest {
    pub app_id: String, // required
    // one of transaction_id, out_trade_no, out_refund_no or refund_id is required
    pub transaction_id: String,
    pub out_trade_no: String,
    pub out_refund_no: String,
    pub refund_id: String,
    pub offset: i64, // optional
}

impl LegacyRequest for QueryRefundRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        FieldSet::new()
            .field("appid", &self.app_id)
            .field("mch_id", mch_id)
            .field_opt("transaction_id", &self.transaction_id)
            .field_opt("out_trade_no", &self.out_trade_no)
            .field_opt("out_refund_no", &self.out_refund_no)
            .field_opt("refund_id", &self.refund_id)
            .field_i64_opt("offset", self.offset)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRefundResponse {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub mch_id: String,
    #[serde(default)]
    pub total_refund_count: i64,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub out_trade_no: String,
    #[serde(default)]
    pub total_fee: i64,
    #[serde(default)]
    pub settlement_total_fee: i64,
    #[serde(default)]
    pub fee_type: String,
    #[serde(default)]
    pub cash_fee: i64,
    #[serde(default)]
    pub refund_count: i64,
    #[serde(default)]
    pub out_refund_no_0: String,
    #[serde(default)]
    pub refund_id_0: String,
    #[serde(default)]
    pub refund_channel_0: String,
    #[serde(default)]
    pub refund_fee_0: i64,
    #[serde(default)]
    pub refund_fee: i64,
    #[serde(default)]
    pub coupon_refund_fee: i64,
    #[serde(default)]
    pub settlement_refund_fee_0: i64,
    #[serde(default)]
    pub refund_status_0: String,
    #[serde(default)]
    pub refund_account_0: String,
    #[serde(default)]
    pub refund_recv_accout_0: String,
    #[serde(default)]
    pub refund_success_time_0: String,
    #[serde(default)]
    pub cash_refund_fee: i64,
}

impl QueryRefundResponse {
    /// Whether the first refund record is settled. Only meaningful on a
    /// response the classifier already accepted.
    pub fn refunded(&self) -> bool {
        self.refund_status_0 == "SUCCESS"
    }
}
