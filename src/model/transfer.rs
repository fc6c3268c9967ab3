use serde::Deserialize;

use super::LegacyRequest;
use crate::crypto::fields::FieldSet;
use crate::time::GatewayTime;

/// Transfer money to a user. This endpoint predates the shared field naming
/// convention: the app id travels as `mch_appid` and the merchant id as
/// `mchid`.
#[derive(Debug, Clone, Default)]
pub struct TransferRequest {
    pub app_id: String,           // required
    pub open_id: String,          // required
    pub device_info: String,      // optional
    pub partner_trade_no: String, // required
    pub check_name: String,       // optional, either NO_CHECK (default) or FORCE_CHECK
    pub re_user_name: String,     // required if check_name is FORCE_CHECK
    pub amount: i64,              // required, in cents, minimum 100
    pub desc: String,             // required
    pub spbill_create_ip: String, // optional, user's IP address
}

impl LegacyRequest for TransferRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        let check_name = if self.check_name.is_empty() {
            "NO_CHECK"
        } else {
            &self.check_name
        };
        FieldSet::new()
            .field("mch_appid", &self.app_id)
            .field("mchid", mch_id)
            .field_opt("device_info", &self.device_info)
            .field("partner_trade_no", &self.partner_trade_no)
            .field("openid", &self.open_id)
            .field("check_name", check_name)
            .field_opt("re_user_name", &self.re_user_name)
            .field_i64("amount", self.amount)
            .field("desc", &self.desc)
            .field_opt("spbill_create_ip", &self.spbill_create_ip)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub mch_appid: String,
    #[serde(default)]
    pub mchid: String,
    #[serde(default)]
    pub device_info: String,
    #[serde(default)]
    pub partner_trade_no: String,
    #[serde(default)]
    pub payment_no: String,
    #[serde(default)]
    pub payment_time: Option<GatewayTime>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryTransferRequest {
    pub app_id: String,           // required
    pub partner_trade_no: String, // required
}

impl LegacyRequest for QueryTransferRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        FieldSet::new()
            .field("appid", &self.app_id)
            .field("mch_id", mch_id)
            .field("partner_trade_no", &self.partner_trade_no)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryTransferResponse {
    #[serde(default)]
    pub partner_trade_no: String,
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub mch_id: String,
    #[serde(default)]
    pub detail_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub transfer_name: String,
    #[serde(default)]
    pub payment_amount: i64,
    #[serde(default)]
    pub transfer_time: Option<GatewayTime>,
    #[serde(default)]
    pub desc: String,
}

impl QueryTransferResponse {
    /// Whether the transfer reached the user. Only meaningful on a response
    /// the classifier already accepted.
    pub fn settled(&self) -> bool {
        self.status == "SUCCESS"
    }
}
