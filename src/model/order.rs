use serde::{Deserialize, Serialize};

use super::LegacyRequest;
use crate::crypto::fields::FieldSet;

#[derive(Debug, Clone, Default)]
pub struct CreateOrderRequest {
    pub app_id: String,           // required
    pub device_info: String,      // optional
    pub sign_type: String,        // optional, either MD5 (default) or HMAC-SHA256
    pub body: String,             // required, max length is 127
    pub detail: String,           // optional, max length is 6000
    pub attach: String,           // optional, max length is 127
    pub out_trade_no: String,     // required, max length is 32, min length is 6
    pub fee_type: String,         // optional, defaults to CNY
    pub total_fee: i64,           // required, in cents
    pub spbill_create_ip: String, // required, user's ip address
    pub time_start: String,       // optional, UTC+8 compact form yyyyMMddHHmmss
    pub time_expire: String,      // optional, UTC+8 compact form yyyyMMddHHmmss
    pub goods_tag: String,        // optional, max length is 32
    pub notify_url: String,       // required, max length is 256
    pub trade_type: String,       // required, can be JSAPI, NATIVE, APP
    pub product_id: String,       // required if trade_type == NATIVE
    pub limit_pay: String,        // optional, set to no_credit to disallow credit cards
    pub open_id: String,          // required if trade_type == JSAPI
    pub receipt: String,          // optional, set to Y to enable receipt
    pub profit_sharing: String,   // optional, either Y or N (default)
    pub scene_info: String,       // optional
}

impl LegacyRequest for CreateOrderRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        FieldSet::new()
            .field("appid", &self.app_id)
            .field("mch_id", mch_id)
            .field_opt("device_info", &self.device_info)
            .field_opt("sign_type", &self.sign_type)
            .field("body", &self.body)
            .field_opt("detail", &self.detail)
            .field_opt("attach", &self.attach)
            .field("out_trade_no", &self.out_trade_no)
            .field_opt("fee_type", &self.fee_type)
            .field_i64("total_fee", self.total_fee)
            .field("spbill_create_ip", &self.spbill_create_ip)
            .field_opt("time_start", &self.time_start)
            .field_opt("time_expire", &self.time_expire)
            .field_opt("goods_tag", &self.goods_tag)
            .field("notify_url", &self.notify_url)
            .field("trade_type", &self.trade_type)
            .field_opt("product_id", &self.product_id)
            .field_opt("limit_pay", &self.limit_pay)
            .field_opt("openid", &self.open_id)
            .field_opt("receipt", &self.receipt)
            .field_opt("profit_sharing", &self.profit_sharing)
            .field_opt("scene_info", &self.scene_info)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub mch_appid: String,
    #[serde(default)]
    pub mchid: String,
    #[serde(default)]
    pub device_info: String,
    #[serde(default)]
    pub trade_type: String,
    #[serde(default)]
    pub prepay_id: String,
    #[serde(default)]
    pub code_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct QueryOrderRequest {
    pub app_id: String, // required
    // either transaction_id or out_trade_no is required
    pub transaction_id: String,
    pub out_trade_no: String,
}

impl LegacyRequest for QueryOrderRequest {
    fn wire_fields(&self, mch_id: &str) -> FieldSet {
        FieldSet::new()
            .field("appid", &self.app_id)
            .field("mch_id", mch_id)
            .field_opt("transaction_id", &self.transaction_id)
            .field_opt("out_trade_no", &self.out_trade_no)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryOrderResponse {
    #[serde(default)]
    pub appid: String,
    #[serde(default)]
    pub mch_id: String,
    #[serde(default)]
    pub device_info: String,
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub is_subscribe: String,
    #[serde(default)]
    pub trade_type: String,
    #[serde(default)]
    pub trade_state: String,
    #[serde(default)]
    pub bank_type: String,
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
    pub coupon_fee: i64,
    #[serde(default)]
    pub coupon_count: i64,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub out_trade_no: String,
    #[serde(default)]
    pub attach: String,
    #[serde(default)]
    pub time_end: String,
    #[serde(default)]
    pub trade_state_desc: String,
}

impl QueryOrderResponse {
    /// Whether the order is successfully paid. Only meaningful on a response
    /// the classifier already accepted; a pending trade state is not paid.
    pub fn paid(&self) -> bool {
        self.trade_state == "SUCCESS"
    }
}

/// Payment invocation parameters for the JSAPI frontend, signed locally with
/// the legacy MD5 scheme.
#[derive(Debug, Clone, Serialize)]
pub struct JsapiPayParams {
    #[serde(rename = "appId")]
    pub app_id: String,
    #[serde(rename = "timeStamp")]
    pub time_stamp: String,
    #[serde(rename = "nonceStr")]
    pub nonce_str: String,
    pub package: String,
    #[serde(rename = "signType")]
    pub sign_type: String,
    #[serde(rename = "paySign")]
    pub pay_sign: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_wire_fields() {
        let req = CreateOrderRequest {
            app_id: "wxA".into(),
            body: "test".into(),
            out_trade_no: "T100".into(),
            total_fee: 1,
            spbill_create_ip: "127.0.0.1".into(),
            notify_url: "http://localhost/".into(),
            trade_type: "NATIVE".into(),
            product_id: "P1".into(),
            ..Default::default()
        };
        let binding = req.wire_fields("1900000001");
        let pairs = binding.signable_pairs();
        assert_eq!(
            pairs,
            vec![
                ("appid", "wxA"),
                ("mch_id", "1900000001"),
                ("body", "test"),
                ("out_trade_no", "T100"),
                ("total_fee", "1"),
                ("spbill_create_ip", "127.0.0.1"),
                ("notify_url", "http://localhost/"),
                ("trade_type", "NATIVE"),
                ("product_id", "P1"),
            ]
        );
    }

    #[test]
    fn test_query_order_omits_absent_identifiers() {
        let req = QueryOrderRequest {
            app_id: "wxA".into(),
            out_trade_no: "T100".into(),
            ..Default::default()
        };
        let binding = req.wire_fields("M");
        let pairs = binding.signable_pairs();
        assert_eq!(
            pairs,
            vec![("appid", "wxA"), ("mch_id", "M"), ("out_trade_no", "T100")]
        );
    }

    #[test]
    fn test_paid_requires_success_trade_state() {
        let mut resp = QueryOrderResponse {
            trade_state: "NOTPAY".into(),
            ..Default::default()
        };
        assert!(!resp.paid());
        resp.trade_state = "SUCCESS".into();
        assert!(resp.paid());
    }

    #[test]
    fn test_create_order_response_from_xml() {
        let body = "<xml>\
            <return_code><![CDATA[SUCCESS]]></return_code>\
            <result_code><![CDATA[SUCCESS]]></result_code>\
            <trade_type><![CDATA[NATIVE]]></trade_type>\
            <prepay_id><![CDATA[wx201410272009395522657a690389285100]]></prepay_id>\
            <code_url><![CDATA[weixin://wxpay/bizpayurl?pr=abc]]></code_url>\
            </xml>";
        let resp: CreateOrderResponse = crate::wire::from_xml(body).unwrap();
        assert_eq!(resp.prepay_id, "wx201410272009395522657a690389285100");
        assert_eq!(resp.code_url, "weixin://wxpay/bizpayurl?pr=abc");
    }
}
