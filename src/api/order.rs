use crate::client::{current_timestamp, PayClient};
use crate::crypto::canonical::string_to_sign;
use crate::crypto::fields::FieldSet;
use crate::crypto::nonce::random_nonce;
use crate::crypto::sign::{compute_signature, SignatureScheme};
use crate::error::PayError;
use crate::model::order::{
    CreateOrderRequest, CreateOrderResponse, JsapiPayParams, QueryOrderRequest, QueryOrderResponse,
};

impl PayClient {
    /// Initiate payment.
    ///
    /// POST /pay/unifiedorder
    pub async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, PayError> {
        self.post_xml("/pay/unifiedorder", req).await
    }

    /// Query an order by transaction id or merchant trade no.
    ///
    /// POST /pay/orderquery
    pub async fn query_order(
        &self,
        req: &QueryOrderRequest,
    ) -> Result<QueryOrderResponse, PayError> {
        self.post_xml("/pay/orderquery", req).await
    }

    /// Build JSAPI payment invocation parameters from a prepay_id.
    ///
    /// The returned `JsapiPayParams` can be sent to the frontend to invoke
    /// payment; the signature is the legacy MD5 scheme over the camelCase
    /// parameter names.
    pub fn jsapi_pay_params(
        &self,
        app_id: &str,
        prepay_id: &str,
    ) -> Result<JsapiPayParams, PayError> {
        let time_stamp = current_timestamp().to_string();
        let nonce_str = random_nonce(&mut rand::thread_rng());
        let package = format!("prepay_id={prepay_id}");
        let scheme = SignatureScheme::Md5;

        let fields = FieldSet::new()
            .field("appId", app_id)
            .field("timeStamp", &time_stamp)
            .field("nonceStr", &nonce_str)
            .field("package", &package)
            .field("signType", scheme.wire_name());
        let (canonical, _) = string_to_sign(&fields, &self.credential.secret);
        let pay_sign = compute_signature(scheme, &canonical, &self.credential)?;

        Ok(JsapiPayParams {
            app_id: app_id.to_string(),
            time_stamp,
            nonce_str,
            package,
            sign_type: scheme.wire_name().to_string(),
            pay_sign,
        })
    }
}
