use crate::client::PayClient;
use crate::error::PayError;
use crate::model::refund::{
    QueryRefundRequest, QueryRefundResponse, RefundOrderRequest, RefundOrderResponse,
};

impl PayClient {
    /// Initiate a refund. The merchant certificate must be configured: the
    /// endpoint requires the TLS client identity.
    ///
    /// POST /secapi/pay/refund
    pub async fn refund_order(
        &self,
        req: &RefundOrderRequest,
    ) -> Result<RefundOrderResponse, PayError> {
        self.post_xml("/secapi/pay/refund", req).await
    }

    /// Query a refund by any of its identifiers.
    ///
    /// POST /pay/refundquery
    pub async fn query_refund(
        &self,
        req: &QueryRefundRequest,
    ) -> Result<QueryRefundResponse, PayError> {
        self.post_xml("/pay/refundquery", req).await
    }
}
