use crate::client::PayClient;
use crate::error::PayError;
use crate::model::transfer::{
    QueryTransferRequest, QueryTransferResponse, TransferRequest, TransferResponse,
};

impl PayClient {
    /// Transfer money to a user. Requires the merchant certificate for the
    /// TLS client identity.
    ///
    /// POST /mmpaymkttransfers/promotion/transfers
    pub async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, PayError> {
        self.post_xml("/mmpaymkttransfers/promotion/transfers", req)
            .await
    }

    /// Query a transfer by merchant trade no.
    ///
    /// POST /mmpaymkttransfers/gettransferinfo
    pub async fn query_transfer(
        &self,
        req: &QueryTransferRequest,
    ) -> Result<QueryTransferResponse, PayError> {
        self.post_xml("/mmpaymkttransfers/gettransferinfo", req)
            .await
    }
}
