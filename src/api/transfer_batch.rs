use crate::client::{encode_path_segment, PayClient};
use crate::error::PayError;
use crate::model::transfer_batch::{
    QueryTransferBatchResponse, TransferBatchRequest, TransferBatchResponse,
};

impl PayClient {
    /// Initiate a batch of transfers over the modern protocol. Requires the
    /// merchant certificate for the Authorization header signature.
    ///
    /// POST /v3/transfer/batches
    pub async fn create_transfer_batch(
        &self,
        req: &TransferBatchRequest,
    ) -> Result<TransferBatchResponse, PayError> {
        self.post_json("/v3/transfer/batches", req).await
    }

    /// Query a transfer batch by merchant batch no.
    ///
    /// GET /v3/transfer/batches/out-batch-no/{out_batch_no}
    pub async fn query_transfer_batch(
        &self,
        out_batch_no: &str,
        need_query_detail: bool,
    ) -> Result<QueryTransferBatchResponse, PayError> {
        let path = format!(
            "/v3/transfer/batches/out-batch-no/{}?need_query_detail={}",
            encode_path_segment(out_batch_no),
            need_query_detail
        );
        self.get_json(&path).await
    }
}
