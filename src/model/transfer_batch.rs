use serde::{Deserialize, Serialize};

/// Initiate a batch of transfers over the modern JSON protocol. The
/// merchant id travels in the Authorization header, not the body.
#[derive(Debug, Clone, Serialize)]
pub struct TransferBatchRequest {
    pub appid: String,
    pub out_batch_no: String,
    pub batch_name: String,
    pub batch_remark: String,
    /// Total amount of the batch in cents; must equal the sum of the details.
    pub total_amount: i64,
    pub total_num: i32,
    pub transfer_detail_list: Vec<TransferDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferDetail {
    pub out_detail_no: String,
    pub transfer_amount: i64,
    pub transfer_remark: String,
    pub openid: String,
    /// Real name of the payee; required for amounts of 2000 CNY and above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferBatchResponse {
    pub out_batch_no: String,
    pub batch_id: String,
    /// RFC 3339 timestamp, passed through as received.
    #[serde(default)]
    pub create_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryTransferBatchResponse {
    pub transfer_batch: TransferBatchInfo,
    #[serde(default)]
    pub transfer_detail_list: Option<Vec<TransferDetailStatus>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferBatchInfo {
    pub mchid: String,
    pub out_batch_no: String,
    pub batch_id: String,
    #[serde(default)]
    pub appid: String,
    pub batch_status: String,
    #[serde(default)]
    pub batch_type: String,
    #[serde(default)]
    pub batch_name: String,
    #[serde(default)]
    pub batch_remark: String,
    #[serde(default)]
    pub close_reason: Option<String>,
    pub total_amount: i64,
    pub total_num: i32,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub success_amount: Option<i64>,
    #[serde(default)]
    pub success_num: Option<i32>,
    #[serde(default)]
    pub fail_amount: Option<i64>,
    #[serde(default)]
    pub fail_num: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferDetailStatus {
    pub detail_id: String,
    pub out_detail_no: String,
    pub detail_status: String,
}
