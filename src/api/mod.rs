pub mod order;
pub mod refund;
pub mod transfer;
pub mod transfer_batch;
