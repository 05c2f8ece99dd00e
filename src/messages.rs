//! Request payloads carried by each bus subject. Field names are
//! capitalized to match the reference service's JSON wire format.

use serde::Deserialize;

use crate::domain::{AccountId, Uid};
use crate::money::Cents;

#[derive(Debug, Deserialize)]
pub struct CreditRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Account")]
    pub account: AccountId,
    #[serde(rename = "Amount")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct DebitRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Account")]
    pub account: AccountId,
    #[serde(rename = "Amount")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Src")]
    pub src: AccountId,
    #[serde(rename = "Dst")]
    pub dst: AccountId,
    #[serde(rename = "Amount")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct AcquireRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Account")]
    pub account: AccountId,
    #[serde(rename = "Amount")]
    pub amount: Cents,
}

#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Account")]
    pub account: AccountId,
}

#[derive(Debug, Deserialize)]
pub struct RollbackRequest {
    #[serde(rename = "Uid")]
    pub uid: Uid,
    #[serde(rename = "Account")]
    pub account: AccountId,
}
