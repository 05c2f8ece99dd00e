//! Request dispatcher: binds the six bus subjects to banker operations,
//! joins a shared queue group per subject, decodes/encodes JSON payloads,
//! and isolates handler panics from the reply path.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_nats::Client;
use futures::{FutureExt, StreamExt};
use tokio::task::JoinSet;

use crate::banker::Banker;
use crate::domain::StatusResponse;
use crate::messages::{
    AcquireRequest, CommitRequest, CreditRequest, DebitRequest, RollbackRequest, TransferRequest,
};
use crate::status::map_result;

const SUBJECTS: &[&str] = &[
    "bank.credit",
    "bank.debit",
    "bank.transfer",
    "bank.acquire",
    "bank.commit",
    "bank.rollback",
];

/// Subscribes to all six subjects in their own queue group (queue group
/// name == subject name) and spawns one task per inbound message so a
/// handler panic cannot take down the listener loop. Returns a `JoinSet`
/// the caller awaits on shutdown to drain in-flight handlers.
pub async fn subscribe_all(
    client: Client,
    banker: Arc<dyn Banker>,
) -> Result<JoinSet<()>, async_nats::Error> {
    let mut tasks = JoinSet::new();

    for &subject in SUBJECTS {
        let mut subscription = client.queue_subscribe(subject, subject.to_string()).await?;
        let client = client.clone();
        let banker = banker.clone();

        tasks.spawn(async move {
            let mut handlers = JoinSet::new();

            while let Some(message) = subscription.next().await {
                let Some(reply) = message.reply.clone() else {
                    tracing::warn!(subject, "request had no reply subject; dropping");
                    continue;
                };

                let client = client.clone();
                let banker = banker.clone();
                let payload = message.payload.clone();

                handlers.spawn(async move {
                    handle_one(client, banker, subject, &payload, reply).await;
                });
            }

            // `client.drain()` unsubscribes and ends the message stream above;
            // let handlers already in flight finish before this listener exits.
            while handlers.join_next().await.is_some() {}
        });
    }

    Ok(tasks)
}

/// Runs a single request to completion behind a panic guard. On panic, no
/// reply is published: the caller must treat a timeout as "outcome
/// unknown", never as success.
async fn handle_one(
    client: Client,
    banker: Arc<dyn Banker>,
    subject: &'static str,
    payload: &[u8],
    reply: async_nats::Subject,
) {
    let outcome = AssertUnwindSafe(dispatch(banker, subject, payload))
        .catch_unwind()
        .await;

    let status = match outcome {
        Ok(status) => status,
        Err(panic) => {
            tracing::error!(subject, panic = ?panic_message(&panic), "handler panicked; not replying");
            return;
        }
    };

    let body = match serde_json::to_vec(&StatusResponse::new(status)) {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(subject, error = %err, "failed to encode response");
            return;
        }
    };

    if let Err(err) = client.publish(reply, body.into()).await {
        tracing::error!(subject, error = %err, "failed to publish response");
    }
}

/// Decodes the request for `subject` and invokes the matching banker
/// operation, returning the status to publish. A malformed payload is a
/// `BankError::Unknown` like any other unexpected fault, not a special
/// case: the caller gets a normal `UnknownError` reply, not a timeout.
async fn dispatch(
    banker: Arc<dyn Banker>,
    subject: &'static str,
    payload: &[u8],
) -> crate::domain::Status {
    let result = decode_and_run(banker, subject, payload).await;

    if let Err(crate::error::BankError::Unknown(ref message)) = result {
        tracing::error!(subject, error = %message, "banker operation failed");
    }

    map_result(&result)
}

async fn decode_and_run(
    banker: Arc<dyn Banker>,
    subject: &'static str,
    payload: &[u8],
) -> Result<(), crate::error::BankError> {
    let decode_err = |err: serde_json::Error| crate::error::BankError::Unknown(err.to_string());

    match subject {
        "bank.credit" => {
            let req: CreditRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker.credit(req.uid, req.account, req.amount).await
        }
        "bank.debit" => {
            let req: DebitRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker.debit(req.uid, req.account, req.amount).await
        }
        "bank.transfer" => {
            let req: TransferRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker
                .transfer(req.uid, req.src, req.dst, req.amount)
                .await
        }
        "bank.acquire" => {
            let req: AcquireRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker.acquire(req.uid, req.account, req.amount).await
        }
        "bank.commit" => {
            let req: CommitRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker.commit(req.uid, req.account).await
        }
        "bank.rollback" => {
            let req: RollbackRequest = serde_json::from_slice(payload).map_err(decode_err)?;
            banker.rollback(req.uid, req.account).await
        }
        other => unreachable!("subscribed to unknown subject: {other}"),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
