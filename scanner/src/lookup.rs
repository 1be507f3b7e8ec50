use crate::error::Result;
use crate::error::ScanError::{
    CantCreateClient, ConnectionFailed, MalformedResponse, MissingApiUrl, Rejected,
};
use crate::tools::log_message_and_return;
use dto::lookup_response::LookupResponse;
use dto::member_record::MemberRecord;
use log::{debug, error};
use reqwest::Client;
use std::env;

const API_URL_ENV_VAR: &str = "API_URL";
const LOOKUP_ROUTE: &str = "obtener-cliente";

/// Outcome of a completed lookup round trip.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LookupOutcome {
    Found(MemberRecord),
    NotFound,
}

/// Thin client for the lookup service: one GET per scanned card.
///
/// No retry, no cancellation; the in-flight discipline is owned by the scan
/// session, which tags each request and discards stale answers.
#[derive(Debug)]
pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(log_message_and_return(
                "Can't build HTTP client.",
                CantCreateClient,
            ))?;

        Ok(Self { client, base_url })
    }

    /// Build a client whose base URL comes from the `API_URL` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_ENV_VAR).map_err(|_| MissingApiUrl)?;
        Self::new(base_url)
    }

    /// Fetch the member record matching a document number.
    ///
    /// An answer with rows yields the first one; the service is expected to
    /// hold at most one relevant row per document number, and any surplus is
    /// ignored. An answer without rows is a clean [`LookupOutcome::NotFound`],
    /// never confused with a still-pending lookup.
    pub async fn look_up(&self, document_number: &str) -> Result<LookupOutcome> {
        let url = format!("{}/{LOOKUP_ROUTE}/{document_number}", self.base_url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(log_message_and_return(
                "Can't reach the lookup service.",
                ConnectionFailed,
            ))?;

        let status = response.status();
        if !status.is_success() {
            error!("Lookup rejected by the service [document: {document_number}, status: {status}]");
            return Err(Rejected(status.as_u16()));
        }

        let body: LookupResponse =
            response.json().await.map_err(log_message_and_return(
                "Can't read the lookup service answer.",
                MalformedResponse,
            ))?;

        match body.data().first() {
            Some(record) => Ok(LookupOutcome::Found(record.clone())),
            None => {
                debug!("No member matches the scanned document [document: {document_number}]");
                Ok(LookupOutcome::NotFound)
            }
        }
    }
}
