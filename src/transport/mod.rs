//! gRPC transport layer for topicwise.
//!
//! A thin shell over [`ResolutionEngine`]: it validates request size, calls
//! the engine, and maps [`TopicError`] onto gRPC status codes. Resolution
//! outcomes (including no match and ambiguity) are always `OK` responses.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use crate::defaults::{HEALTH_MESSAGE, INTRO_MESSAGE};
use crate::error::{TopicError, ValidationError};
use crate::resolution::ResolutionEngine;

pub mod proto {
    tonic::include_proto!("topicwise");
}

use proto::topic_service_server::{TopicService, TopicServiceServer};

// ----------------------------------------------------------------------------
// Limits (DoS protection)
// ----------------------------------------------------------------------------

/// Maximum size of a user input string.
pub const MAX_USER_INPUT_BYTES: usize = 16 * 1024; // 16 KiB

/// Maximum size of a structured result JSON payload.
const MAX_RESULT_JSON_BYTES: usize = 64 * 1024; // 64 KiB

/// gRPC service implementation.
pub struct TopicServiceImpl {
    engine: Arc<ResolutionEngine>,
    intro: String,
}

impl TopicServiceImpl {
    #[must_use]
    pub fn new(engine: Arc<ResolutionEngine>) -> Self {
        Self {
            engine,
            intro: INTRO_MESSAGE.to_string(),
        }
    }

    /// Overrides the greeting returned by `Intro`.
    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    #[must_use]
    pub fn into_server(self) -> TopicServiceServer<Self> {
        TopicServiceServer::new(self)
    }
}

fn check_input(input: &str) -> Result<(), Status> {
    if input.len() > MAX_USER_INPUT_BYTES {
        let err = ValidationError::InputTooLong {
            actual: input.len(),
            max: MAX_USER_INPUT_BYTES,
        };
        warn!(error = %err, "rejected user input");
        return Err(status_from_topic_error(err.into()));
    }
    Ok(())
}

fn status_from_topic_error(err: TopicError) -> Status {
    match err {
        TopicError::Validation(v) => Status::invalid_argument(v.to_string()),
        // A result naming an unregistered topic is a server-side defect.
        TopicError::Catalog(c) => Status::internal(c.to_string()),
        TopicError::Transport(t) => Status::unavailable(t.to_string()),
        TopicError::Internal { message } => Status::internal(message),
    }
}

#[tonic::async_trait]
impl TopicService for TopicServiceImpl {
    async fn intro(
        &self,
        _request: Request<proto::IntroRequest>,
    ) -> Result<Response<proto::ChatResponse>, Status> {
        Ok(Response::new(proto::ChatResponse {
            response: self.intro.clone(),
        }))
    }

    async fn chat(
        &self,
        request: Request<proto::ChatRequest>,
    ) -> Result<Response<proto::ChatResponse>, Status> {
        let req = request.into_inner();
        check_input(&req.user_input)?;

        let request_id = uuid::Uuid::new_v4();
        let result = self.engine.resolve(&req.user_input);
        debug!(%request_id, ?result, "chat");

        let response = self
            .engine
            .format_response(&result)
            .map_err(status_from_topic_error)?;
        Ok(Response::new(proto::ChatResponse { response }))
    }

    async fn resolve(
        &self,
        request: Request<proto::ChatRequest>,
    ) -> Result<Response<proto::ResolveResponse>, Status> {
        let req = request.into_inner();
        check_input(&req.user_input)?;

        let request_id = uuid::Uuid::new_v4();
        let result = self.engine.resolve(&req.user_input);
        debug!(%request_id, ?result, "resolve");

        let result_json = serde_json::to_vec(&result)
            .map_err(|e| Status::internal(format!("failed to serialize result JSON: {e}")))?;
        if result_json.len() > MAX_RESULT_JSON_BYTES {
            return Err(Status::resource_exhausted("serialized JSON exceeds size limit"));
        }
        Ok(Response::new(proto::ResolveResponse { result_json }))
    }

    async fn health(
        &self,
        _request: Request<proto::HealthRequest>,
    ) -> Result<Response<proto::HealthResponse>, Status> {
        let catalog = self.engine.catalog();
        Ok(Response::new(proto::HealthResponse {
            message: HEALTH_MESSAGE.to_string(),
            topic_count: u32::try_from(catalog.len()).unwrap_or(u32::MAX),
            catalog_digest: catalog.digest(),
        }))
    }
}


pub use proto::topic_service_client::TopicServiceClient;
