// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use helpdesk_routing_api::{
    ApiError, AuditTrailResponse, CreateTicketsRequest, CreateTicketsResponse,
    ListMessagesResponse, ListOutboxResponse, ListTicketsResponse, TicketInfo,
    TicketRoutingResponse, UpdateTicketRequest, create_tickets, get_audit_trail, get_ticket,
    list_messages, list_outbox, list_tickets, update_ticket,
};
use helpdesk_routing_audit::Cause;
use helpdesk_routing_persistence::{Persistence, Seed};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Header carrying the caller's request identifier.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Helpdesk Routing Server - HTTP host for the ticket router
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON seed file. If not provided, the store starts empty.
    #[arg(short, long)]
    seed: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store sits behind a `Mutex`, so each request sees and writes a
/// consistent set of tickets.
#[derive(Clone)]
struct AppState {
    /// The ticket store and reference collaborators.
    persistence: Arc<Mutex<Persistence>>,
    /// Source of generated request identifiers.
    request_counter: Arc<AtomicU64>,
}

impl AppState {
    fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            request_counter: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Builds the audit cause for a request.
    ///
    /// Uses the caller's `x-request-id` when present, otherwise a generated id.
    fn cause_for(&self, headers: &HeaderMap, description: String) -> Cause {
        let id: String = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(
                || {
                    let n: u64 = self.request_counter.fetch_add(1, Ordering::SeqCst) + 1;
                    format!("http-{n}")
                },
                String::from,
            );
        Cause::new(id, description)
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for POST `/tickets` endpoint.
///
/// Creates and routes a batch of tickets.
async fn handle_create_tickets(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateTicketsRequest>,
) -> Result<Json<CreateTicketsResponse>, HttpError> {
    let cause: Cause = app_state.cause_for(&headers, String::from("POST /tickets"));
    info!(cause_id = %cause.id, count = req.tickets.len(), "Handling create_tickets request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTicketsResponse = create_tickets(&mut persistence, req, &cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/tickets` endpoint.
async fn handle_list_tickets(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListTicketsResponse> {
    let persistence = app_state.persistence.lock().await;
    let response: ListTicketsResponse = list_tickets(&persistence);
    drop(persistence);

    Json(response)
}

/// Handler for GET `/tickets/{ticket_id}` endpoint.
async fn handle_get_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<TicketInfo>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: TicketInfo = get_ticket(&persistence, ticket_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PATCH `/tickets/{ticket_id}` endpoint.
///
/// Writes fields of a ticket, rerouting it when its identity changes.
async fn handle_update_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<UpdateTicketRequest>,
) -> Result<Json<TicketRoutingResponse>, HttpError> {
    let cause: Cause = app_state.cause_for(&headers, format!("PATCH /tickets/{ticket_id}"));
    info!(cause_id = %cause.id, ticket_id, "Handling update_ticket request");

    let mut persistence = app_state.persistence.lock().await;
    let response: TicketRoutingResponse = update_ticket(&mut persistence, ticket_id, req, &cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/outbox` endpoint.
async fn handle_list_outbox(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListOutboxResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListOutboxResponse = list_outbox(&persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/messages` endpoint.
async fn handle_list_messages(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListMessagesResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: ListMessagesResponse = list_messages(&persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/audit/{ticket_id}` endpoint.
async fn handle_get_audit_trail(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    let persistence = app_state.persistence.lock().await;
    let response: AuditTrailResponse = get_audit_trail(&persistence, ticket_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/tickets",
            get(handle_list_tickets).post(handle_create_tickets),
        )
        .route(
            "/tickets/{ticket_id}",
            get(handle_get_ticket).patch(handle_update_ticket),
        )
        .route("/outbox", get(handle_list_outbox))
        .route("/messages", get(handle_list_messages))
        .route("/audit/{ticket_id}", get(handle_get_audit_trail))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Helpdesk Routing Server");

    let persistence: Persistence = if let Some(seed_path) = &args.seed {
        info!("Loading seed from: {}", seed_path);
        Persistence::from_seed(Seed::load(seed_path)?)
    } else {
        warn!("No seed provided, starting with an empty store");
        Persistence::new()
    };

    let app: Router = build_router(AppState::new(persistence));

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
