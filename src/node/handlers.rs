use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};

use super::engine::DhtNode;
use super::protocol::{
    ErrorResponse, NetworkResponse, PutResponse, UpdateMembershipRequest, ENDPOINT_NETWORK,
    ENDPOINT_RING, ENDPOINT_STORAGE,
};
use crate::error::NodeError;

/// Assemble the node's HTTP surface around one engine instance.
pub fn router(node: Arc<DhtNode>) -> Router {
    Router::new()
        .route(
            &format!("{}/:key", ENDPOINT_STORAGE),
            put(handle_put_value).get(handle_get_value),
        )
        .route(
            ENDPOINT_NETWORK,
            axum::routing::post(handle_update_network).get(handle_get_network),
        )
        .route(ENDPOINT_RING, get(handle_ring_state))
        .layer(Extension(node))
}

fn error_response(err: NodeError) -> Response {
    let status = match &err {
        NodeError::NotFound => StatusCode::NOT_FOUND,
        NodeError::ForwardingFailed { .. } => StatusCode::BAD_GATEWAY,
        NodeError::MembershipInvalid(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// `PUT /storage/:key` with the value as the raw request body. Serves
/// external clients and forwarding peers alike.
pub async fn handle_put_value(
    Extension(node): Extension<Arc<DhtNode>>,
    Path(key): Path<String>,
    body: Bytes,
) -> Response {
    match node.put(&key, body.to_vec()).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(PutResponse {
                message: receipt.message().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("PUT {} failed: {}", key, e);
            error_response(e)
        }
    }
}

/// `GET /storage/:key`, answering the raw value bytes or 404.
pub async fn handle_get_value(
    Extension(node): Extension<Arc<DhtNode>>,
    Path(key): Path<String>,
) -> Response {
    match node.get(&key).await {
        Ok(value) => (StatusCode::OK, value).into_response(),
        Err(NodeError::NotFound) => error_response(NodeError::NotFound),
        Err(e) => {
            tracing::error!("GET {} failed: {}", key, e);
            error_response(e)
        }
    }
}

/// `POST /network`: full member address list pushed by the control plane.
pub async fn handle_update_network(
    Extension(node): Extension<Arc<DhtNode>>,
    Json(req): Json<UpdateMembershipRequest>,
) -> Response {
    match node.update_membership(&req.nodes).await {
        Ok(()) => (
            StatusCode::OK,
            Json(NetworkResponse {
                nodes: node.member_addresses().await,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Membership update rejected: {}", e);
            error_response(e)
        }
    }
}

/// `GET /network`: the member list this node's view was derived from.
pub async fn handle_get_network(Extension(node): Extension<Arc<DhtNode>>) -> Response {
    (
        StatusCode::OK,
        Json(NetworkResponse {
            nodes: node.member_addresses().await,
        }),
    )
        .into_response()
}

/// `GET /ring`: successor, predecessor, and finger table (debug only).
pub async fn handle_ring_state(Extension(node): Extension<Arc<DhtNode>>) -> Response {
    (StatusCode::OK, Json(node.ring_state().await)).into_response()
}
