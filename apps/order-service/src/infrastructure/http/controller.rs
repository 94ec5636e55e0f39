//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the order store.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::domain::orders::store::OrderStore;
use crate::domain::shared::{OrderId, SecurityContext};

use super::error::ApiError;
use super::request::{ListOrdersParams, NewOrderRequest, UpdateOrderRequest};
use super::response::{HealthResponse, OrderResponse};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: OrderStore,
{
    /// The order store.
    pub store: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<S> Clone for AppState<S>
where
    S: OrderStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: OrderStore + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/orders", get(list_orders).post(create_order))
        .route(
            "/api/v1/orders/{order_id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(state)
}

/// Derive the caller security context from request headers.
///
/// No credential validation happens here or anywhere downstream; the context
/// is passed through to the store for contract symmetry only.
fn security_context(headers: &HeaderMap) -> SecurityContext {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map_or_else(SecurityContext::anonymous, |token| {
            SecurityContext::authenticated(token.strip_prefix("Bearer ").unwrap_or(token))
        })
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: OrderStore,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Create order endpoint.
async fn create_order<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Json(request): Json<NewOrderRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: OrderStore,
{
    request.validate()?;

    let ctx = security_context(&headers);
    let order = state.store.create(request.to_domain(), &ctx).await?;

    tracing::info!(
        order_id = %order.id(),
        total_amount = %order.total_amount(),
        items = order.items().len(),
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse::from_order(&order)),
    ))
}

/// Get order endpoint.
async fn get_order<S>(
    State(state): State<AppState<S>>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<OrderResponse>, ApiError>
where
    S: OrderStore,
{
    let ctx = security_context(&headers);
    let order = state.store.get(&OrderId::new(order_id), &ctx).await?;
    Ok(Json(OrderResponse::from_order(&order)))
}

/// List orders endpoint.
async fn list_orders<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListOrdersParams>,
    headers: HeaderMap,
) -> Result<Json<Vec<OrderResponse>>, ApiError>
where
    S: OrderStore,
{
    let ctx = security_context(&headers);
    let orders = state
        .store
        .list(params.status.as_deref(), &ctx)
        .await?;

    tracing::debug!(
        matched = orders.len(),
        filter = params.status.as_deref().unwrap_or("<none>"),
        "Orders listed"
    );

    Ok(Json(orders.iter().map(OrderResponse::from_order).collect()))
}

/// Update order endpoint.
async fn update_order<S>(
    State(state): State<AppState<S>>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError>
where
    S: OrderStore,
{
    let ctx = security_context(&headers);
    let order = state
        .store
        .update(&OrderId::new(order_id), request.to_domain(), &ctx)
        .await?;

    tracing::info!(order_id = %order.id(), status = order.status(), "Order updated");

    Ok(Json(OrderResponse::from_order(&order)))
}

/// Delete order endpoint.
async fn delete_order<S>(
    State(state): State<AppState<S>>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
    S: OrderStore,
{
    let ctx = security_context(&headers);
    state
        .store
        .delete(&OrderId::new(order_id.as_str()), &ctx)
        .await?;

    tracing::info!(order_id = %order_id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::response::ApiErrorResponse;
    use crate::infrastructure::persistence::InMemoryOrderStore;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn create_test_state() -> AppState<InMemoryOrderStore> {
        AppState {
            store: Arc::new(InMemoryOrderStore::new()),
            version: "1.0.0-test".to_string(),
        }
    }

    fn post_order_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/orders")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, "1.0.0-test");
    }

    #[tokio::test]
    async fn create_order_returns_201_with_body() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "items": [
                {"quantity": 2, "unitPrice": "10.0"},
                {"quantity": 1, "unitPrice": "5.0"}
            ]
        });

        let response = app.oneshot(post_order_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let order: OrderResponse = read_json(response).await;
        assert!(!order.id.is_empty());
        assert_eq!(order.total_amount, dec!(25.0));
        assert_eq!(order.status, "CREATED");
        assert_eq!(order.items.len(), 2);
    }

    #[tokio::test]
    async fn create_order_rejects_empty_items() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(post_order_request(serde_json::json!({"items": []})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiErrorResponse = read_json(response).await;
        assert_eq!(error.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn get_order_roundtrip() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({"items": [{"quantity": 1, "unitPrice": "9.99"}]});
        let response = app
            .clone()
            .oneshot(post_order_request(body))
            .await
            .unwrap();
        let created: OrderResponse = read_json(response).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/orders/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched: OrderResponse = read_json(response).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_order_not_found_is_404() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/orders/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiErrorResponse = read_json(response).await;
        assert_eq!(error.code, "ORDER_NOT_FOUND");
        assert!(error.message.contains("nonexistent"));
    }

    #[tokio::test]
    async fn update_order_missing_is_404() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/orders/nonexistent")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"status": "PAID"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_order_returns_204_then_404() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({"items": [{"quantity": 1, "unitPrice": "1.0"}]});
        let response = app
            .clone()
            .oneshot(post_order_request(body))
            .await
            .unwrap();
        let created: OrderResponse = read_json(response).await;

        let delete_request = |id: &str| {
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/orders/{id}"))
                .body(Body::empty())
                .unwrap()
        };

        let response = app
            .clone()
            .oneshot(delete_request(&created.id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(delete_request(&created.id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_orders_honors_status_filter() {
        let app = create_router(create_test_state());

        for _ in 0..2 {
            let body = serde_json::json!({"items": [{"quantity": 1, "unitPrice": "1.0"}]});
            app.clone().oneshot(post_order_request(body)).await.unwrap();
        }

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/orders?status=created")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let matched: Vec<OrderResponse> = read_json(response).await;
        assert_eq!(matched.len(), 2);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/orders?status=SHIPPED")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let matched: Vec<OrderResponse> = read_json(response).await;
        assert!(matched.is_empty());
    }

    #[test]
    fn security_context_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer alice".parse().unwrap());
        assert_eq!(security_context(&headers).principal(), Some("alice"));
    }

    #[test]
    fn security_context_without_header_is_anonymous() {
        assert_eq!(security_context(&HeaderMap::new()).principal(), None);
    }
}
