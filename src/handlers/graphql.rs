//! GraphQL endpoint and the GraphiQL exploration page.
//!
//! `GET /graphql` serves GraphiQL to clients that accept `text/html` and runs the
//! query-string request otherwise. `POST /graphql` takes JSON (single or batch),
//! multipart, or a raw `application/graphql` document.

use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql::ParseRequestError;
use async_graphql_axum::{GraphQLBatchRequest, GraphQLRequest, GraphQLResponse};
use axum::{
    body::to_bytes,
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

/// Request body or query string that could not be read as a GraphQL request.
/// Rendered as a GraphQL error document rather than plain text.
#[derive(Debug)]
pub enum GraphQLBodyRejection {
    Parse(ParseRequestError),
    Body(String),
}

impl From<ParseRequestError> for GraphQLBodyRejection {
    fn from(err: ParseRequestError) -> Self {
        GraphQLBodyRejection::Parse(err)
    }
}

impl IntoResponse for GraphQLBodyRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GraphQLBodyRejection::Parse(ParseRequestError::PayloadTooLarge) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload too large".to_string())
            }
            GraphQLBodyRejection::Parse(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            GraphQLBodyRejection::Body(message) => (StatusCode::BAD_REQUEST, message),
        };
        let body = serde_json::json!({
            "errors": [{
                "message": message,
                "extensions": { "code": "BAD_REQUEST" }
            }]
        });
        (status, Json(body)).into_response()
    }
}

type ProfileRequest = GraphQLRequest<GraphQLBodyRejection>;
type ProfileBatchRequest = GraphQLBatchRequest<GraphQLBodyRejection>;

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().contains("text/html"))
}

fn is_raw_document(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/graphql"))
}

pub async fn graphql_get(State(state): State<AppState>, req: Request) -> Response {
    if accepts_html(req.headers()) {
        return graphiql().await.into_response();
    }
    match <ProfileRequest as FromRequest<AppState>>::from_request(req, &state).await {
        Ok(request) => GraphQLResponse::from(state.schema.execute(request.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

pub async fn graphql_post(State(state): State<AppState>, req: Request) -> Response {
    if is_raw_document(req.headers()) {
        return match read_document(req).await {
            Ok(query) => GraphQLResponse::from(state.schema.execute(query).await).into_response(),
            Err(rejection) => rejection.into_response(),
        };
    }
    match <ProfileBatchRequest as FromRequest<AppState>>::from_request(req, &state).await {
        Ok(batch) => GraphQLResponse::from(state.schema.execute_batch(batch.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// Body of an `application/graphql` request: the query document itself.
async fn read_document(req: Request) -> Result<String, GraphQLBodyRejection> {
    // RequestBodyLimitLayer bounds the body before it gets here.
    let bytes = to_bytes(req.into_body(), usize::MAX)
        .await
        .map_err(|e| GraphQLBodyRejection::Body(e.to_string()))?;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| GraphQLBodyRejection::Body("query document is not valid UTF-8".into()))
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
