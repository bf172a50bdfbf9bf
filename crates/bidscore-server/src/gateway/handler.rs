use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use bidscore::{BidSubmission, ScoringCriteria, require_role, score_bid};

use super::auth::AuthenticatedCaller;
use super::error::GatewayError;
use super::{BIDSCORE_STATUS_HEADER, BIDSCORE_STATUS_SCORED, SCORE_ROUTE_ROLES};

/// Body of `POST /score`. Missing or `null` members decode to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bid_data: BidSubmission,
    #[serde(default, deserialize_with = "null_as_default")]
    pub criteria: ScoringCriteria,
}

impl ScoreRequest {
    /// Decodes a request body. A bare `null` body is an all-default request.
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(|e| GatewayError::InvalidRequest(e.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[tracing::instrument(skip(caller, body), fields(user_id = %caller.0.user_id()))]
pub async fn score_handler(
    caller: AuthenticatedCaller,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let AuthenticatedCaller(identity) = caller;
    require_role(&identity, SCORE_ROUTE_ROLES)?;

    let request = ScoreRequest::from_body(&body)?;
    debug!(bid_id = %request.bid_data.id, "Score request decoded");

    let result = score_bid(&request.bid_data, &request.criteria, identity.role())?;

    let mut headers = HeaderMap::new();
    headers.insert(
        BIDSCORE_STATUS_HEADER,
        HeaderValue::from_static(BIDSCORE_STATUS_SCORED),
    );

    Ok((StatusCode::OK, headers, Json(result)).into_response())
}
