//! Upstream relay handlers.
//!
//! One handler per proxied integration, all the same shape: validate or
//! default the local query parameters, hand the request to the shared
//! [`relay`] helper, which injects the API key where the upstream
//! requires one, performs the single outbound call and relays the
//! upstream body with its status code. Missing required parameters fail
//! fast with 400 before any outbound call is made.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use impactd_core::services::UpstreamService;
use tracing::debug;

use crate::error::GatewayError;
use crate::state::AppState;

type Params = Vec<(String, String)>;

/// Forward a request upstream and relay the response.
///
/// Success (2xx) is relayed verbatim with a JSON content type; non-2xx
/// becomes a structured [`GatewayError::Upstream`] that preserves the
/// upstream status code and body.
async fn relay(
    state: &AppState,
    service: UpstreamService,
    url: String,
    mut params: Params,
) -> Result<Response, GatewayError> {
    if service.requires_api_key() {
        params.push(("api_key".to_string(), state.config.nasa_api_key.clone()));
    }

    debug!(service = service.name(), url = %url, "relaying upstream request");
    let response = state.upstream.get(service, &url, &params).await?;

    if !(200..300).contains(&response.status) {
        return Err(GatewayError::Upstream {
            service: service.name(),
            status: response.status,
            body: response.body,
        });
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response())
}

fn require<'a>(
    query: &'a HashMap<String, String>,
    name: &'static str,
) -> Result<&'a str, GatewayError> {
    query
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(GatewayError::MissingParameter { name })
}

/// Copy the inbound query as-is, adding `key=value` if `key` is absent.
fn passthrough_with_default(
    query: HashMap<String, String>,
    key: &str,
    value: &str,
) -> Params {
    let mut params: Params = query.into_iter().collect();
    if !params.iter().any(|(k, _)| k == key) {
        params.push((key.to_string(), value.to_string()));
    }
    params
}

/// `GET /api/neows/browse` — NeoWs asteroid catalog page.
pub async fn neows_browse(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let page = query.get("page").cloned().unwrap_or_else(|| "0".to_string());
    let size = query.get("size").cloned().unwrap_or_else(|| "20".to_string());

    let service = UpstreamService::NeoWsBrowse;
    relay(
        &state,
        service,
        service.endpoint().to_string(),
        vec![("page".to_string(), page), ("size".to_string(), size)],
    )
    .await
}

/// `GET /api/neows/neo` — NeoWs lookup by asteroid id.
pub async fn neows_neo(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let id = require(&query, "id")?;
    let url = UpstreamService::neo_url(id);
    relay(&state, UpstreamService::NeoWsLookup, url, Vec::new()).await
}

/// `GET /api/earthquakes` — USGS ComCat pass-through, GeoJSON by default.
pub async fn earthquakes(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let params = passthrough_with_default(query, "format", "geojson");
    let service = UpstreamService::Earthquakes;
    relay(&state, service, service.endpoint().to_string(), params).await
}

/// `GET /api/elevation` — point elevation at `lat`/`lon`.
///
/// The EPQS upstream takes `x`/`y` in WGS84; the coordinate swap happens
/// here so clients keep the lat/lon vocabulary.
pub async fn elevation(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let lat = require(&query, "lat")?.to_string();
    let lon = require(&query, "lon")?.to_string();

    let params = vec![
        ("x".to_string(), lon),
        ("y".to_string(), lat),
        ("units".to_string(), "Meters".to_string()),
        ("wkid".to_string(), "4326".to_string()),
    ];
    let service = UpstreamService::Elevation;
    relay(&state, service, service.endpoint().to_string(), params).await
}

/// `GET /api/sbdb` — JPL Small-Body Database pass-through.
pub async fn sbdb(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let service = UpstreamService::Sbdb;
    relay(
        &state,
        service,
        service.endpoint().to_string(),
        query.into_iter().collect(),
    )
    .await
}

/// `GET /api/donki` — space-weather notification feed.
pub async fn donki(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    let params = passthrough_with_default(query, "type", "all");
    let service = UpstreamService::Donki;
    relay(&state, service, service.endpoint().to_string(), params).await
}

/// `GET /api/nasa-image` — NASA image/video library search.
pub async fn nasa_image(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, GatewayError> {
    require(&query, "q")?;
    let service = UpstreamService::NasaImages;
    relay(
        &state,
        service,
        service.endpoint().to_string(),
        query.into_iter().collect(),
    )
    .await
}

/// `GET /api/astronomy` — permanent stub.
///
/// The integration this fronted needs credentials that were never
/// provisioned, so it reports 501 unconditionally rather than relaying
/// a guaranteed auth failure.
pub async fn astronomy() -> GatewayError {
    GatewayError::NotImplemented {
        what: "astronomy data integration",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_absent_and_empty_values() {
        let mut query = HashMap::new();
        assert!(matches!(
            require(&query, "lat"),
            Err(GatewayError::MissingParameter { name: "lat" })
        ));

        query.insert("lat".to_string(), String::new());
        assert!(matches!(
            require(&query, "lat"),
            Err(GatewayError::MissingParameter { name: "lat" })
        ));

        query.insert("lat".to_string(), "35.68".to_string());
        assert_eq!(require(&query, "lat").unwrap(), "35.68");
    }

    #[test]
    fn passthrough_default_does_not_override_client_choice() {
        let mut query = HashMap::new();
        query.insert("format".to_string(), "xml".to_string());
        let params = passthrough_with_default(query, "format", "geojson");
        assert_eq!(params, vec![("format".to_string(), "xml".to_string())]);

        let params = passthrough_with_default(HashMap::new(), "format", "geojson");
        assert_eq!(params, vec![("format".to_string(), "geojson".to_string())]);
    }
}
