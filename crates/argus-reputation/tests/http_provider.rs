use argus_domain::ports::{ProviderError, ReputationProvider};
use argus_reputation::{HttpReputationProvider, ProviderConfig};
use argus_types::{Identifier, validate};
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::time::Duration;

const CLEAN: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
const FLAGGED: &str = "0x8f3Cf7ad23Cd3CaDbD9735AFf958023239c6A063";
const BROKEN: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";
const GARBLED: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
const THROTTLED: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
const SLOW: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

async fn address(Path(address): Path<String>, headers: HeaderMap) -> axum::response::Response {
    if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match address.as_str() {
        CLEAN => Json(json!({ "overallRisk": 0.0, "issues": [] })).into_response(),
        FLAGGED => Json(json!({
            "overallRisk": 97.0,
            "issues": [
                { "tags": [ { "key": "mixer-contact", "name": "Mixer contact" } ] },
                { "tags": [ { "key": "sanctioned-entity", "severity": 5 } ] }
            ]
        }))
        .into_response(),
        BROKEN => StatusCode::BAD_GATEWAY.into_response(),
        GARBLED => "<html>maintenance</html>".into_response(),
        THROTTLED => {
            Json(json!({ "message": "Rate limit exceeded", "overallRisk": 99 })).into_response()
        }
        SLOW => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "issues": [] })).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve() -> String {
    let app = Router::new().route("/addresses/{address}", get(address));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn provider(base_url: String, api_key: Option<&str>, timeout: Duration) -> HttpReputationProvider {
    HttpReputationProvider::new(ProviderConfig {
        base_url,
        api_key: api_key.map(str::to_string),
        timeout,
    })
    .unwrap()
}

fn id(raw: &str) -> Identifier {
    validate(raw).unwrap()
}

#[tokio::test]
async fn clean_address_has_no_findings() {
    let p = provider(serve().await, Some("test-key"), Duration::from_secs(2));
    let report = p.lookup(&id(CLEAN)).await.unwrap();
    assert!(report.findings.is_empty());
}

#[tokio::test]
async fn flagged_address_lists_categories_in_order() {
    let p = provider(serve().await, Some("test-key"), Duration::from_secs(2));
    let report = p.lookup(&id(FLAGGED)).await.unwrap();
    let categories: Vec<_> = report.findings.iter().map(|f| f.category.as_str()).collect();
    assert_eq!(categories, ["mixer-contact", "sanctioned-entity"]);
    assert_eq!(report.overall_risk, Some(97.0));
}

#[tokio::test]
async fn non_success_status_is_classified() {
    let base = serve().await;
    let p = provider(base.clone(), Some("test-key"), Duration::from_secs(2));
    assert_eq!(p.lookup(&id(BROKEN)).await, Err(ProviderError::Status(502)));

    let unauthenticated = provider(base, None, Duration::from_secs(2));
    assert_eq!(
        unauthenticated.lookup(&id(CLEAN)).await,
        Err(ProviderError::Status(401))
    );
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let p = provider(serve().await, Some("test-key"), Duration::from_secs(2));
    assert!(matches!(
        p.lookup(&id(GARBLED)).await,
        Err(ProviderError::Malformed(_))
    ));
}

#[tokio::test]
async fn error_body_with_success_status_is_malformed() {
    let p = provider(serve().await, Some("test-key"), Duration::from_secs(2));
    assert!(matches!(
        p.lookup(&id(THROTTLED)).await,
        Err(ProviderError::Malformed(_))
    ));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let p = provider(serve().await, Some("test-key"), Duration::from_millis(100));
    assert_eq!(p.lookup(&id(SLOW)).await, Err(ProviderError::Timeout));
}

#[tokio::test]
async fn unreachable_host_is_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let p = provider(format!("http://{addr}"), Some("test-key"), Duration::from_secs(2));
    assert!(matches!(
        p.lookup(&id(CLEAN)).await,
        Err(ProviderError::Transport(_))
    ));
}
