// src/modules/content/adapter/outgoing/sanity/sanity_query.rs

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::modules::content::adapter::outgoing::sanity::SanityConfig;
use crate::modules::content::application::ports::outgoing::{ContentProvider, ContentQueryError};
use crate::modules::content::domain::documents::{Document, DocumentType};

const BY_SLUG_QUERY: &str = "*[_type == $type && slug.current == $slug][0]";
const LIST_QUERY: &str =
    "*[_type == $type && !(_id in path(\"drafts.**\"))] | order(_createdAt desc)";
const PING_QUERY: &str = "count(*[_type == \"siteSettings\"])";

// ============================================================================
// Provider
// ============================================================================

#[derive(Clone)]
pub struct SanityContentProvider {
    client: Client,
    endpoint: String,
    config: SanityConfig,
}

impl SanityContentProvider {
    pub fn new(config: SanityConfig) -> Result<Self, ContentQueryError> {
        let endpoint = config.query_endpoint();
        Self::with_endpoint(config, endpoint)
    }

    fn with_endpoint(config: SanityConfig, endpoint: String) -> Result<Self, ContentQueryError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ContentQueryError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    fn query_url(&self, query: &str, params: &[(&str, &str)]) -> Result<Url, ContentQueryError> {
        build_query_url(&self.endpoint, query, params)
    }

    async fn run_query(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ContentQueryError> {
        let url = self.query_url(query, params)?;
        debug!("content store query: {}", query);

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentQueryError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ContentQueryError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(ContentQueryError::Upstream(format!(
                "content store returned {}: {}",
                status,
                truncate(&body, 200)
            )));
        }

        decode_result(&body)
    }
}

#[async_trait]
impl ContentProvider for SanityContentProvider {
    async fn get_by_slug(
        &self,
        doc_type: DocumentType,
        slug: &str,
    ) -> Result<Document, ContentQueryError> {
        let type_param = json_param(doc_type.as_str());
        let slug_param = json_param(slug);

        let result = self
            .run_query(
                BY_SLUG_QUERY,
                &[("$type", type_param.as_str()), ("$slug", slug_param.as_str())],
            )
            .await?;

        document_from_result(result, &self.config)
    }

    async fn list(&self, doc_type: DocumentType) -> Result<Vec<Document>, ContentQueryError> {
        let type_param = json_param(doc_type.as_str());

        let result = self
            .run_query(LIST_QUERY, &[("$type", type_param.as_str())])
            .await?;

        documents_from_list(result, &self.config)
    }

    async fn ping(&self) -> Result<(), ContentQueryError> {
        self.run_query(PING_QUERY, &[]).await.map(|_| ())
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// GROQ parameters travel as JSON literals.
fn json_param(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

fn build_query_url(
    endpoint: &str,
    query: &str,
    params: &[(&str, &str)],
) -> Result<Url, ContentQueryError> {
    let pairs = std::iter::once(("query", query)).chain(params.iter().copied());

    Url::parse_with_params(endpoint, pairs)
        .map_err(|e| ContentQueryError::Upstream(format!("invalid query url: {e}")))
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn decode_result(body: &str) -> Result<Value, ContentQueryError> {
    let mut envelope: Value =
        serde_json::from_str(body).map_err(|e| ContentQueryError::Decode(e.to_string()))?;

    envelope
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| ContentQueryError::Decode("response has no `result` field".to_string()))
}

fn document_from_result(
    mut result: Value,
    config: &SanityConfig,
) -> Result<Document, ContentQueryError> {
    if result.is_null() {
        return Err(ContentQueryError::NotFound);
    }

    fill_image_urls(&mut result, &config.image_base_url());
    serde_json::from_value(result).map_err(|e| ContentQueryError::Decode(e.to_string()))
}

/// Documents that fail to decode are skipped so one bad entry does not empty a listing.
fn documents_from_list(
    result: Value,
    config: &SanityConfig,
) -> Result<Vec<Document>, ContentQueryError> {
    let Value::Array(items) = result else {
        return Err(ContentQueryError::Decode(
            "expected an array of documents".to_string(),
        ));
    };

    let mut documents = Vec::with_capacity(items.len());
    for item in items {
        let id = item
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();

        match document_from_result(item, config) {
            Ok(doc) => documents.push(doc),
            Err(e) => warn!("Skipping undecodable document {}: {}", id, e),
        }
    }

    Ok(documents)
}

/// `image-<id>-<w>x<h>-<ext>` becomes `<base>/<id>-<w>x<h>.<ext>`.
fn image_url_from_ref(base: &str, asset_ref: &str) -> Option<String> {
    let rest = asset_ref.strip_prefix("image-")?;
    let (name, ext) = rest.rsplit_once('-')?;
    Some(format!("{base}/{name}.{ext}"))
}

fn fill_image_urls(value: &mut Value, base: &str) {
    match value {
        Value::Object(map) => {
            if !map.contains_key("url") {
                let url = map
                    .get("asset")
                    .and_then(|a| a.get("_ref"))
                    .and_then(Value::as_str)
                    .and_then(|r| image_url_from_ref(base, r));

                if let Some(url) = url {
                    map.insert("url".to_string(), Value::String(url));
                }
            }

            for child in map.values_mut() {
                fill_image_urls(child, base);
            }
        }
        Value::Array(items) => {
            for item in items {
                fill_image_urls(item, base);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config() -> SanityConfig {
        SanityConfig::new("zp7mbokg")
    }

    #[test]
    fn query_url_encodes_query_and_json_params() {
        let url = build_query_url(
            &config().query_endpoint(),
            BY_SLUG_QUERY,
            &[("$type", &json_param("podcast")), ("$slug", &json_param("ep 1"))],
        )
        .unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.host_str(), Some("zp7mbokg.api.sanity.io"));
        assert_eq!(pairs[0], ("query".to_string(), BY_SLUG_QUERY.to_string()));
        assert_eq!(pairs[1], ("$type".to_string(), "\"podcast\"".to_string()));
        assert_eq!(pairs[2], ("$slug".to_string(), "\"ep 1\"".to_string()));
    }

    /// Answers one request with `{"result": null}` after `delay`.
    async fn slow_store(delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            tokio::time::sleep(delay).await;

            let body = r#"{"result":null}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}/v2024-01-01/data/query/production")
    }

    #[tokio::test]
    async fn slow_response_outlasting_connect_timeout_still_completes() {
        let endpoint = slow_store(Duration::from_millis(300)).await;
        let config = SanityConfig {
            connect_timeout: Duration::from_millis(100),
            ..config()
        };
        let provider = SanityContentProvider::with_endpoint(config, endpoint).unwrap();

        let result = provider.get_by_slug(DocumentType::Podcast, "ep-1").await;

        assert_eq!(result, Err(ContentQueryError::NotFound));
    }

    #[test]
    fn json_param_escapes_quotes() {
        assert_eq!(json_param(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn decode_result_extracts_result_field() {
        let value = decode_result(r#"{"ms": 4, "query": "x", "result": {"_id": "a"}}"#).unwrap();
        assert_eq!(value, json!({ "_id": "a" }));
    }

    #[test]
    fn decode_result_rejects_envelope_without_result() {
        let err = decode_result(r#"{"error": "bad"}"#).unwrap_err();
        assert!(matches!(err, ContentQueryError::Decode(_)));

        let err = decode_result("<html>").unwrap_err();
        assert!(matches!(err, ContentQueryError::Decode(_)));
    }

    #[test]
    fn null_result_is_not_found() {
        let err = document_from_result(Value::Null, &config()).unwrap_err();
        assert_eq!(err, ContentQueryError::NotFound);
    }

    #[test]
    fn document_from_result_resolves_image_urls() {
        let raw = json!({
            "_type": "labProject",
            "_id": "lab-1",
            "title": "Onbrd",
            "slug": { "current": "onbrd" },
            "heroImage": {
                "_type": "image",
                "asset": { "_ref": "image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg", "_type": "reference" }
            }
        });

        let project = document_from_result(raw, &config())
            .unwrap()
            .into_project()
            .unwrap();

        assert_eq!(
            project.hero_image.unwrap().url.as_deref(),
            Some("https://cdn.sanity.io/images/zp7mbokg/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg")
        );
    }

    #[test]
    fn document_from_result_reports_decode_errors() {
        let raw = json!({ "_type": "podcast", "_id": "p", "title": "No slug" });

        let err = document_from_result(raw, &config()).unwrap_err();
        assert!(matches!(err, ContentQueryError::Decode(_)));
    }

    #[test]
    fn list_skips_undecodable_documents() {
        let raw = json!([
            { "_type": "venture", "_id": "v1", "name": "Ledgerly", "slug": { "current": "ledgerly" } },
            { "_type": "venture", "_id": "v2" }
        ]);

        let docs = documents_from_list(raw, &config()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug(), Some("ledgerly"));
    }

    #[test]
    fn list_rejects_non_array_result() {
        let err = documents_from_list(json!({}), &config()).unwrap_err();
        assert!(matches!(err, ContentQueryError::Decode(_)));
    }

    #[test]
    fn image_url_from_ref_ignores_non_image_assets() {
        assert_eq!(image_url_from_ref("https://x", "file-abc-pdf"), None);
        assert_eq!(
            image_url_from_ref("https://x", "image-abc-10x20-png"),
            Some("https://x/abc-10x20.png".to_string())
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("ääää", 2), "ää");
        assert_eq!(truncate("short", 200), "short");
    }
}
