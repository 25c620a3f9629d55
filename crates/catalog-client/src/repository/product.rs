//! # HTTP Product Repository
//!
//! `ProductRepository` over the json-server style REST API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation             Method  Path                    Success body    │
//! │  ───────────────────   ──────  ──────────────────────  ──────────────  │
//! │  fetch_products(None)  GET     /products               [Product]       │
//! │  fetch_products(page)  GET     /products?_page&_limit  [Product] +     │
//! │                                                        X-Total-Count   │
//! │  get_product_by_id     GET     /products/{id}          Product         │
//! │  create_product        POST    /products               Product         │
//! │  update_product        PUT     /products/{id}          Product         │
//! │  delete_product        DELETE  /products/{id}          (ignored)       │
//! │  get_categories        GET     /categories             [string]        │
//! │                                                                         │
//! │  404 → NotFound, any other non-2xx → Http { status, message }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use catalog_core::{PageRequest, Product, ProductId};

use super::{ProductPage, ProductRepository};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Product repository backed by HTTP.
///
/// ## Usage
/// ```rust,no_run
/// # async fn demo() -> catalog_client::ClientResult<()> {
/// use catalog_client::{ClientConfig, HttpProductRepository, ProductRepository};
///
/// let repo = HttpProductRepository::new(&ClientConfig::default())?;
/// let page = repo.fetch_products(None).await?;
/// println!("{} products", page.total_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    client: Client,
    base_url: Url,
}

impl HttpProductRepository {
    /// Builds the HTTP client.
    ///
    /// ## Errors
    /// `InvalidUrl` if the base URL does not parse or is not http(s).
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url.trim())?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{} (expected an http or https URL)",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        debug!(base_url = %base_url, timeout_ms = config.timeout.as_millis() as u64, "Product API client ready");

        Ok(HttpProductRepository { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Maps non-success statuses to errors.
    async fn check(response: Response, resource: impl FnOnce() -> String) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::not_found(resource()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            text
        };

        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// `/products` answers with a bare array, or with a wrapper object when a
/// newer json-server paginates.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsBody {
    List(Vec<Product>),
    Paged {
        data: Vec<Product>,
        #[serde(default)]
        items: Option<usize>,
    },
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn fetch_products(&self, page: Option<PageRequest>) -> ClientResult<ProductPage> {
        let mut url = self.endpoint(&["products"])?;
        if let Some(request) = page {
            url.query_pairs_mut()
                .append_pair("_page", &request.page.max(1).to_string())
                .append_pair("_limit", &request.page_size.max(1).to_string());
        }

        debug!(url = %url, "Fetching products");

        let response = self.client.get(url).send().await?;
        let response = Self::check(response, || "Products".to_string()).await?;

        let header_total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<usize>().ok());

        let (products, body_total) = match Self::decode::<ProductsBody>(response).await? {
            ProductsBody::List(products) => (products, None),
            ProductsBody::Paged { data, items } => (data, items),
        };

        let total_count = header_total.or(body_total).unwrap_or(products.len());
        debug!(count = products.len(), total_count, "Fetched products");

        Ok(ProductPage {
            products,
            total_count,
        })
    }

    async fn get_product_by_id(&self, id: &ProductId) -> ClientResult<Product> {
        let url = self.endpoint(&["products", id.as_str()])?;
        debug!(url = %url, "Fetching product");

        let response = self.client.get(url).send().await?;
        let response = Self::check(response, || format!("Product {}", id)).await?;
        Self::decode(response).await
    }

    async fn create_product(&self, product: &Product) -> ClientResult<Product> {
        let url = self.endpoint(&["products"])?;
        debug!(url = %url, name = %product.name, "Creating product");

        let response = self.client.post(url).json(product).send().await?;
        let response = Self::check(response, || "Products".to_string()).await?;
        Self::decode(response).await
    }

    async fn update_product(&self, id: &ProductId, product: &Product) -> ClientResult<Product> {
        let url = self.endpoint(&["products", id.as_str()])?;
        debug!(url = %url, "Updating product");

        let mut body = product.clone();
        body.id = Some(id.clone());

        let response = self.client.put(url).json(&body).send().await?;
        let response = Self::check(response, || format!("Product {}", id)).await?;
        Self::decode(response).await
    }

    async fn delete_product(&self, id: &ProductId) -> ClientResult<()> {
        let url = self.endpoint(&["products", id.as_str()])?;
        debug!(url = %url, "Deleting product");

        let response = self.client.delete(url).send().await?;
        Self::check(response, || format!("Product {}", id)).await?;
        Ok(())
    }

    async fn get_categories(&self) -> ClientResult<Vec<String>> {
        let url = self.endpoint(&["categories"])?;
        debug!(url = %url, "Fetching categories");

        let response = self.client.get(url).send().await?;
        let response = Self::check(response, || "Categories".to_string()).await?;
        let values: Vec<Value> = Self::decode(response).await?;

        let categories = category_names(values);
        debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }
}

/// Extracts category names from strings or `{ "name": ... }` objects,
/// dropping duplicates and keeping first-seen order.
fn category_names(values: Vec<Value>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let name = match value {
            Value::String(s) => s,
            Value::Object(mut map) => match map.remove("name") {
                Some(Value::String(s)) => s,
                _ => continue,
            },
            _ => continue,
        };

        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(base: &str) -> HttpProductRepository {
        HttpProductRepository::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let r = repo("https://api.example.com");
        assert_eq!(
            r.endpoint(&["products", "7"]).unwrap().as_str(),
            "https://api.example.com/products/7"
        );

        let r = repo("https://api.example.com/v1/");
        assert_eq!(
            r.endpoint(&["products"]).unwrap().as_str(),
            "https://api.example.com/v1/products"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let r = repo("http://localhost:3000");
        assert_eq!(
            r.endpoint(&["products", "a/b"]).unwrap().as_str(),
            "http://localhost:3000/products/a%2Fb"
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(matches!(
            HttpProductRepository::new(&ClientConfig::new("ftp://example.com")),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpProductRepository::new(&ClientConfig::new("not a url")),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_category_names_dedup_and_shapes() {
        let values = vec![
            json!("Books"),
            json!({"id": 2, "name": "Toys"}),
            json!("Books"),
            json!(42),
            json!({"id": 3}),
        ];
        assert_eq!(category_names(values), vec!["Books", "Toys"]);
    }

    #[test]
    fn test_products_body_shapes() {
        let list: ProductsBody = serde_json::from_value(json!([{"id": 1, "name": "A"}])).unwrap();
        assert!(matches!(list, ProductsBody::List(ref p) if p.len() == 1));

        let paged: ProductsBody =
            serde_json::from_value(json!({"data": [{"id": 1, "name": "A"}], "items": 40})).unwrap();
        assert!(matches!(paged, ProductsBody::Paged { items: Some(40), .. }));
    }
}
