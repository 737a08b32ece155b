//! The request executor every resource service is written against.
//!
//! [`ResourceClient`] turns typed query options and bodies into REST calls
//! and decodes JSON envelopes back into typed values. Services hold a
//! `&impl ResourceClient`, so tests and alternative transports can stand in
//! for [`RestClient`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::rest::{ResourceError, ResourceResponse};

/// Typed GET/POST/PUT/DELETE/count primitives against the Admin REST API.
///
/// Paths are relative to `/admin/api/{version}/`; the `.json` suffix is
/// optional. Query options are any `Serialize` struct whose fields become
/// query parameters (see [`serialize_to_query`]).
#[allow(async_fn_in_trait)]
pub trait ResourceClient: Send + Sync {
    /// GETs `path` and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, status or decoding failure.
    async fn get<T, Q>(&self, path: &str, options: Option<&Q>) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized;

    /// GETs `path`, keeping the response headers alongside the body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, status or decoding failure.
    async fn get_with_headers<T, Q>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> Result<ResourceResponse<T>, ResourceError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized;

    /// POSTs `body` as JSON to `path` and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on encoding, transport, status or decoding
    /// failure.
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned;

    /// PUTs `body` as JSON to `path` and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on encoding, transport, status or decoding
    /// failure.
    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned;

    /// DELETEs `path`, discarding the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport or status failure.
    async fn delete(&self, path: &str) -> Result<(), ResourceError>;

    /// GETs a `{"count": n}` endpoint and returns `n`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on transport, status or decoding failure.
    async fn count<Q>(&self, path: &str, options: Option<&Q>) -> Result<u64, ResourceError>
    where
        Q: Serialize + Sync + ?Sized,
    {
        let envelope: CountEnvelope = self.get(path, options).await?;
        Ok(envelope.count)
    }
}

#[derive(Debug, Deserialize)]
struct CountEnvelope {
    count: u64,
}

impl ResourceClient for RestClient {
    async fn get<T, Q>(&self, path: &str, options: Option<&Q>) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let response: ResourceResponse<T> = self.get_with_headers(path, options).await?;
        Ok(response.into_inner())
    }

    async fn get_with_headers<T, Q>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> Result<ResourceResponse<T>, ResourceError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let query = options
            .map(serialize_to_query)
            .transpose()?
            .unwrap_or_default();
        let response = self
            .request(HttpMethod::Get, path, None, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, path))?;
        decode(response)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self
            .request(HttpMethod::Post, path, Some(body), Vec::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, path))?;
        Ok(decode::<T>(response)?.into_inner())
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ResourceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let response = self
            .request(HttpMethod::Put, path, Some(body), Vec::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, path))?;
        Ok(decode::<T>(response)?.into_inner())
    }

    async fn delete(&self, path: &str) -> Result<(), ResourceError> {
        self.request(HttpMethod::Delete, path, None, Vec::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, path))?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(
    mut response: HttpResponse,
) -> Result<ResourceResponse<T>, ResourceError> {
    let body = std::mem::take(&mut response.body);
    let data = serde_json::from_value(body)?;
    Ok(ResourceResponse::from_parts(data, response))
}

/// Flattens a `Serialize` options struct into query parameters.
///
/// `null` fields are skipped, arrays are joined with commas (`ids=1,2,3`)
/// and empty arrays are dropped. Parameters come out sorted by name.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if `params` cannot be
/// represented as JSON.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::{serialize_to_query, ListOptions};
///
/// let options = ListOptions {
///     limit: Some(50),
///     ids: Some(vec![1, 2, 3]),
///     ..Default::default()
/// };
/// let query = serialize_to_query(&options).unwrap();
/// assert_eq!(
///     query,
///     vec![
///         ("ids".to_string(), "1,2,3".to_string()),
///         ("limit".to_string(), "50".to_string()),
///     ]
/// );
/// ```
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<Vec<(String, String)>, ResourceError> {
    let mut query = Vec::new();

    if let Value::Object(map) = serde_json::to_value(params)? {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => query.push((key, s)),
                Value::Number(n) => query.push((key, n.to_string())),
                Value::Bool(b) => query.push((key, b.to_string())),
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.push((key, values.join(",")));
                    }
                }
                Value::Object(_) => query.push((key, val.to_string())),
            }
        }
    }

    query.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(query)
}
