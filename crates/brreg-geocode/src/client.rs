//! HTTP client for Nominatim-style forward and reverse geocoding.

use std::time::Duration;

use brreg_core::{Coordinates, PinnedAddress};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{ReverseResponse, SearchHit};

const PINNED_FALLBACK_LABEL: &str = "Pinned location";

/// Client for a Nominatim-compatible geocoder.
///
/// Nominatim's usage policy requires an identifying user agent.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a client for the geocoder rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeocodeError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Resolves free-text `query` to its best match, or `None`.
    ///
    /// Never fails: transport, status and parse errors are logged and
    /// reported as "no coordinates".
    pub async fn forward(&self, query: &str) -> Option<Coordinates> {
        match self.try_forward(query).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(query, error = %e, "forward geocode failed");
                None
            }
        }
    }

    /// Like [`GeocodeClient::forward`] but surfaces the failure.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not a hit list.
    /// - [`GeocodeError::InvalidCoordinate`] if a hit carries non-numeric
    ///   coordinates.
    pub async fn try_forward(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = self.build_url(
            "search",
            &[("format", "json"), ("q", query), ("limit", "1")],
        );
        let body = self.request_body(&url).await?;
        let hits: Vec<SearchHit> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let Some(hit) = hits.into_iter().next() else {
            tracing::debug!(query, "forward geocode returned no hits");
            return Ok(None);
        };
        let lat = parse_coordinate(&hit.lat)?;
        let lng = parse_coordinate(&hit.lon)?;
        Ok(Some(Coordinates::new(lat, lng)))
    }

    /// Looks up the address nearest to `coordinates`.
    ///
    /// Returns `Ok(None)` when the service has no label for the spot.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<PinnedAddress>, GeocodeError> {
        let lat = coordinates.lat.to_string();
        let lon = coordinates.lng.to_string();
        let url = self.build_url(
            "reverse",
            &[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("addressdetails", "1"),
            ],
        );
        let body = self.request_body(&url).await?;
        let response: ReverseResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse(lat={lat}, lon={lon})"),
                source: e,
            })?;

        Ok(pinned_from_reverse(coordinates, &response))
    }

    fn build_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(endpoint);
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    async fn request_body(&self, url: &Url) -> Result<String, GeocodeError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate(raw.to_string()))
}

/// Builds the pinned-address guess for a reverse lookup.
///
/// The street label falls back from road and house number, to suburb, to
/// city, to the leading parts of the full display name.
pub(crate) fn pinned_from_reverse(
    coordinates: Coordinates,
    response: &ReverseResponse,
) -> Option<PinnedAddress> {
    let display_name = response
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())?;
    let address = &response.address;

    let street = address
        .street()
        .or_else(|| address.locality().map(str::to_string))
        .or_else(|| address.city().map(str::to_string))
        .unwrap_or_else(|| leading_parts(display_name, 3));
    let street = if street.trim().is_empty() {
        let short = display_name
            .split(", ")
            .take(2)
            .collect::<Vec<_>>()
            .join(", ");
        if short.trim().is_empty() {
            PINNED_FALLBACK_LABEL.to_string()
        } else {
            short
        }
    } else {
        street
    };

    Some(PinnedAddress {
        coordinates,
        display_name: display_name.to_string(),
        street: street.trim().to_string(),
        postal_code: address.postcode().unwrap_or_default().to_string(),
        city: address.city().unwrap_or_default().to_string(),
    })
}

fn leading_parts(display_name: &str, n: usize) -> String {
    display_name
        .split(", ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .take(n)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
