use crate::config::Config;
use crate::models::{
    archive::Archive,
    area::Area,
    error::AppError,
    place::{AddressKey, Place},
    property::{Property, PropertyDetail, PropertyId},
    user::{Credentials, LoginOutcome, Session, UserDetails},
};
use crate::services::retry::retry_with_backoff;
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_BASE_URL)
}

// API CONFIGURATION
/// Configuration for the housing API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins percent-encoded path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{}': {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| AppError::ConfigError(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub fn vacancies_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["vacancies"])
    }

    pub fn vacancy_url(&self, id: PropertyId) -> Result<Url, AppError> {
        self.endpoint(&["vacancies", &id.to_string()])
    }

    pub fn floorplan_url(&self, id: PropertyId) -> Result<Url, AppError> {
        self.endpoint(&["vacancies", &id.to_string(), "floorplan"])
    }

    pub fn area_url(&self, name: &str) -> Result<Url, AppError> {
        self.endpoint(&["areas", name])
    }

    pub fn user_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["user"])
    }

    pub fn login_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["login"])
    }

    pub fn logout_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["logout"])
    }

    pub fn geocode_url(&self, address: &AddressKey) -> Result<Url, AppError> {
        let mut url = self.endpoint(&["geocode"])?;
        url.query_pairs_mut()
            .append_pair("street", &address.street)
            .append_pair("postalcode", &address.postal_code)
            .append_pair("city", &address.city);
        Ok(url)
    }

    pub fn archive_url(&self, max: u32) -> Result<Url, AppError> {
        let mut url = self.endpoint(&["archive"])?;
        url.query_pairs_mut().append_pair("max", &max.to_string());
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| default_base_url().to_string()),
        }
    }
}

/// Sends the session cookie along with cross-origin requests.
fn with_session(request: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

// HOUSING CLIENT
/// HTTP client for the housing API.
pub struct HousingClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HousingClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches every listed vacancy.
    pub async fn list_vacancies(&self) -> Result<Vec<Property>, AppError> {
        self.get_json(self.config.vacancies_url()?).await
    }

    /// Fetches a single vacancy with its detail fields.
    pub async fn vacancy(&self, id: PropertyId) -> Result<PropertyDetail, AppError> {
        self.get_json(self.config.vacancy_url(id)?).await
    }

    /// Fetches an area's picture gallery.
    pub async fn area(&self, name: &str) -> Result<Area, AppError> {
        self.get_json(self.config.area_url(name)?).await
    }

    /// Looks up the signed-in user. Any non-success status means signed out.
    pub async fn current_session(&self) -> Result<Session, AppError> {
        let response = with_session(self.http.get(self.config.user_url()?))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        if !response.status().is_success() {
            return Ok(Session::Unauthenticated);
        }

        let user: UserDetails = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(Session::Authenticated(user))
    }

    /// Signs in. A 403 is a normal outcome, not an error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, AppError> {
        let response = with_session(self.http.post(self.config.login_url()?))
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Ok(LoginOutcome::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ApiError(format!(
                "Unexpected response from server ({status}): {body}"
            )));
        }

        let user: UserDetails = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        Ok(LoginOutcome::Success(user))
    }

    /// Ends the server-side session.
    pub async fn logout(&self) -> Result<(), AppError> {
        let response = with_session(self.http.get(self.config.logout_url()?))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        Ok(())
    }

    /// Resolves an address to coordinates; an empty answer is `NoResult`.
    pub async fn geocode(&self, address: &AddressKey) -> Result<Place, AppError> {
        let places: Vec<Place> = self.get_json(self.config.geocode_url(address)?).await?;

        places.into_iter().next().ok_or_else(|| {
            AppError::NoResult(format!(
                "{}, {} {}",
                address.street, address.postal_code, address.city
            ))
        })
    }

    /// Fetches queue history for properties at or above `max`.
    pub async fn archive(&self, max: u32) -> Result<Archive, AppError> {
        self.get_json(self.config.archive_url(max)?).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = with_session(self.http.get(url))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 => AppError::Unauthenticated,
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches all vacancies using default configuration.
pub async fn fetch_vacancies() -> Result<Vec<Property>, AppError> {
    let client = HousingClient::new()?;
    retry_with_backoff(|| client.list_vacancies(), Config::MAX_RETRY_ATTEMPTS).await
}

/// Fetches one vacancy using default configuration.
pub async fn fetch_vacancy(id: PropertyId) -> Result<PropertyDetail, AppError> {
    let client = HousingClient::new()?;
    retry_with_backoff(|| client.vacancy(id), Config::MAX_RETRY_ATTEMPTS).await
}

/// Fetches an area's pictures using default configuration.
pub async fn fetch_area(name: String) -> Result<Area, AppError> {
    let client = HousingClient::new()?;
    retry_with_backoff(|| client.area(&name), Config::MAX_RETRY_ATTEMPTS).await
}

/// Looks up the current session using default configuration.
pub async fn fetch_session() -> Result<Session, AppError> {
    HousingClient::new()?.current_session().await
}

/// Geocodes an address, retrying empty answers and failures.
pub async fn fetch_place(address: AddressKey) -> Result<Place, AppError> {
    let client = HousingClient::new()?;
    retry_with_backoff(|| client.geocode(&address), Config::MAX_RETRY_ATTEMPTS).await
}

/// Fetches the queue history using default configuration.
pub async fn fetch_archive(max: u32) -> Result<Archive, AppError> {
    let client = HousingClient::new()?;
    retry_with_backoff(|| client.archive(max), Config::MAX_RETRY_ATTEMPTS).await
}

/// Signs in using default configuration.
pub async fn login(credentials: Credentials) -> Result<LoginOutcome, AppError> {
    HousingClient::new()?.login(&credentials).await
}

/// Signs out using default configuration.
pub async fn logout() -> Result<(), AppError> {
    HousingClient::new()?.logout().await
}

/// Floorplan image location for `<img src>`.
pub fn floorplan_src(id: PropertyId) -> Option<String> {
    ApiConfig::default()
        .floorplan_url(id)
        .ok()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder().base_url("http://api.test").build()
    }

    #[test]
    fn test_config_builder_base_url() {
        assert_eq!(config().base_url(), "http://api.test");
    }

    #[test]
    fn test_vacancy_urls() {
        let config = config();
        assert_eq!(
            config.vacancies_url().unwrap().as_str(),
            "http://api.test/vacancies"
        );
        assert_eq!(
            config.vacancy_url(4711).unwrap().as_str(),
            "http://api.test/vacancies/4711"
        );
        assert_eq!(
            config.floorplan_url(4711).unwrap().as_str(),
            "http://api.test/vacancies/4711/floorplan"
        );
    }

    #[test]
    fn test_area_url_is_percent_encoded() {
        let url = config().area_url("Sparta/Nya Delphi").unwrap();
        assert_eq!(url.as_str(), "http://api.test/areas/Sparta%2FNya%20Delphi");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let config = ApiConfig::builder().base_url("http://api.test/v1/").build();
        assert_eq!(
            config.user_url().unwrap().as_str(),
            "http://api.test/v1/user"
        );
    }

    #[test]
    fn test_geocode_url_query() {
        let address = AddressKey {
            street: "Kämnärsvägen 5".to_string(),
            postal_code: "22646".to_string(),
            city: "Lund".to_string(),
        };
        let url = config().geocode_url(&address).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("street".to_string(), "Kämnärsvägen 5".to_string()),
                ("postalcode".to_string(), "22646".to_string()),
                ("city".to_string(), "Lund".to_string()),
            ]
        );
    }

    #[test]
    fn test_archive_url() {
        assert_eq!(
            config().archive_url(10).unwrap().as_str(),
            "http://api.test/archive?max=10"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::builder().base_url("not a url").build();
        assert!(matches!(
            config.vacancies_url(),
            Err(AppError::ConfigError(_))
        ));
    }
}
