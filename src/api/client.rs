use crate::api::models::{Language, ResponseFormat};
use crate::api::params::{MetaInfoParams, StatsDataParams, StatsListParams};
use crate::error::{ApiError, ValidationError};
use crate::utils::text::mask_app_id;
use crate::{AppError, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

const BASE_URL: &str = "https://api.e-stat.go.jp/rest/3.0/app/";
const VERSION: &str = "e-Stat API version 3.0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("estat-cli/", env!("CARGO_PKG_VERSION"));

/// Client for the e-Stat REST v3.0 API.
///
/// Holds the connection-level configuration (appId credential, result
/// language, response format) and issues GET requests against the fixed
/// set of remote operations. Response bodies come back as text exactly
/// as the remote sent them; this layer performs no retry and no
/// status-code interpretation.
pub struct EstatClient {
    client: Client,
    app_id: String,
    lang: Language,
    format: ResponseFormat,
    base_url: String,
}

impl EstatClient {
    /// Create a client with the default request timeout.
    ///
    /// `lang` and `format` are validated and normalized here; the same
    /// validation re-runs on every later mutation through the setters.
    /// `gzip` controls whether the transport negotiates compressed
    /// responses.
    pub fn new(app_id: String, lang: &str, format: &str, gzip: bool) -> Result<Self> {
        Self::with_timeout(app_id, lang, format, gzip, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        app_id: String,
        lang: &str,
        format: &str,
        gzip: bool,
        timeout_secs: u64,
    ) -> Result<Self> {
        let lang = Language::parse(lang)?;
        let format = ResponseFormat::parse(format)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .gzip(gzip)
            .build()
            .map_err(ApiError::Request)?;

        Ok(EstatClient {
            client,
            app_id,
            lang,
            format,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint root. Used by tests and
    /// mirror deployments; the production constant is the default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn set_lang(&mut self, lang: &str) -> Result<()> {
        self.lang = Language::parse(lang)?;
        Ok(())
    }

    pub fn set_format(&mut self, format: &str) -> Result<()> {
        self.format = ResponseFormat::parse(format)?;
        Ok(())
    }

    /// Search the statistics table catalog.
    pub async fn get_stats_list(&self, params: &StatsListParams) -> Result<String> {
        self.require_callback(params.callback.as_deref())?;
        self.request("getStatsList", params.query_pairs()).await
    }

    /// Fetch the meta information for one statistics table.
    pub async fn get_meta_info(&self, params: &MetaInfoParams) -> Result<String> {
        self.require_callback(params.callback.as_deref())?;
        self.request("getMetaInfo", params.query_pairs()).await
    }

    /// Fetch statistics data for a table or dataset.
    pub async fn get_stats_data(&self, params: &StatsDataParams) -> Result<String> {
        self.require_callback(params.callback.as_deref())?;
        let pairs = params.query_pairs(self.format == ResponseFormat::Csv);
        self.request("getStatsData", pairs).await
    }

    /// Dataset registration is not offered by this client.
    pub fn post_dataset(&self) -> Result<String> {
        Err(unsupported("postDataset"))
    }

    /// Declared by the remote API but not implemented here.
    pub fn ref_dataset(&self) -> Result<String> {
        Err(unsupported("refDataset"))
    }

    /// Declared by the remote API but not implemented here.
    pub fn get_data_catalog(&self) -> Result<String> {
        Err(unsupported("getDataCatalog"))
    }

    /// Declared by the remote API but not implemented here.
    pub fn get_stats_datas(&self) -> Result<String> {
        Err(unsupported("getStatsDatas"))
    }

    /// JSONP responses are wrapped in a caller-named function, so the
    /// callback argument is mandatory under that format.
    fn require_callback(&self, callback: Option<&str>) -> Result<()> {
        if self.format == ResponseFormat::Jsonp && callback.is_none() {
            return Err(ValidationError::CallbackRequired.into());
        }
        Ok(())
    }

    /// Compute the URL path segment for an operation under the current
    /// response format. csv endpoints are published under a "Simple"
    /// name ("getStatsData" → "getSimpleStatsData").
    fn path_for(&self, operation: &str) -> String {
        match self.format {
            ResponseFormat::Xml => operation.to_string(),
            ResponseFormat::Json | ResponseFormat::Jsonp => {
                format!("{}/{}", self.format.as_str(), operation)
            }
            ResponseFormat::Csv => {
                let (head, tail) = operation.split_at(3);
                format!("{}Simple{}", head, tail)
            }
        }
    }

    /// Issue the GET request and return the body as text.
    ///
    /// The stored credential goes last as `appId`, replacing any
    /// caller-supplied pair of the same name. Non-2xx bodies are
    /// returned as-is; only transport failures surface as errors.
    async fn request(&self, operation: &str, mut pairs: Vec<(String, String)>) -> Result<String> {
        pairs.retain(|(key, _)| key != "appId");
        pairs.push(("appId".to_string(), self.app_id.clone()));

        let url = format!("{}{}", self.base_url, self.path_for(operation));
        let response = self
            .client
            .get(&url)
            .query(&pairs)
            .send()
            .await
            .map_err(ApiError::Request)?;

        Ok(response.text().await.map_err(ApiError::Request)?)
    }
}

fn unsupported(operation: &str) -> AppError {
    ApiError::Unsupported {
        operation: operation.to_string(),
    }
    .into()
}

impl fmt::Display for EstatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nappId: {}\nformat: {}\nlang: {}",
            VERSION,
            mask_app_id(&self.app_id),
            self.format.as_str(),
            self.lang.as_str()
        )
    }
}

// Manual impl so the credential never reaches debug logs.
impl fmt::Debug for EstatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstatClient")
            .field("app_id", &mask_app_id(&self.app_id))
            .field("lang", &self.lang)
            .field("format", &self.format)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
