//! HTTP 会话
//!
//! 基于 `reqwest` 阻塞客户端获取外部资源。会话在创建时确定超时与 User-Agent，
//! 之后只读使用，逐个请求顺序执行。
//!
//! 资源获取通过 [`AssetFetcher`] 抽象，测试中可以替换为不访问网络的实现。

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use std::time::Duration;
use thiserror::Error;

use crate::utils::url::{get_referer_url, Url};

/// Timeout applied when none is configured, in seconds
pub const DEFAULT_TIMEOUT: u64 = 60;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:135.0) Gecko/20100101 Firefox/135.0";

/// Why a single resource could not be retrieved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("unable to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("unable to read body of {url}: {reason}")]
    Body { url: String, reason: String },
}

/// Source of remote resources
pub trait AssetFetcher {
    /// Retrieves the full body of `url`; anything but a complete 2xx response is an error
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// Network session used to download scripts
pub struct Session {
    client: Client,
    referer: Option<HeaderValue>,
}

impl Session {
    /// 创建会话
    ///
    /// # 参数
    ///
    /// * `timeout` - 单个请求的超时秒数，`0` 表示不限制
    /// * `user_agent` - 自定义 User-Agent，未指定时使用 [`DEFAULT_USER_AGENT`]
    pub fn new(timeout: u64, user_agent: Option<&str>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let agent = user_agent.unwrap_or(DEFAULT_USER_AGENT);
        let agent = HeaderValue::from_str(agent).map_err(|e| FetchError::Client(e.to_string()))?;
        headers.insert(USER_AGENT, agent);

        let mut builder = Client::builder().default_headers(headers);
        if timeout > 0 {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            referer: None,
        })
    }

    /// Sends the URL of the referring document with every request.
    ///
    /// Without a document URL no `Referer` header is sent.
    pub fn with_referer(mut self, document_url: Option<&Url>) -> Self {
        // Referer 中不能携带凭据与片段
        self.referer = document_url
            .and_then(|url| HeaderValue::from_str(get_referer_url(url.clone()).as_str()).ok());
        self
    }

    pub fn referer(&self) -> Option<&str> {
        self.referer.as_ref().and_then(|value| value.to_str().ok())
    }
}

impl AssetFetcher for Session {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let mut request = self.client.get(url.as_str());
        if let Some(referer) = &self.referer {
            request = request.header(REFERER, referer.clone());
        }

        let response = request.send().map_err(|e| FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| FetchError::Body {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
