// HTTP传输服务
// 负责把请求报文POST到网关并取回响应文本，不做任何重试

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::TransportError;

/// 请求报文的Content-Type
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 传输层抽象
///
/// 网关只依赖这一个操作：POST报文并返回响应文本。
/// 超时、取消与重试策略都属于传输层实现。
pub trait Transport: Send + Sync {
    /// 发送POST请求
    ///
    /// # Arguments
    /// * `url` - 网关地址
    /// * `body` - 已序列化的请求报文
    ///
    /// # Returns
    /// * 响应文本
    fn post<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send + 'a;
}

impl<T: Transport> Transport for Arc<T> {
    fn post<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send + 'a {
        (**self).post(url, body)
    }
}

/// 基于reqwest的HTTP传输
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 根据配置创建HTTP传输
    ///
    /// # Arguments
    /// * `config` - 超时与User-Agent配置
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// 使用已有的reqwest客户端
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post<'a>(&'a self, url: &'a str, body: Vec<u8>) -> Result<String, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
