// 配置管理模块
// 负责加载和校验网关的商户配置与HTTP客户端配置

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::GatewayError;
use crate::models::CurrencyCode;
use crate::utils::{validate_supplier, TextEncoding, DEFAULT_TEXT_ENCODING};

/// 网关配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// 商户号 (Tranzila终端名称)
    pub supplier: String,
    /// 币种代码 (1-8)
    pub currency: u8,
    /// 测试模式，网关没有独立的测试地址，测试时使用测试商户号
    #[serde(default)]
    pub test_mode: bool,
    /// 文本字段使用的编码标签
    #[serde(default = "default_text_encoding")]
    pub text_encoding: String,
    /// HTTP客户端配置
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// 请求超时时间 (秒)
    pub timeout: u64,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout: 30,
            user_agent: default_user_agent(),
        }
    }
}

fn default_text_encoding() -> String {
    DEFAULT_TEXT_ENCODING.to_string()
}

fn default_user_agent() -> String {
    format!("tranzila-gateway/{}", env!("CARGO_PKG_VERSION"))
}

impl GatewayConfig {
    /// 使用默认的编码和HTTP配置创建网关配置
    pub fn new(supplier: impl Into<String>, currency: u8) -> Self {
        GatewayConfig {
            supplier: supplier.into(),
            currency,
            test_mode: false,
            text_encoding: default_text_encoding(),
            http: HttpConfig::default(),
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // 加载.env文件，忽略错误

        let config = GatewayConfig {
            supplier: env::var("TRANZILA_SUPPLIER")
                .context("TRANZILA_SUPPLIER environment variable is required")?,
            currency: env::var("TRANZILA_CURRENCY")
                .context("TRANZILA_CURRENCY environment variable is required")?
                .trim()
                .parse()
                .context("Invalid TRANZILA_CURRENCY")?,
            test_mode: env::var("TRANZILA_TEST_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .trim()
                .parse()
                .context("Invalid TRANZILA_TEST_MODE")?,
            text_encoding: env::var("TRANZILA_TEXT_ENCODING")
                .unwrap_or_else(|_| default_text_encoding()),
            http: HttpConfig {
                timeout: env::var("TRANZILA_HTTP_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .trim()
                    .parse()
                    .context("Invalid TRANZILA_HTTP_TIMEOUT")?,
                user_agent: env::var("TRANZILA_USER_AGENT")
                    .unwrap_or_else(|_| default_user_agent()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> std::result::Result<(), GatewayError> {
        validate_supplier(&self.supplier).map_err(GatewayError::Configuration)?;
        self.currency_code()?;
        self.encoding()?;

        if self.http.timeout == 0 {
            return Err(GatewayError::Configuration(
                "HTTP timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// 解析币种代码
    pub fn currency_code(&self) -> std::result::Result<CurrencyCode, GatewayError> {
        CurrencyCode::try_from(self.currency).map_err(GatewayError::Configuration)
    }

    /// 解析文本编码
    pub fn encoding(&self) -> std::result::Result<TextEncoding, GatewayError> {
        TextEncoding::for_label(&self.text_encoding).ok_or_else(|| {
            GatewayError::Configuration(format!(
                "unknown text encoding '{}'",
                self.text_encoding
            ))
        })
    }
}
