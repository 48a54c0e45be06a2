// 错误类型定义
// 区分配置错误、参数缺失错误与传输层错误

use thiserror::Error;

use crate::models::TransactionAction;

/// 网关操作的结果类型
pub type Result<T> = std::result::Result<T, GatewayError>;

/// 网关错误
///
/// 业务层面的失败 (拒付、卡过期等) 不属于错误，
/// 它们以 `success = false` 的正常响应返回。
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 网关配置无效 (商户号为空、币种代码非法、编码无法识别)
    #[error("Invalid gateway configuration: {0}")]
    Configuration(String),

    /// 交易缺少必需参数，在发起网络请求之前抛出
    #[error("Missing required parameters for {action}: {}", .missing.join(", "))]
    MissingParameter {
        action: TransactionAction,
        missing: Vec<&'static str>,
    },

    /// 文本字段无法用配置的旧式编码表示，在发起网络请求之前抛出
    #[error("Field {field} contains characters not representable in {encoding}")]
    Encoding {
        field: &'static str,
        encoding: &'static str,
    },

    /// 传输层错误，原样向调用方传播，不做重试
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP请求失败 (连接、超时、TLS等)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// 网关返回了非2xx状态码
    #[error("Gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// HTTP客户端构建失败
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl GatewayError {
    /// 是否为发起请求前的参数校验错误
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, GatewayError::MissingParameter { .. })
    }
}
