// 交易响应数据模型
// 把网关返回的字段归一化为成功标志、描述信息、授权码和CVV结果

use serde::Serialize;
use std::collections::BTreeMap;

use crate::utils::response_message;

/// 表示交易成功的响应码
pub const APPROVED_CODE: &str = "000";

/// 归一化后的交易结果
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionResponse {
    /// 网关返回的全部字段，重复字段以后出现的为准
    pub params: BTreeMap<String, String>,
    /// 交易是否成功
    pub success: bool,
    /// 响应码对应的描述，未知响应码时为空
    pub message: Option<String>,
    /// 网关确认码，可用于后续的预授权完成或退款
    pub authorization: Option<String>,
    /// CVV校验结果
    pub cvv_result: Option<String>,
    /// 网关是否处于测试模式 (来自配置，与响应内容无关)
    pub test: bool,
}

impl TransactionResponse {
    /// 根据解析后的字段构建交易结果
    ///
    /// # Arguments
    /// * `params` - 解析后的响应字段
    /// * `test` - 网关测试模式标志
    pub fn from_params(params: BTreeMap<String, String>, test: bool) -> Self {
        let code = params.get("Response").map(String::as_str);
        let success = code == Some(APPROVED_CODE);
        let message = code.and_then(response_message).map(str::to_string);
        let authorization = params.get("ConfirmationCode").cloned();
        let cvv_result = params.get("CVVstatus").cloned();

        Self {
            params,
            success,
            message,
            authorization,
            cvv_result,
            test,
        }
    }

    /// 网关响应码
    pub fn response_code(&self) -> Option<&str> {
        self.param("Response")
    }

    /// 网关交易序号，退款时需要
    pub fn transaction_index(&self) -> Option<&str> {
        self.param("index")
    }

    /// 读取任意响应字段
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
