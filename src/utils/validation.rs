// 交易参数验证工具函数
// 在发起网络请求之前检查交易所需的选项是否齐全

use crate::models::{TransactionAction, TransactionOptions};

/// 列出交易缺少的必需选项
///
/// # Arguments
/// * `action` - 交易类型
/// * `options` - 调用方提供的交易选项
///
/// # Returns
/// * 缺少的选项名称，按必需选项的声明顺序排列
pub fn missing_options(action: TransactionAction, options: &TransactionOptions) -> Vec<&'static str> {
    action
        .required_options()
        .iter()
        .filter(|key| !options.has(**key))
        .map(|key| key.name())
        .collect()
}

/// 验证商户号
pub fn validate_supplier(supplier: &str) -> Result<(), String> {
    if supplier.trim().is_empty() {
        return Err("supplier cannot be empty".to_string());
    }

    // 商户号会原样拼进报文
    if supplier.contains(['&', '=']) {
        return Err("supplier contains forbidden characters".to_string());
    }

    Ok(())
}
