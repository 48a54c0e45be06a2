// 响应报文解析工具
// 网关响应为 key=value&key=value 文本，末尾带有最多两个控制字符

use std::collections::BTreeMap;

/// 去掉报文末尾最多两个控制字符
///
/// `\r\n` 算作一个字符，与网关的换行习惯保持一致；
/// 末尾不是控制字符时不做处理。
pub fn strip_trailer(body: &str) -> &str {
    let mut body = body;
    for _ in 0..2 {
        if let Some(stripped) = body.strip_suffix("\r\n") {
            body = stripped;
            continue;
        }
        match body.chars().last() {
            Some(c) if c.is_control() => body = &body[..body.len() - c.len_utf8()],
            _ => break,
        }
    }
    body
}

/// 解析网关响应
///
/// 报文按 `&` 和 `=` 统一切分为一个扁平的记号序列，再两两配对；
/// 重复字段以后出现的为准。记号数量为奇数 (例如网关返回了HTML错误页)
/// 或报文为空时返回空表，由后续的结果判定自然得到失败。
///
/// # Arguments
/// * `body` - 原始响应文本
///
/// # Returns
/// * 响应字段
pub fn parse_response(body: &str) -> BTreeMap<String, String> {
    let body = strip_trailer(body);
    if body.is_empty() {
        return BTreeMap::new();
    }

    let tokens: Vec<&str> = body.split(['&', '=']).collect();
    if tokens.len() % 2 != 0 {
        log::debug!(
            "Response body is not a list of key=value pairs ({} tokens)",
            tokens.len()
        );
        return BTreeMap::new();
    }

    tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}
