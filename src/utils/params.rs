// 请求报文构建工具
// 按交易类型组装有序的 key=value 字段，并序列化为网关要求的报文

use rust_decimal::Decimal;

use crate::error::{GatewayError, Result};
use crate::models::{CurrencyCode, TransactionKind, TransactionRequest};
use crate::utils::TextEncoding;

/// 有序的请求字段列表
///
/// 网关不使用标准的百分号编码，字段值按原样拼接，
/// 文本字段可能包含旧式编码的非UTF-8字节。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pairs: Vec<(&'static str, Vec<u8>)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个字段，已存在的同名字段会被覆盖并保留原位置
    pub fn push(&mut self, key: &'static str, value: impl Into<Vec<u8>>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// 读取字段值
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// 字段名称，按发送顺序
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 序列化为 `key=value&key=value` 报文
    pub fn to_body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                body.push(b'&');
            }
            body.extend_from_slice(key.as_bytes());
            body.push(b'=');
            body.extend_from_slice(value);
        }
        body
    }
}

/// 把最小货币单位金额格式化为两位小数的主单位金额
///
/// # Arguments
/// * `amount` - 金额 (分/阿格拉)
///
/// # Returns
/// * 例如 100 -> "1.00"
pub fn format_amount(amount: i64) -> String {
    Decimal::new(amount, 2).to_string()
}

/// 商户级别的公共字段来源
#[derive(Debug, Clone, Copy)]
pub struct MerchantParams<'a> {
    pub supplier: &'a str,
    pub currency: CurrencyCode,
    pub encoding: TextEncoding,
}

/// 构建交易请求字段
///
/// 交易类型特有的字段在前，公共字段在后，字段顺序固定，
/// 相同输入总是得到相同的报文。
///
/// # Arguments
/// * `request` - 校验后的交易请求
/// * `merchant` - 商户号、币种与文本编码
///
/// # Returns
/// * 有序的请求字段；文本字段无法用商户编码表示时返回 `Encoding` 错误
pub fn build_params(
    request: &TransactionRequest<'_>,
    merchant: &MerchantParams<'_>,
) -> Result<RequestParams> {
    let mut params = RequestParams::new();

    match request.kind {
        TransactionKind::Purchase(_) => {}
        TransactionKind::Authorize(_) => {
            params.push("task", "Doverify").push("tranmode", "V");
        }
        TransactionKind::Capture {
            confirmation_code, ..
        } => {
            params
                .push("task", "Doforce")
                .push("tranmode", "F")
                .push("authnr", confirmation_code);
        }
        TransactionKind::Refund {
            index,
            confirmation_code,
            ..
        } => {
            params
                .push("tranmode", format!("C{}", index))
                .push("authnr", confirmation_code);
        }
    }

    let card = request.card;
    params
        .push("sum", format_amount(request.amount))
        .push("ccno", card.number.as_str())
        .push("expyear", card.short_year())
        .push("expmonth", card.month.as_str())
        .push("expdate", card.expiry_date())
        .push("mycvv", card.verification_value.as_str());

    let (cred_type, national_id) = match request.kind {
        TransactionKind::Purchase(holder) | TransactionKind::Authorize(holder) => {
            (Some(holder.cred_type), Some(holder.national_id))
        }
        TransactionKind::Capture { cardholder, .. } => {
            (Some(cardholder.cred_type), Some(cardholder.national_id))
        }
        TransactionKind::Refund {
            cred_type,
            national_id,
            ..
        } => (cred_type, national_id),
    };

    // 退款可以不带持卡人信息，此时发送空值
    params
        .push(
            "cred_type",
            cred_type.map(|c| c.to_string()).unwrap_or_default(),
        )
        .push("currency", merchant.currency.to_string())
        .push("myid", national_id.unwrap_or_default())
        .push("supplier", merchant.supplier);

    // 分期付款字段 (fpay/spay/npay) 暂不支持
    let free_text = request.free_text;
    for (key, value) in [
        ("email", free_text.email),
        ("company", free_text.company),
        ("contact", free_text.contact),
    ] {
        if let Some(value) = value {
            let bytes = merchant
                .encoding
                .encode(value)
                .ok_or(GatewayError::Encoding {
                    field: key,
                    encoding: merchant.encoding.name(),
                })?;
            params.push(key, bytes);
        }
    }

    Ok(params)
}
