// 信用卡数据模型
// 只负责提供报文需要的字段，卡号校验由调用方完成

use serde::{Deserialize, Serialize};
use std::fmt;

/// 信用卡信息
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditCard {
    /// 卡号
    pub number: String,
    /// 有效期月份 (按调用方提供的原样发送，例如 "09")
    pub month: String,
    /// 有效期年份 (两位或四位)
    pub year: String,
    /// CVV校验码
    pub verification_value: String,
}

impl CreditCard {
    /// 创建信用卡信息
    pub fn new(
        number: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
        verification_value: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            month: month.into(),
            year: year.into(),
            verification_value: verification_value.into(),
        }
    }

    /// 两位年份，对应报文中的 `expyear`
    ///
    /// 年份不足两位时返回空字符串，由网关拒绝该卡
    pub fn short_year(&self) -> &str {
        let year = self.year.trim();
        match year.char_indices().rev().nth(1) {
            Some((idx, _)) => &year[idx..],
            None => "",
        }
    }

    /// 月份与两位年份拼接的有效期，对应报文中的 `expdate`
    pub fn expiry_date(&self) -> String {
        format!("{}{}", self.month, self.short_year())
    }

    /// 掩码后的卡号，用于日志输出
    pub fn masked_number(&self) -> String {
        mask_card_number(&self.number)
    }
}

// 日志与调试输出中不暴露完整卡号和CVV
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &self.masked_number())
            .field("month", &self.month)
            .field("year", &self.year)
            .field("verification_value", &"***")
            .finish()
    }
}

/// 卡号掩码，只保留最后四位
///
/// # Arguments
/// * `number` - 原始卡号
///
/// # Returns
/// * 形如 `************1111` 的字符串
pub fn mask_card_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    let visible = digits.len().min(4);
    let hidden = digits.len() - visible;

    std::iter::repeat('*')
        .take(hidden)
        .chain(digits[hidden..].iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_year_and_expiry_date() {
        let card = CreditCard::new("4444333322221111", "09", "2015", "333");
        assert_eq!(card.short_year(), "15");
        assert_eq!(card.expiry_date(), "0915");

        let short = CreditCard::new("4444333322221111", "9", "15", "123");
        assert_eq!(short.short_year(), "15");
        assert_eq!(short.expiry_date(), "915");

        let single = CreditCard::new("4444333322221111", "12", "7", "123");
        assert_eq!(single.short_year(), "");
        assert_eq!(single.expiry_date(), "12");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4444333322221111"), "************1111");
        assert_eq!(mask_card_number("123"), "123");
        assert_eq!(mask_card_number(""), "");
    }

    #[test]
    fn test_debug_hides_sensitive_fields() {
        let card = CreditCard::new("4444333322221111", "09", "2015", "333");
        let debug = format!("{:?}", card);
        assert!(!debug.contains("4444333322221111"));
        assert!(debug.contains("verification_value: \"***\""));
        assert!(debug.contains("************1111"));
    }
}
