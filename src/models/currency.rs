// 币种与信用类型定义
// 对应网关报文中的 currency 与 cred_type 字段

use serde::{Deserialize, Serialize};
use std::fmt;

/// 网关支持的币种代码
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum CurrencyCode {
    /// 以色列新谢克尔
    Shekel,
    /// 美元
    UsDollar,
    /// 英镑
    PoundSterling,
    /// 谢克尔交易，分期付款挂钩美元
    ShekelDollarLinked,
    /// 港币
    HongKongDollar,
    /// 日元
    Yen,
    /// 欧元
    Euro,
    /// 挂钩物价指数的分期付款交易
    IndexLinked,
}

impl CurrencyCode {
    /// 全部币种，按代码顺序排列
    pub const ALL: [CurrencyCode; 8] = [
        CurrencyCode::Shekel,
        CurrencyCode::UsDollar,
        CurrencyCode::PoundSterling,
        CurrencyCode::ShekelDollarLinked,
        CurrencyCode::HongKongDollar,
        CurrencyCode::Yen,
        CurrencyCode::Euro,
        CurrencyCode::IndexLinked,
    ];

    /// 报文中使用的数字代码
    pub fn code(self) -> u8 {
        match self {
            CurrencyCode::Shekel => 1,
            CurrencyCode::UsDollar => 2,
            CurrencyCode::PoundSterling => 3,
            CurrencyCode::ShekelDollarLinked => 4,
            CurrencyCode::HongKongDollar => 5,
            CurrencyCode::Yen => 6,
            CurrencyCode::Euro => 7,
            CurrencyCode::IndexLinked => 8,
        }
    }

    /// 是否需要走多币种接口
    ///
    /// 谢克尔、美元及挂钩美元的谢克尔交易走谢克尔/美元接口，其余走多币种接口
    pub fn is_multicurrency(self) -> bool {
        !matches!(
            self,
            CurrencyCode::Shekel | CurrencyCode::UsDollar | CurrencyCode::ShekelDollarLinked
        )
    }
}

impl TryFrom<u8> for CurrencyCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| format!("unsupported currency code {} (expected 1-8)", code))
    }
}

impl From<CurrencyCode> for u8 {
    fn from(currency: CurrencyCode) -> Self {
        currency.code()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 信用类型 (cred_type)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum CreditType {
    /// 普通信用
    Regular,
    /// Isracredit、Visa Adif/30+、Amex Credit、Diners Adif/30+
    Isracredit,
    /// 即时借记
    ImmediateDebit,
    /// 会员信用
    ClubCredit,
    /// Leumi特殊信用
    LeumiSpecial,
    /// Visa credit、Diners credit、Isra36、Amex 36
    Credit,
    /// 分期付款
    Installments,
    /// 会员分期付款
    ClubInstallments,
}

impl CreditType {
    /// 报文中使用的数字代码
    pub fn code(self) -> u8 {
        match self {
            CreditType::Regular => 1,
            CreditType::Isracredit => 2,
            CreditType::ImmediateDebit => 3,
            CreditType::ClubCredit => 4,
            CreditType::LeumiSpecial => 5,
            CreditType::Credit => 6,
            CreditType::Installments => 8,
            CreditType::ClubInstallments => 9,
        }
    }
}

impl TryFrom<u8> for CreditType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CreditType::Regular),
            2 => Ok(CreditType::Isracredit),
            3 => Ok(CreditType::ImmediateDebit),
            4 => Ok(CreditType::ClubCredit),
            5 => Ok(CreditType::LeumiSpecial),
            6 => Ok(CreditType::Credit),
            8 => Ok(CreditType::Installments),
            9 => Ok(CreditType::ClubInstallments),
            other => Err(format!("unsupported credit type {}", other)),
        }
    }
}

impl From<CreditType> for u8 {
    fn from(cred_type: CreditType) -> Self {
        cred_type.code()
    }
}

impl fmt::Display for CreditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_round_trip_codes() {
        for code in 1..=8u8 {
            let currency = CurrencyCode::try_from(code).unwrap();
            assert_eq!(currency.code(), code);
        }
        assert!(CurrencyCode::try_from(0).is_err());
        assert!(CurrencyCode::try_from(9).is_err());
    }

    #[test]
    fn test_multicurrency_classification() {
        for code in [1u8, 2, 4] {
            assert!(!CurrencyCode::try_from(code).unwrap().is_multicurrency());
        }
        for code in [3u8, 5, 6, 7, 8] {
            assert!(CurrencyCode::try_from(code).unwrap().is_multicurrency());
        }
    }

    #[test]
    fn test_credit_type_codes() {
        assert_eq!(CreditType::Regular.to_string(), "1");
        assert_eq!(CreditType::ClubInstallments.to_string(), "9");
        assert!(CreditType::try_from(7).is_err());
        assert_eq!(CreditType::try_from(8).unwrap(), CreditType::Installments);
    }

    #[test]
    fn test_currency_serde_as_number() {
        let json = serde_json::to_string(&CurrencyCode::Euro).unwrap();
        assert_eq!(json, "7");
        let parsed: CurrencyCode = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, CurrencyCode::ShekelDollarLinked);
        assert!(serde_json::from_str::<CurrencyCode>("12").is_err());
    }
}
