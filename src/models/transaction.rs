// 交易请求数据模型
// 调用方传入的交易选项，以及按交易类型校验后得到的强类型请求

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GatewayError, Result};
use crate::models::{CreditCard, CreditType};
use crate::utils::missing_options;

/// 交易类型
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    /// 消费 (授权并立即扣款)
    Purchase,
    /// 预授权 (只冻结资金)
    Authorize,
    /// 预授权完成
    Capture,
    /// 退款
    Refund,
}

impl TransactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Purchase => "purchase",
            TransactionAction::Authorize => "authorize",
            TransactionAction::Capture => "capture",
            TransactionAction::Refund => "refund",
        }
    }

    /// 该交易类型必须提供的选项
    pub fn required_options(&self) -> &'static [OptionKey] {
        match self {
            TransactionAction::Purchase | TransactionAction::Authorize => {
                &[OptionKey::CredType, OptionKey::NationalId]
            }
            TransactionAction::Capture => &[
                OptionKey::CredType,
                OptionKey::NationalId,
                OptionKey::ConfirmationCode,
            ],
            TransactionAction::Refund => &[OptionKey::Index, OptionKey::ConfirmationCode],
        }
    }
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 交易选项名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    CredType,
    NationalId,
    ConfirmationCode,
    Index,
}

impl OptionKey {
    /// 选项名称，用于错误信息
    pub fn name(&self) -> &'static str {
        match self {
            OptionKey::CredType => "cred_type",
            OptionKey::NationalId => "national_id",
            OptionKey::ConfirmationCode => "confirmation_code",
            OptionKey::Index => "index",
        }
    }
}

/// 交易选项
///
/// 所有字段都是可选的，每种交易类型需要的字段见
/// [`TransactionAction::required_options`]。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionOptions {
    /// 信用类型
    pub cred_type: Option<CreditType>,
    /// 持卡人身份证号 (9位)
    pub national_id: Option<String>,
    /// 消费或预授权返回的确认码
    pub confirmation_code: Option<String>,
    /// 消费或预授权返回的交易序号
    pub index: Option<String>,
    /// 持卡人邮箱
    pub email: Option<String>,
    /// 公司名称
    pub company: Option<String>,
    /// 联系人
    pub contact: Option<String>,
}

impl TransactionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cred_type(mut self, cred_type: CreditType) -> Self {
        self.cred_type = Some(cred_type);
        self
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    pub fn confirmation_code(mut self, code: impl Into<String>) -> Self {
        self.confirmation_code = Some(code.into());
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// 检查某个选项是否已提供 (空白字符串视为未提供)
    pub fn has(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::CredType => self.cred_type.is_some(),
            OptionKey::NationalId => present(&self.national_id).is_some(),
            OptionKey::ConfirmationCode => present(&self.confirmation_code).is_some(),
            OptionKey::Index => present(&self.index).is_some(),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// 持卡人信用信息，消费、预授权和预授权完成都需要
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardholder<'a> {
    pub cred_type: CreditType,
    pub national_id: &'a str,
}

/// 按交易类型区分的请求内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind<'a> {
    Purchase(Cardholder<'a>),
    Authorize(Cardholder<'a>),
    Capture {
        cardholder: Cardholder<'a>,
        confirmation_code: &'a str,
    },
    Refund {
        index: &'a str,
        confirmation_code: &'a str,
        cred_type: Option<CreditType>,
        national_id: Option<&'a str>,
    },
}

/// 附加文本字段，以网关要求的旧式编码发送
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeText<'a> {
    pub email: Option<&'a str>,
    pub company: Option<&'a str>,
    pub contact: Option<&'a str>,
}

/// 经过校验的交易请求
#[derive(Debug, Clone, Copy)]
pub struct TransactionRequest<'a> {
    /// 金额，以最小货币单位计 (分/阿格拉)
    pub amount: i64,
    pub card: &'a CreditCard,
    pub kind: TransactionKind<'a>,
    pub free_text: FreeText<'a>,
}

impl<'a> TransactionRequest<'a> {
    /// 校验交易选项并构建请求
    ///
    /// # Arguments
    /// * `action` - 交易类型
    /// * `amount` - 金额 (最小货币单位)
    /// * `card` - 信用卡信息
    /// * `options` - 交易选项
    ///
    /// # Returns
    /// * 校验通过的请求，缺少必需选项时返回 `MissingParameter`
    pub fn build(
        action: TransactionAction,
        amount: i64,
        card: &'a CreditCard,
        options: &'a TransactionOptions,
    ) -> Result<Self> {
        let missing_error = || GatewayError::MissingParameter {
            action,
            missing: missing_options(action, options),
        };

        let national_id = present(&options.national_id);
        let confirmation_code = present(&options.confirmation_code);
        let cardholder = match (options.cred_type, national_id) {
            (Some(cred_type), Some(national_id)) => Some(Cardholder {
                cred_type,
                national_id,
            }),
            _ => None,
        };

        let kind = match action {
            TransactionAction::Purchase => {
                TransactionKind::Purchase(cardholder.ok_or_else(missing_error)?)
            }
            TransactionAction::Authorize => {
                TransactionKind::Authorize(cardholder.ok_or_else(missing_error)?)
            }
            TransactionAction::Capture => match (cardholder, confirmation_code) {
                (Some(cardholder), Some(confirmation_code)) => TransactionKind::Capture {
                    cardholder,
                    confirmation_code,
                },
                _ => return Err(missing_error()),
            },
            TransactionAction::Refund => match (present(&options.index), confirmation_code) {
                (Some(index), Some(confirmation_code)) => TransactionKind::Refund {
                    index,
                    confirmation_code,
                    cred_type: options.cred_type,
                    national_id,
                },
                _ => return Err(missing_error()),
            },
        };

        Ok(Self {
            amount,
            card,
            kind,
            free_text: FreeText {
                email: options.email.as_deref(),
                company: options.company.as_deref(),
                contact: options.contact.as_deref(),
            },
        })
    }

    pub fn action(&self) -> TransactionAction {
        match self.kind {
            TransactionKind::Purchase(_) => TransactionAction::Purchase,
            TransactionKind::Authorize(_) => TransactionAction::Authorize,
            TransactionKind::Capture { .. } => TransactionAction::Capture,
            TransactionKind::Refund { .. } => TransactionAction::Refund,
        }
    }
}
