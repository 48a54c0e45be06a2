// 网关数据模型定义
// 包含信用卡、币种、交易请求与交易响应等核心数据结构

mod card;
mod currency;
mod response;
mod transaction;

// 重新导出核心类型
pub use card::*;
pub use currency::*;
pub use response::*;
pub use transaction::*;
