// 工具函数模块
// 包含报文构建、响应解析、响应码描述、文本编码与参数校验

pub mod encoding;
pub mod messages;
pub mod params;
pub mod parser;
pub mod validation;

// 重新导出常用函数
pub use encoding::*;
pub use messages::*;
pub use params::*;
pub use parser::*;
pub use validation::*;
