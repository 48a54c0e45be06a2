// 中间件模块
// 包含传输层的请求日志中间件

pub mod logging;

// 重新导出中间件
pub use logging::*;
