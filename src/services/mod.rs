// 服务层模块
// 包含支付网关与HTTP传输

pub mod gateway;
pub mod transport;

// 重新导出服务
pub use gateway::{TranzilaGateway, MULTICURRENCY_URL, SHEKEL_DOLLAR_URL};
pub use transport::{HttpTransport, Transport, FORM_CONTENT_TYPE};
