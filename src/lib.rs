// Tranzila 信用卡支付网关客户端
// 把消费、预授权、预授权完成、退款四种操作转换为网关报文并解析响应
//
// 使用示例:
//
// let config = GatewayConfig::new("test3", 1);
// let gateway = TranzilaGateway::from_config(&config)?;
// let card = CreditCard::new("4444333322221111", "09", "2015", "333");
// let options = TransactionOptions::new()
//     .cred_type(CreditType::Regular)
//     .national_id("306122847");
//
// let response = gateway.purchase(100, &card, &options).await?;
// println!("{} {:?}", response.success, response.message);

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{GatewayConfig, HttpConfig};
pub use error::{GatewayError, Result, TransportError};
pub use middleware::LoggedTransport;
pub use models::{
    CreditCard, CreditType, CurrencyCode, TransactionAction, TransactionOptions,
    TransactionResponse,
};
pub use services::{HttpTransport, Transport, TranzilaGateway, MULTICURRENCY_URL, SHEKEL_DOLLAR_URL};
