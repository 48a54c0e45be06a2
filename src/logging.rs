// 日志初始化
// 使用env_logger输出带时间戳的日志，默认级别为info

use chrono::Local;
use log::SetLoggerError;
use std::io::Write;

/// 初始化日志
///
/// 可以通过 `RUST_LOG` 覆盖默认级别；重复初始化时返回错误而不是panic。
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}
