// 请求日志中间件
// 包装任意传输实现，记录请求编号、网关地址、耗时与结果

use std::future::Future;
use std::time::Instant;
use uuid::Uuid;

use crate::error::TransportError;
use crate::services::Transport;

/// 请求日志中间件
///
/// 报文中包含卡号和CVV，因此只记录报文长度，不记录内容。
#[derive(Debug, Clone)]
pub struct LoggedTransport<T> {
    inner: T,
}

impl<T> LoggedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for LoggedTransport<T> {
    fn post<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send + 'a {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();
        let body_len = body.len();
        let fut = self.inner.post(url, body);

        async move {
            log::debug!("[{}] POST {} ({} bytes)", request_id, url, body_len);

            let result = fut.await;
            let duration = start_time.elapsed();

            match &result {
                Ok(response) => {
                    log::info!(
                        "[{}] POST {} {}ms - {} bytes",
                        request_id,
                        url,
                        duration.as_millis(),
                        response.len()
                    );
                }
                Err(TransportError::Status { status, .. }) => {
                    log::warn!(
                        "[{}] POST {} {}ms - {}",
                        request_id,
                        url,
                        duration.as_millis(),
                        status
                    );
                }
                Err(e) => {
                    log::error!(
                        "[{}] POST {} {}ms - ERROR: {}",
                        request_id,
                        url,
                        duration.as_millis(),
                        e
                    );
                }
            }

            result
        }
    }
}
