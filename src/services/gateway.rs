// Tranzila支付网关服务
// 负责接口选择、按交易类型构建报文、解析响应与结果判定

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::middleware::LoggedTransport;
use crate::models::{
    CreditCard, CurrencyCode, TransactionAction, TransactionOptions, TransactionRequest,
    TransactionResponse,
};
use crate::services::{HttpTransport, Transport};
use crate::utils::{build_params, parse_response, validate_supplier, MerchantParams, TextEncoding};

/// 谢克尔/美元交易接口
pub const SHEKEL_DOLLAR_URL: &str = "https://secure5.tranzila.com/cgi-bin/tranzila31.cgi";
/// 多币种交易接口
pub const MULTICURRENCY_URL: &str = "https://secure5.tranzila.com/cgi-bin/tranzila36a.cgi";

/// Tranzila支付网关
///
/// 支持消费、预授权、预授权完成和退款。分期付款与定期扣款未实现，
/// 网关没有测试地址，测试时使用测试商户号。
#[derive(Debug)]
pub struct TranzilaGateway<T> {
    supplier: String,
    currency: CurrencyCode,
    test_mode: bool,
    encoding: TextEncoding,
    transport: T,
}

impl TranzilaGateway<LoggedTransport<HttpTransport>> {
    /// 使用reqwest传输创建网关
    ///
    /// # Arguments
    /// * `config` - 网关配置
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.http)?;
        Self::new(config, LoggedTransport::new(transport))
    }
}

impl<T: Transport> TranzilaGateway<T> {
    /// 创建网关实例
    ///
    /// # Arguments
    /// * `config` - 网关配置，商户号与币种代码必须有效
    /// * `transport` - 传输实现
    ///
    /// # Returns
    /// * 配置无效时返回 `Configuration` 错误
    pub fn new(config: &GatewayConfig, transport: T) -> Result<Self> {
        validate_supplier(&config.supplier).map_err(GatewayError::Configuration)?;
        let currency = config.currency_code()?;
        let encoding = config.encoding()?;

        log::info!(
            "Tranzila gateway ready (supplier: {}, currency: {}, test: {})",
            config.supplier,
            currency,
            config.test_mode
        );

        Ok(Self {
            supplier: config.supplier.clone(),
            currency,
            test_mode: config.test_mode,
            encoding,
            transport,
        })
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn is_test(&self) -> bool {
        self.test_mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 消费：授权并立即扣款
    ///
    /// # Arguments
    /// * `amount` - 金额 (分/阿格拉)
    /// * `card` - 信用卡信息
    /// * `options` - 必须包含 `cred_type` 与 `national_id`
    pub async fn purchase(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResponse> {
        self.execute(TransactionAction::Purchase, amount, card, options)
            .await
    }

    /// 预授权：只冻结资金
    ///
    /// # Arguments
    /// * `amount` - 金额 (分/阿格拉)
    /// * `card` - 信用卡信息
    /// * `options` - 必须包含 `cred_type` 与 `national_id`
    pub async fn authorize(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResponse> {
        self.execute(TransactionAction::Authorize, amount, card, options)
            .await
    }

    /// 预授权完成
    ///
    /// # Arguments
    /// * `amount` - 金额 (分/阿格拉)
    /// * `card` - 信用卡信息
    /// * `options` - 必须包含 `cred_type`、`national_id` 与预授权返回的 `confirmation_code`
    pub async fn capture(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResponse> {
        self.execute(TransactionAction::Capture, amount, card, options)
            .await
    }

    /// 退款
    ///
    /// # Arguments
    /// * `amount` - 金额 (分/阿格拉)
    /// * `card` - 信用卡信息
    /// * `options` - 必须包含原交易的 `index` 与 `confirmation_code`
    pub async fn refund(
        &self,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResponse> {
        self.execute(TransactionAction::Refund, amount, card, options)
            .await
    }

    /// 按币种选择网关地址
    pub fn endpoint_url(&self) -> &'static str {
        if self.currency.is_multicurrency() {
            MULTICURRENCY_URL
        } else {
            SHEKEL_DOLLAR_URL
        }
    }

    /// 构建请求报文
    ///
    /// 文本字段无法用商户编码表示时返回 `Encoding` 错误
    pub fn post_data(&self, request: &TransactionRequest<'_>) -> Result<Vec<u8>> {
        let merchant = MerchantParams {
            supplier: &self.supplier,
            currency: self.currency,
            encoding: self.encoding,
        };
        Ok(build_params(request, &merchant)?.to_body())
    }

    async fn execute(
        &self,
        action: TransactionAction,
        amount: i64,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResponse> {
        let request = TransactionRequest::build(action, amount, card, options).map_err(|e| {
            log::warn!("Rejected {} request: {}", action, e);
            e
        })?;
        self.commit(&request).await
    }

    async fn commit(&self, request: &TransactionRequest<'_>) -> Result<TransactionResponse> {
        let action = request.action();
        let url = self.endpoint_url();
        let body = self.post_data(request).map_err(|e| {
            log::warn!("Rejected {} request: {}", action, e);
            e
        })?;

        log::debug!(
            "Sending {} for card {} to {}",
            action,
            request.card.masked_number(),
            url
        );

        let raw = self.transport.post(url, body).await?;
        let response = TransactionResponse::from_params(parse_response(&raw), self.test_mode);

        if response.success {
            log::info!(
                "{} approved (authorization: {})",
                action,
                response.authorization.as_deref().unwrap_or("-")
            );
        } else {
            log::warn!(
                "{} declined (code: {}, message: {})",
                action,
                response.response_code().unwrap_or("-"),
                response.message.as_deref().unwrap_or("-")
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::CreditType;
    use crate::services::transport::mock::MockTransport;
    use std::sync::Arc;

    const SUCCESSFUL_PURCHASE: &str = "Response=000&ccno=4444333322221111&currency=1&cred_type=1\
        &mycvv=123&expyear=15&supplier=test3&expmonth=09&myid=306122847&expdate=0915&sum=1.00\
        &ConfirmationCode=0000000&index=88&Tempref=01300001&CVVstatus=3&Responsesource=0\n\n";

    const FAILED_PURCHASE: &str = "Response=004&fpay=&mycvv=123&expmonth=9&spay=&myid=306122847\
        &currency=1&ccno=4444333322221111&cred_type=1&expyear=15&supplier=test3&npay=&id=6\
        &expdate=915&sum=100.0&ConfirmationCode=0000000&index=11&Tempref=01130001&CVVstatus=3\
        &Responsesource=2\n\n";

    const SUCCESSFUL_AUTHORIZE: &str = "Response=000&mycvv=333&expmonth=09&task=Doverify\
        &myid=306122847&currency=1&cred_type=1&ccno=4444333322221111&expyear=15&supplier=test3\
        &expdate=0915&tranmode=V&sum=1.00&ConfirmationCode=0000000&index=110&Tempref=03480001\n\n";

    const SUCCESSFUL_CAPTURE: &str = "Response=000&mycvv=333&expmonth=09&task=Doforce\
        &myid=306122847&currency=1&cred_type=1&ccno=4444333322221111&expyear=15&authnr=0000000\
        &supplier=test3&expdate=0915&tranmode=F&sum=1.00&ConfirmationCode=0000000&index=112\
        &Tempref=03870001\n\n";

    const FAILED_CAPTURE: &str = "Response=004&mycvv=333&expmonth=09&task=Doforce\
        &myid=306122847&currency=1&cred_type=1&ccno=4444333322221111&expyear=15&authnr=0000000\
        &supplier=test3&expdate=0915&tranmode=F&sum=1.00&ConfirmationCode=0000000&index=112\
        &Tempref=03870001\n\n";

    const FAILED_REFUND: &str = "<html><head><META NAME=\"ROBOTS\" CONTENT=\"NOINDEX, NOFOLLOW\">\
        </head><body>\n<center><h1>Tranzila</h1><br>\nAn error ocurred with the following \
        message:<br>\n<h3><b><font color=red> Transaction can't be credited </font></b><br></h3>\n\
        Please use the BACK button in your browser.<br>\n</center></body></html>";

    fn config(currency: u8) -> GatewayConfig {
        let mut config = GatewayConfig::new("test3", currency);
        config.test_mode = true;
        config
    }

    fn setup_gateway(body: &str) -> (TranzilaGateway<Arc<MockTransport>>, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::returning(body));
        let gateway = TranzilaGateway::new(&config(1), Arc::clone(&mock)).unwrap();
        (gateway, mock)
    }

    fn card() -> CreditCard {
        CreditCard::new("4444333322221111", "09", "2015", "333")
    }

    fn options() -> TransactionOptions {
        TransactionOptions::new()
            .cred_type(CreditType::Regular)
            .national_id("306122847")
            .confirmation_code("0000000")
            .index("11")
    }

    fn sent_body(mock: &MockTransport) -> String {
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        String::from_utf8(calls[0].1.clone()).unwrap()
    }

    #[test]
    fn test_new_requires_valid_configuration() {
        let mock = MockTransport::new();
        let err = TranzilaGateway::new(&GatewayConfig::new("", 1), mock).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));

        let mock = MockTransport::new();
        let err = TranzilaGateway::new(&GatewayConfig::new("test3", 9), mock).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
    }

    #[test]
    fn test_endpoint_selection_by_currency() {
        for code in [1u8, 2, 4] {
            let gateway = TranzilaGateway::new(&config(code), MockTransport::new()).unwrap();
            assert_eq!(gateway.endpoint_url(), SHEKEL_DOLLAR_URL, "currency {}", code);
        }
        for code in [3u8, 5, 6, 7, 8] {
            let gateway = TranzilaGateway::new(&config(code), MockTransport::new()).unwrap();
            assert_eq!(gateway.endpoint_url(), MULTICURRENCY_URL, "currency {}", code);
        }
    }

    #[tokio::test]
    async fn test_successful_purchase() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_PURCHASE);

        let response = gateway.purchase(100, &card(), &options()).await.unwrap();

        assert!(response.success);
        assert!(response.test);
        assert_eq!(response.response_code(), Some("000"));
        assert_eq!(response.message.as_deref(), Some("Transaction approved"));
        assert_eq!(response.authorization.as_deref(), Some("0000000"));
        assert_eq!(response.cvv_result.as_deref(), Some("3"));
        assert_eq!(response.transaction_index(), Some("88"));

        let calls = mock.calls();
        assert_eq!(calls[0].0, SHEKEL_DOLLAR_URL);
        assert!(sent_body(&mock).starts_with("sum=1.00&ccno=4444333322221111&"));
    }

    #[tokio::test]
    async fn test_unsuccessful_purchase() {
        let (gateway, _mock) = setup_gateway(FAILED_PURCHASE);

        let response = gateway.purchase(100, &card(), &options()).await.unwrap();

        assert!(!response.success);
        assert!(response.test);
        assert_eq!(response.message.as_deref(), Some("Refusal."));
        assert_eq!(response.param("fpay"), Some(""));
    }

    #[tokio::test]
    async fn test_successful_authorize() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_AUTHORIZE);

        let response = gateway.authorize(100, &card(), &options()).await.unwrap();

        assert!(response.success);
        assert_eq!(response.param("tranmode"), Some("V"));
        assert!(sent_body(&mock).starts_with("task=Doverify&tranmode=V&sum=1.00&"));
    }

    #[tokio::test]
    async fn test_capture_success_and_failure() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_CAPTURE);
        let response = gateway.capture(100, &card(), &options()).await.unwrap();
        assert!(response.success);
        assert!(sent_body(&mock).starts_with("task=Doforce&tranmode=F&authnr=0000000&sum=1.00&"));

        let (gateway, _mock) = setup_gateway(FAILED_CAPTURE);
        let response = gateway.capture(100, &card(), &options()).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.authorization.as_deref(), Some("0000000"));
    }

    #[tokio::test]
    async fn test_capture_without_confirmation_code_never_calls_transport() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_CAPTURE);
        let options = TransactionOptions::new()
            .cred_type(CreditType::Regular)
            .national_id("306122847");

        let err = gateway.capture(100, &card(), &options).await.unwrap_err();

        assert!(err.is_missing_parameter());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unmappable_contact_never_calls_transport() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_PURCHASE);
        let options = options().contact("José 😀");

        let err = gateway.purchase(100, &card(), &options).await.unwrap_err();

        assert!(matches!(err, GatewayError::Encoding { field: "contact", .. }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_utf8_encoding_sends_latin_contact() {
        let mock = Arc::new(MockTransport::returning(SUCCESSFUL_PURCHASE));
        let mut config = config(1);
        config.text_encoding = "utf-8".to_string();
        let gateway = TranzilaGateway::new(&config, Arc::clone(&mock)).unwrap();

        let response = gateway
            .purchase(100, &card(), &options().contact("Müller"))
            .await
            .unwrap();

        assert!(response.success);
        let body = sent_body(&mock);
        assert!(body.ends_with("&supplier=test3&contact=Müller"));
        assert_eq!(body.matches('&').count(), 10);
    }

    #[tokio::test]
    async fn test_successful_refund() {
        let (gateway, mock) = setup_gateway(SUCCESSFUL_CAPTURE);
        let options = TransactionOptions::new().index("112").confirmation_code("0000000");

        let response = gateway.refund(100, &card(), &options).await.unwrap();

        assert!(response.success);
        assert!(sent_body(&mock).starts_with("tranmode=C112&authnr=0000000&sum=1.00&"));
    }

    #[tokio::test]
    async fn test_html_error_page_is_a_failed_result() {
        let (gateway, _mock) = setup_gateway(FAILED_REFUND);
        let options = TransactionOptions::new().index("112").confirmation_code("0000000");

        let response = gateway.refund(100, &card(), &options).await.unwrap();

        assert!(!response.success);
        assert_eq!(response.message, None);
        assert_eq!(response.authorization, None);
        assert!(response.test);
    }

    #[tokio::test]
    async fn test_unknown_code_and_duplicate_fields() {
        let (gateway, _mock) = setup_gateway("Response=999\n\n");
        let response = gateway.purchase(100, &card(), &options()).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.message, None);

        let (gateway, _mock) = setup_gateway("Response=004&Response=000");
        let response = gateway.purchase(100, &card(), &options()).await.unwrap();
        assert_eq!(response.response_code(), Some("000"));
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mock = Arc::new(MockTransport::new());
        mock.push_response(Err(TransportError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        }));
        let gateway = TranzilaGateway::new(&config(1), Arc::clone(&mock)).unwrap();

        let err = gateway.purchase(100, &card(), &options()).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::Transport(TransportError::Status { status: 502, .. })
        ));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_multicurrency_purchase_goes_to_multicurrency_endpoint() {
        let mock = Arc::new(MockTransport::returning("Response=000\n\n"));
        let gateway = TranzilaGateway::new(&config(7), Arc::clone(&mock)).unwrap();

        gateway.purchase(2599, &card(), &options()).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls[0].0, MULTICURRENCY_URL);
        let body = String::from_utf8(calls[0].1.clone()).unwrap();
        assert!(body.starts_with("sum=25.99&"));
        assert!(body.contains("&currency=7&"));
    }

    #[test]
    fn test_post_data_is_deterministic() {
        let gateway = TranzilaGateway::new(&config(1), MockTransport::new()).unwrap();
        let card = card();
        let options = options().email("shop@example.com").contact("דני");

        let first = TransactionRequest::build(TransactionAction::Capture, 100, &card, &options)
            .and_then(|request| gateway.post_data(&request))
            .unwrap();
        let second = TransactionRequest::build(TransactionAction::Capture, 100, &card, &options)
            .and_then(|request| gateway.post_data(&request))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_from_config_builds_http_gateway() {
        let gateway = TranzilaGateway::from_config(&config(2)).unwrap();
        assert_eq!(gateway.supplier(), "test3");
        assert_eq!(gateway.currency(), CurrencyCode::UsDollar);
        assert!(gateway.is_test());
    }
}
