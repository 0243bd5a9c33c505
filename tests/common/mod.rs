#![allow(dead_code)]

use hubpay::config::{Environment, GatewayConfig, RetryPolicy};
use serde_json::{Value, json};
use std::time::Duration;

pub const KEY: &str = "test-integration-key";
pub const PASSWORD: &str = "test-integration-password";
pub const VENDOR: &str = "sandboxshop";

/// `Basic base64(KEY:PASSWORD)`.
pub const AUTHORIZATION: &str =
    "Basic dGVzdC1pbnRlZ3JhdGlvbi1rZXk6dGVzdC1pbnRlZ3JhdGlvbi1wYXNzd29yZA==";

pub const RETRY_DELAY: Duration = Duration::from_millis(50);

pub fn gateway_config(server_uri: &str) -> GatewayConfig {
    GatewayConfig::new(Environment::Test, KEY, PASSWORD, VENDOR)
        .with_base_url(format!("{server_uri}/api/v1"))
        .with_retry(RetryPolicy {
            max_attempts: 5,
            delay: RETRY_DELAY,
        })
}

pub fn checkout_parameters() -> Value {
    json!({
        "transactionType": "Payment",
        "merchantSessionKey": "M1E996F5-A9BC-41FE-B088-E5B73DB94277",
        "cardIdentifier": "C6F92981-8C2D-457A-AA1E-16EBCD6D3AC6",
        "vendorTxCode": "order-20261019-0001",
        "amount": 4250,
        "currency": "GBP",
        "customerFirstName": "Christopher-Alexander",
        "customerLastName": "Jones",
        "billingAddressLineOne": "407 St. John Street",
        "billingAddressCity": "London",
        "billingAddressPostcode": "EC1V 4AB",
        "billingAddressCountryIso": "GB",
        "browserLanguage": "en-GB",
        "challengeWindowSize": "Small",
        "browserIP": "203.0.113.10",
        "notificationURL": "https://shop.test/opayo/threedsecure",
        "browserAcceptHeader": "text/html, application/json",
        "browserUserAgent": "Mozilla/5.0 (X11; Linux x86_64)",
        "browserJavaEnabled": false,
        "browserColorDepth": "24",
        "browserScreenHeight": "1080",
        "browserScreenWidth": "1920",
        "browserTZ": "+60",
        "saveCard": true
    })
}
