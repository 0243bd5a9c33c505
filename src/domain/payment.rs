use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Payment,
    Deferred,
    Authenticate,
}

/// Size of the 3-D Secure challenge iframe the shopper's browser can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChallengeWindowSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    FullScreen,
}

/// Everything the storefront knows about a checkout attempt.
///
/// Built by the caller and consumed once by
/// [`build_auth_payload`](crate::application::auth_payload::build_auth_payload).
/// Text fields are clipped to gateway limits during that translation, never
/// validated here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthPayloadParameters {
    pub transaction_type: TransactionType,
    pub merchant_session_key: String,
    pub card_identifier: String,
    pub vendor_tx_code: String,
    /// Amount in the currency's minor unit.
    pub amount: u64,
    pub currency: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_mobile_phone: Option<String>,
    pub billing_address_line_one: String,
    pub billing_address_line_two: Option<String>,
    pub billing_address_line_three: Option<String>,
    pub billing_address_city: String,
    pub billing_address_postcode: Option<String>,
    pub billing_address_country_iso: String,
    pub recipient_first_name: Option<String>,
    pub recipient_last_name: Option<String>,
    pub shipping_address_line_one: Option<String>,
    pub shipping_address_line_two: Option<String>,
    pub shipping_address_line_three: Option<String>,
    pub shipping_address_city: Option<String>,
    pub shipping_address_postcode: Option<String>,
    pub shipping_address_country_iso: Option<String>,
    pub browser_language: String,
    pub challenge_window_size: ChallengeWindowSize,
    #[serde(rename = "browserIP")]
    pub browser_ip: String,
    #[serde(rename = "notificationURL")]
    pub notification_url: String,
    pub browser_accept_header: String,
    pub browser_user_agent: String,
    pub browser_java_enabled: bool,
    pub browser_color_depth: String,
    pub browser_screen_height: String,
    pub browser_screen_width: String,
    #[serde(rename = "browserTZ")]
    pub browser_tz: String,
    pub save_card: bool,
    pub reusable: bool,
    pub auth_code: Option<String>,
}

/// Wire body for `POST transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub transaction_type: TransactionType,
    pub payment_method: PaymentMethod,
    pub vendor_tx_code: String,
    pub amount: u64,
    pub currency: String,
    pub description: String,
    #[serde(rename = "apply3DSecure")]
    pub apply_3d_secure: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub billing_address: BillingAddress,
    pub strong_customer_authentication: StrongCustomerAuthentication,
    pub entry_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<CredentialType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub card: CardMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMethod {
    pub merchant_session_key: String,
    pub card_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reusable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
}

/// Shipping block. Either the whole block is sent or none of it, so every
/// key is always present inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub recipient_first_name: String,
    pub recipient_last_name: String,
    pub shipping_address1: String,
    pub shipping_address2: String,
    pub shipping_address3: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub shipping_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongCustomerAuthentication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_mobile_phone: Option<String>,
    pub trans_type: String,
    pub browser_language: String,
    pub challenge_window_size: ChallengeWindowSize,
    #[serde(rename = "browserIP")]
    pub browser_ip: String,
    #[serde(rename = "notificationURL")]
    pub notification_url: String,
    pub browser_accept_header: String,
    pub browser_javascript_enabled: bool,
    pub browser_user_agent: String,
    pub browser_java_enabled: bool,
    pub browser_color_depth: String,
    pub browser_screen_height: String,
    pub browser_screen_width: String,
    #[serde(rename = "browserTZ")]
    pub browser_tz: String,
    #[serde(
        rename = "threeDSRequestorPriorAuthenticationInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prior_authentication: Option<PriorAuthenticationInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorAuthenticationInfo {
    #[serde(rename = "threeDSReqPriorRef")]
    pub prior_reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CofUsage {
    First,
    Subsequent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitiatedType {
    #[serde(rename = "CIT")]
    Cit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MitType {
    Unscheduled,
}

/// Stored-credential classification sent with card-on-file payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialType {
    pub cof_usage: CofUsage,
    pub initiated_type: InitiatedType,
    pub mit_type: MitType,
}

impl CredentialType {
    /// Shopper is saving the card for the first time.
    pub fn first_use() -> Self {
        Self {
            cof_usage: CofUsage::First,
            initiated_type: InitiatedType::Cit,
            mit_type: MitType::Unscheduled,
        }
    }

    /// Shopper is paying with a previously saved card.
    pub fn subsequent_use() -> Self {
        Self {
            cof_usage: CofUsage::Subsequent,
            initiated_type: InitiatedType::Cit,
            mit_type: MitType::Unscheduled,
        }
    }
}

/// Result of a 3-D Secure v2 challenge posted back by the issuer's ACS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreeDsChallengeResult {
    #[serde(rename = "cRes")]
    pub c_res: String,
    #[serde(rename = "threeDSSessionData")]
    pub three_ds_session_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_type_wire_format() {
        let value = serde_json::to_value(CredentialType::first_use()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "cofUsage": "First",
                "initiatedType": "CIT",
                "mitType": "Unscheduled"
            })
        );
    }

    #[test]
    fn test_parameters_deserialize_with_gateway_field_names() {
        let json = r#"{
            "merchantSessionKey": "MSK",
            "cardIdentifier": "CARD",
            "amount": 1099,
            "currency": "GBP",
            "browserIP": "127.0.0.1",
            "browserTZ": "+60",
            "notificationURL": "https://shop.test/3ds",
            "saveCard": true
        }"#;
        let params: AuthPayloadParameters =
            serde_json::from_str(json).expect("Failed to deserialize parameters");

        assert_eq!(params.transaction_type, TransactionType::Payment);
        assert_eq!(params.amount, 1099);
        assert_eq!(params.browser_ip, "127.0.0.1");
        assert_eq!(params.browser_tz, "+60");
        assert_eq!(params.notification_url, "https://shop.test/3ds");
        assert!(params.save_card);
        assert!(!params.reusable);
        assert!(params.shipping_address_line_one.is_none());
    }
}
