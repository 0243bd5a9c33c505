use crate::domain::payment::{
    AuthPayload, AuthPayloadParameters, BillingAddress, CardMethod, CredentialType,
    PaymentMethod, PriorAuthenticationInfo, ShippingDetails, StrongCustomerAuthentication,
};

pub const DESCRIPTION: &str = "Webstore Transaction";
pub const APPLY_3D_SECURE: &str = "UseMSPSetting";
pub const ENTRY_METHOD: &str = "Ecommerce";
pub const TRANS_TYPE: &str = "GoodsAndServicePurchase";

/// Maximum lengths, in characters, the gateway accepts per field.
pub mod limits {
    pub const CURRENCY: usize = 3;
    pub const NAME: usize = 20;
    pub const ADDRESS_LINE: usize = 50;
    pub const CITY: usize = 40;
    pub const POSTCODE: usize = 10;
    pub const COUNTRY_ISO: usize = 2;
    pub const PHONE: usize = 19;
    pub const LANGUAGE: usize = 8;
    pub const IP: usize = 39;
    pub const HEADER: usize = 2048;
    pub const COLOR_DEPTH: usize = 2;
    pub const SCREEN_DIMENSION: usize = 6;
    pub const TIMEZONE: usize = 6;
}

/// Returns at most the first `max` characters of `value`.
pub fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Like [`clip`], treating an absent or empty value as not provided.
fn clip_opt(value: Option<&String>, max: usize) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| clip(v, max))
}

fn clip_or_empty(value: Option<&String>, max: usize) -> String {
    clip_opt(value, max).unwrap_or_default()
}

/// Translates checkout parameters into the gateway's authorization body.
///
/// Never fails: oversize text is clipped and anything missing is left out, so
/// rejection of bad input is up to the gateway.
pub fn build_auth_payload(params: &AuthPayloadParameters) -> AuthPayload {
    let mut card = CardMethod {
        merchant_session_key: params.merchant_session_key.clone(),
        card_identifier: params.card_identifier.clone(),
        save: None,
        reusable: None,
    };

    // When both flags are set the reusable classification wins.
    let mut credential_type = None;
    if params.save_card {
        credential_type = Some(CredentialType::first_use());
        card.save = Some(true);
    }
    if params.reusable {
        credential_type = Some(CredentialType::subsequent_use());
        card.reusable = Some(true);
    }

    AuthPayload {
        transaction_type: params.transaction_type,
        payment_method: PaymentMethod { card },
        vendor_tx_code: params.vendor_tx_code.clone(),
        amount: params.amount,
        currency: clip(&params.currency, limits::CURRENCY),
        description: DESCRIPTION.to_string(),
        apply_3d_secure: APPLY_3D_SECURE.to_string(),
        customer_first_name: clip(&params.customer_first_name, limits::NAME),
        customer_last_name: clip(&params.customer_last_name, limits::NAME),
        billing_address: billing_address(params),
        strong_customer_authentication: strong_customer_authentication(params),
        entry_method: ENTRY_METHOD.to_string(),
        shipping_details: shipping_details(params),
        credential_type,
    }
}

fn billing_address(params: &AuthPayloadParameters) -> BillingAddress {
    BillingAddress {
        address1: clip(&params.billing_address_line_one, limits::ADDRESS_LINE),
        address2: clip_opt(params.billing_address_line_two.as_ref(), limits::ADDRESS_LINE),
        address3: clip_opt(
            params.billing_address_line_three.as_ref(),
            limits::ADDRESS_LINE,
        ),
        city: clip(&params.billing_address_city, limits::CITY),
        postal_code: clip_opt(params.billing_address_postcode.as_ref(), limits::POSTCODE),
        country: clip(&params.billing_address_country_iso, limits::COUNTRY_ISO),
    }
}

fn shipping_details(params: &AuthPayloadParameters) -> Option<ShippingDetails> {
    let line_one = params
        .shipping_address_line_one
        .as_ref()
        .filter(|line| !line.is_empty())?;

    Some(ShippingDetails {
        recipient_first_name: clip_or_empty(params.recipient_first_name.as_ref(), limits::NAME),
        recipient_last_name: clip_or_empty(params.recipient_last_name.as_ref(), limits::NAME),
        shipping_address1: clip(line_one, limits::ADDRESS_LINE),
        shipping_address2: clip_or_empty(
            params.shipping_address_line_two.as_ref(),
            limits::ADDRESS_LINE,
        ),
        shipping_address3: clip_or_empty(
            params.shipping_address_line_three.as_ref(),
            limits::ADDRESS_LINE,
        ),
        shipping_city: clip_or_empty(params.shipping_address_city.as_ref(), limits::CITY),
        shipping_postal_code: clip_or_empty(
            params.shipping_address_postcode.as_ref(),
            limits::POSTCODE,
        ),
        shipping_country: clip_or_empty(
            params.shipping_address_country_iso.as_ref(),
            limits::COUNTRY_ISO,
        ),
    })
}

fn strong_customer_authentication(params: &AuthPayloadParameters) -> StrongCustomerAuthentication {
    StrongCustomerAuthentication {
        customer_mobile_phone: clip_opt(params.customer_mobile_phone.as_ref(), limits::PHONE),
        trans_type: TRANS_TYPE.to_string(),
        browser_language: clip(&params.browser_language, limits::LANGUAGE),
        challenge_window_size: params.challenge_window_size,
        browser_ip: clip(&params.browser_ip, limits::IP),
        notification_url: params.notification_url.clone(),
        browser_accept_header: clip(&params.browser_accept_header, limits::HEADER),
        browser_javascript_enabled: true,
        browser_user_agent: clip(&params.browser_user_agent, limits::HEADER),
        browser_java_enabled: params.browser_java_enabled,
        browser_color_depth: clip(&params.browser_color_depth, limits::COLOR_DEPTH),
        browser_screen_height: clip(&params.browser_screen_height, limits::SCREEN_DIMENSION),
        browser_screen_width: clip(&params.browser_screen_width, limits::SCREEN_DIMENSION),
        browser_tz: clip(&params.browser_tz, limits::TIMEZONE),
        prior_authentication: params
            .auth_code
            .as_ref()
            .filter(|code| !code.is_empty())
            .map(|code| PriorAuthenticationInfo {
                prior_reference: code.clone(),
            }),
    }
}
