mod common;

use common::checkout_parameters;
use hubpay::application::auth_payload::{build_auth_payload, limits};
use hubpay::domain::payment::AuthPayloadParameters;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};

fn random_text(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn expected(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[test]
fn test_random_lengths_are_clipped_to_prefix() {
    let mut rng = thread_rng();
    let base: AuthPayloadParameters = serde_json::from_value(checkout_parameters()).unwrap();

    for _ in 0..200 {
        let mut params = base.clone();
        params.customer_first_name = random_text(&mut rng, 40);
        params.billing_address_line_one = random_text(&mut rng, 100);
        params.billing_address_city = random_text(&mut rng, 80);
        params.billing_address_country_iso = random_text(&mut rng, 5);
        params.browser_ip = random_text(&mut rng, 60);
        params.browser_user_agent = random_text(&mut rng, 4096);
        params.shipping_address_line_one = Some(random_text(&mut rng, 100));
        params.shipping_address_postcode = Some(random_text(&mut rng, 20));

        let payload = build_auth_payload(&params);

        assert_eq!(
            payload.customer_first_name,
            expected(&params.customer_first_name, limits::NAME)
        );
        assert_eq!(
            payload.billing_address.address1,
            expected(&params.billing_address_line_one, limits::ADDRESS_LINE)
        );
        assert_eq!(
            payload.billing_address.city,
            expected(&params.billing_address_city, limits::CITY)
        );
        assert_eq!(
            payload.billing_address.country,
            expected(&params.billing_address_country_iso, limits::COUNTRY_ISO)
        );
        assert_eq!(
            payload.strong_customer_authentication.browser_ip,
            expected(&params.browser_ip, limits::IP)
        );
        assert_eq!(
            payload.strong_customer_authentication.browser_user_agent,
            expected(&params.browser_user_agent, limits::HEADER)
        );

        let line_one = params.shipping_address_line_one.as_deref().unwrap_or_default();
        match payload.shipping_details {
            Some(shipping) => {
                assert!(!line_one.is_empty());
                assert_eq!(shipping.shipping_address1, expected(line_one, limits::ADDRESS_LINE));
                assert!(shipping.shipping_postal_code.chars().count() <= limits::POSTCODE);
            }
            None => assert!(line_one.is_empty()),
        }
    }
}
