//! tests/api/helpers.rs

use once_cell::sync::Lazy;
use simple_form::api::MockApi;
use simple_form::configuration::{get_configuration, Settings};
use simple_form::domain::SimpleForm;
use simple_form::form::FormClient;
use simple_form::telemetry::{get_subscriber, init_subscriber};
use simple_form::validators::Locale;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so both
    // branches have to initialise on their own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    }
});

pub struct TestApp {
    pub configuration: Settings,
    pub api: MockApi,
    pub form_client: FormClient,
}

/// Settings from `configuration/`, with english messages so that
/// assertions do not depend on the selected environment.
pub fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.validation.locale = Locale::En;
        c
    };
    TestApp {
        api: configuration.api.client(),
        form_client: FormClient::from_settings(&configuration),
        configuration,
    }
}

pub fn valid_form() -> SimpleForm {
    SimpleForm {
        nickname: "ursula".into(),
        email: "ursula_le_guin@gmail.com".into(),
        password: "the left hand of darkness".into(),
    }
}
