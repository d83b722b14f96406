mod support;

use rust_decimal_macros::dec;

use spreadbot::domain::ExchangeId;
use spreadbot::error::{ConfigError, Error};
use spreadbot::infrastructure::config::Config;

use support::{write_temp_config, PAPER_CONFIG};

#[test]
fn paper_config_loads() {
    let file = write_temp_config(PAPER_CONFIG);
    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.balance.fetch_timeout_secs, 5);
    assert_eq!(
        config.exchange_ids(),
        vec![ExchangeId::new("CoinDynasty"), ExchangeId::new("CoinSnake")]
    );
    assert_eq!(config.exchanges[1].paper_balance, dec!(987.65));
}

#[test]
fn missing_file_is_read_error() {
    let result = Config::load("/definitely/not/here.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_temp_config("[[exchanges]\nname = ");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn email_section_is_read() {
    let toml = format!(
        "{PAPER_CONFIG}\n[notification]\nrelay_url = \"https://mail.example.com/send\"\n\n[notification.email]\nactive = true\nto = \"ops@example.com\"\nfrom = \"bot@example.com\"\n"
    );
    let file = write_temp_config(&toml);
    let config = Config::load(file.path()).expect("valid config");

    assert!(config.notification.email.active);
    assert_eq!(config.notification.email.to, "ops@example.com");
    assert_eq!(
        config.notification.relay_url.as_deref(),
        Some("https://mail.example.com/send")
    );
}

#[test]
fn empty_exchange_name_is_rejected() {
    let result = Config::parse_toml("[[exchanges]]\nname = \"  \"\n");
    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "exchanges.name",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid exchange name, got {err}"),
        Ok(_) => panic!("Expected empty exchange name to be rejected"),
    }
}
