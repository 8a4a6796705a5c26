//! Property-based tests for `REDIS_URL` resolution.
//!
//! Every well-formed URL yields a descriptor that preserves host, port and
//! password, and the Redis client receives those values unchanged.
//!
//! Refer to `src/config/redis_config.rs` for more details.
use jobhost::{
    config::{ConfigurationError, RedisConfig},
    models::SecretString,
};
use proptest::{prelude::*, test_runner::Config};
use redis::ConnectionAddr;

fn scheme() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("redis"), Just("rediss")]
}

proptest! {
  #![proptest_config(Config {
    cases: 500, ..Config::default()
  })]

  #[test]
  fn prop_resolve_preserves_components(
    scheme in scheme(),
    user in "[a-z]{0,12}",
    password in "[A-Za-z0-9]{1,24}",
    host in "[a-z][a-z0-9-]{0,20}(\\.[a-z]{2,6})?",
    port in 1u16..=u16::MAX
  ) {
      let raw = format!("{}://{}:{}@{}:{}", scheme, user, password, host, port);

      let config = RedisConfig::resolve(&raw).unwrap();

      prop_assert_eq!(&config.host, &host);
      prop_assert_eq!(config.port, port);
      prop_assert_eq!(&config.password, &SecretString::new(&password));
      prop_assert_eq!(config.secure_transport, scheme == "rediss");
      prop_assert_eq!(config.skip_certificate_validation, config.secure_transport);
  }

  #[test]
  fn prop_connection_info_carries_descriptor(
    scheme in scheme(),
    password in "[A-Za-z0-9%@!*~]{1,24}",
    host in "[a-z][a-z0-9]{0,20}",
    port in 1u16..=u16::MAX
  ) {
      let config = RedisConfig::resolve(
          &format!("{}://default:{}@{}:{}", scheme, password, host, port),
      ).unwrap();

      let info = config.connection_info();

      prop_assert_eq!(info.redis.password.as_deref(), Some(password.as_str()));
      match info.addr {
          ConnectionAddr::Tcp(addr_host, addr_port) => {
              prop_assert!(!config.secure_transport);
              prop_assert_eq!(addr_host, host);
              prop_assert_eq!(addr_port, port);
          }
          ConnectionAddr::TcpTls { host: addr_host, port: addr_port, insecure, .. } => {
              prop_assert!(config.secure_transport);
              prop_assert!(insecure);
              prop_assert_eq!(addr_host, host);
              prop_assert_eq!(addr_port, port);
          }
          other => prop_assert!(false, "unexpected address {:?}", other),
      }
  }

  #[test]
  fn prop_credentials_without_separator_are_rejected(
    scheme in scheme(),
    user in "[A-Za-z0-9]{1,24}",
    host in "[a-z][a-z0-9]{0,20}"
  ) {
      prop_assert_eq!(
          RedisConfig::resolve(&format!("{}://{}@{}:6379", scheme, user, host)),
          Err(ConfigurationError::InvalidCredentials)
      );
  }
}
