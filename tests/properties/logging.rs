//! Property-based tests for log file naming.
//!
//! Refer to `src/logging/mod.rs` for more details.
use jobhost::logging::compute_rolled_file_path;
use proptest::{prelude::*, test_runner::Config};

proptest! {
  #![proptest_config(Config {
    cases: 1000, ..Config::default()
  })]

  /// A trailing ".log" is replaced rather than doubled.
  #[test]
  fn prop_compute_rolled_file_path_with_log_suffix(
    base in "[a-z/._-]{0,30}",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let result = compute_rolled_file_path(&format!("{}.log", base), &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", base, date, index));
  }

  #[test]
  fn prop_compute_rolled_file_path_without_log_suffix(
    base in "[a-z/_-]{0,30}",
    date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    index in 1u32..1000
  ) {
      let result = compute_rolled_file_path(&base, &date, index);
      prop_assert_eq!(result, format!("{}-{}.{}.log", base, date, index));
  }
}
