pub mod assert;
pub mod dump;
pub mod normalize;

pub use assert::expect::{
    ErrorCode, assert_expected_err, assert_expected_err_code, assert_panics,
};
pub use assert::outcome::{AssertionError, AssertionResult};
pub use assert::similar::{
    assert_array_similar, assert_array_sorted_similar, recursive_sort, recursive_sort_keys,
};
pub use assert::string::{assert_string_data_eq, assert_string_safe_eq};
pub use dump::{DumpOptions, dump, dump_string};
