mod core;


pub use self::core::{trim_all, trim_all_string, trim_all_string_with, trim_all_with, TrimSet};
