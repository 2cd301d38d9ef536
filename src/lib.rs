pub mod charset;
pub mod edit;
pub mod replace;
pub mod table;
pub mod trim;

pub use self::edit::{ascii_char_replace_remove_once, CharEditor};
pub use self::replace::{ascii_replace_once, CharReplacer};
pub use self::table::{CharModMap, ReplacementMap};
pub use self::trim::{trim_all, TrimSet};
