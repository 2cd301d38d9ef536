mod core;


pub use self::core::{ascii_replace_once, replace_chars, CharReplacer};
