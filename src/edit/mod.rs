mod core;


pub use self::core::{ascii_char_replace_remove_once, replace_and_remove, CharEditor};
