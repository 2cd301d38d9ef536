mod core;
mod error;

#[cfg(test)]
mod tests;

pub use self::core::{
    complement, complement_removal_map, expand_set2, parse_set, removal_map, translation_map,
    MAX_SET_LEN,
};
pub use self::error::{Result, SetError};
