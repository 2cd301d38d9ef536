mod core;


pub use self::core::{
    build_edit_table, build_replace_table, CharModMap, EditTable, ReplaceTable, ReplacementMap,
    Slot, REMOVAL_SENTINEL,
};
