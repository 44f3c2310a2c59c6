mod arena;
mod cursor;
mod handle;
mod node;
mod raw_bst_map;

pub(crate) use cursor::InOrder;
pub(crate) use raw_bst_map::RawBstMap;
