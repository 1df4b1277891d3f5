//! Feature modules

pub mod arborescence;
