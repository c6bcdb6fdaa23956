// In components/mod.rs
pub(crate) mod context;
pub(crate) mod episode_list;
pub mod gen_funcs;
pub(crate) mod player;
