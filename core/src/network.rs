pub mod interface;
pub mod ping;
pub mod resolver;
pub mod tcp;
