//! CLI presentation layer. Everything here is a consumer of the public
//! query surface; none of it is part of the container contract.

pub mod commands;
pub mod render;
