//! `natrium-host`: the dynamic call surface a scripting VM binds to.
//!
//! A VM binding opens a [`Module`], registers [`Module::function_names`]
//! and [`Module::constants`] under [`Module::name`], and forwards each call
//! to [`Module::call`], converting between its own values and [`Value`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;
pub mod module;
pub mod value;

pub use config::HostConfig;
pub use error::HostError;
pub use module::{Module, VERSION};
pub use value::Value;
