//! Builtins that change session state or control the session itself.

pub mod cd_cmd;
pub mod conf_dump_cmd;
pub mod exit_cmd;

pub use cd_cmd::handle_cd;
pub use conf_dump_cmd::{handle_conf_dump, render_configuration};
pub use exit_cmd::handle_exit;
