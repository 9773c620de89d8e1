// src/commands/mod.rs
//! File and output commands. Each handler takes the session state and the
//! expanded argument list; session control (`cd`, `exit`, `conf-dump`)
//! lives in `interpreter::builtins`.

pub mod cat;
pub mod cp;
pub mod echo;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod touch;

pub use cat::handle_cat;
pub use cp::handle_cp;
pub use echo::handle_echo;
pub use ls::handle_ls;
pub use mkdir::handle_mkdir;
pub use pwd::handle_pwd;
pub use touch::handle_touch;
