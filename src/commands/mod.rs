pub(crate) mod context;
pub mod explore;
pub mod init;
pub mod sample;
pub mod stats;

pub use explore::run_explore;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use sample::run_sample;
pub use stats::run_stats;
