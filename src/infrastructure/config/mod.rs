//! Infrastructure configuration modules.

pub mod display;
pub mod logging;
pub mod paths;
pub mod settings;
pub mod storage;

pub use settings::Config;
