//! Turn a container-runtime command line into an `ExecStart=` value for a
//! generated service unit, plus the small leaf utilities the unit renderer
//! needs (restart policies, header block, stop timeout).

pub mod args;
pub mod config;
pub mod logging;
pub mod unit;
