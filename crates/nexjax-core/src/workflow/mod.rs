//! Workflow orchestration for nexjax

mod configure;

pub use configure::*;
