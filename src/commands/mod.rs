//! CLI commands for graphkit

pub mod dag;
pub mod dispatch;
pub mod generate;
pub mod output;
pub mod show;
pub mod traverse;
pub mod weighted;
