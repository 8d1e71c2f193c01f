//! FitCalc application layer
//!
//! ## Architecture
//!
//! The application follows a ports-and-handlers layout:
//! - Ports: narrow input/output capability traits a front end implements
//! - Handlers: the three calculator event handlers (BMI, calories, macros)
//!   plus the sex selector, each a synchronous function of explicit inputs
//! - State: the single owned UI state (selected sex, live chart slot)
//! - Terminal: a stdin/stdout front end implementing the ports

pub mod chart;
pub mod config;
pub mod handlers;
pub mod ports;
pub mod state;
pub mod terminal;
