//! Icon package tooling
//!
//! Two stages that run one after the other:
//! - `scaffold`: one package folder per source icon file
//! - `normalize`: rename resolution variants and rewrite them as RGBA PNG

pub mod cli;
pub mod error;
pub mod icons;
pub mod layout;
pub mod report;

pub use error::IconError;
pub use layout::Layout;
