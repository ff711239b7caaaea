//! Modules shared between the SEG and fLPS advisors:
//! - regression laws and band tables
//! - gate bounds and defaults

pub mod constants;
pub mod regression;

pub use regression::{Band, Law, Piece, Piecewise};
