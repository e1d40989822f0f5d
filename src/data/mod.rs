//! UI-free data layer: parsing, preview, trace derivation and export.

pub mod axis;
pub mod dataset;
pub mod export;
pub mod numeric;
pub mod preview;
pub mod rows;
pub mod traces;
