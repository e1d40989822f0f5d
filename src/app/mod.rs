//! Application shell.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`plotter_app`]  | [`PlotterApp`]: per-frame ingestion of parse results and panel layout |
//! | [`run`]          | [`run_plotter()`] native window entry point and icon loading |

mod plotter_app;
mod run;

pub use plotter_app::PlotterApp;
pub use run::run_plotter;
