//! Native chart window.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`charts_app`]  | [`ChartsApp`] state, view-state capture/restore, [`eframe::App`] impl |
//! | [`layout`]      | Menu bar and placement of the panels |
//! | [`run`]         | [`run_charts()`] entry point and icon loading |

mod charts_app;
mod layout;
mod run;

pub use charts_app::{ChartModel, ChartsApp};
pub use run::run_charts;
