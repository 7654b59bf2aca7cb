//! queue-report: managed queue and object-storage metrics reporting.
//!
//! The core is pure and synchronous: `analyzer` computes comparative volume
//! statistics over a daily sample series, `chart` renders the same series as
//! a scaled text-mode bar chart. Everything around them is glue: `source`
//! feeds ordered series in, `report` formats the results for the console,
//! `config` carries chart geometry and the default lookback window.

pub mod common;

pub mod analyzer;
pub mod chart;
pub mod config;
pub mod models;
pub mod report;
pub mod source;
