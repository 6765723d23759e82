//! # swx-monitor
//!
//! Space-weather monitor for HF radio operators.
//!
//! Fetches the hamqsl.com solar-terrestrial XML feed, extracts a fixed set
//! of fields, classifies Solar Flux, Sunspot Count, A-Index and K-Index into
//! propagation tiers, and presents the result as plain text, a colorized
//! summary, JSON, or an interactive dashboard that refreshes every two hours.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │pipeline │───▶│   data   │───▶│ report  │───▶│ stdout  │ │
//! │  │ (cycle) │    │(extract, │    │  / ui   │    │/Terminal│ │
//! │  └────┬────┘    │ classify)│    └─────────┘    └─────────┘ │
//! │       │         └──────────┘                                │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | StaticSource                   │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Feed abstraction ([`FeedSource`] trait), the HTTP source and
//!   an in-memory source
//! - **[`data`]**: Field catalog, extraction into a [`Snapshot`], and classification
//!   into an [`Assessment`]
//! - **[`pipeline`]**: One fetch, extract, classify cycle
//! - **[`report`]**: Plain, colorized and JSON text presenters
//! - **[`app`]**, **[`events`]**, **[`ui`]**: The dashboard, driven by a
//!   [`RefreshSchedule`]
//! - **[`config`]**: Settings file and command-line overrides
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Colorized summary (default)
//! swx
//!
//! # Plain listing, JSON, or the dashboard
//! swx --mode plain
//! swx --mode json
//! swx --mode dashboard --refresh 30m
//! ```
//!
//! ### As a library
//!
//! ```
//! use swx_monitor::{run_cycle, Metric, StaticSource, Tier};
//!
//! let mut source = StaticSource::new(
//!     b"<solar><solardata><solarflux>120.5</solarflux><kindex>2</kindex></solardata></solar>"
//!         .to_vec(),
//! );
//! let assessment = run_cycle(&mut source).unwrap();
//!
//! let sfi = assessment.condition(Metric::SolarFlux).unwrap();
//! assert_eq!(sfi.verdict.tier, Tier::Good);
//! assert_eq!(sfi.verdict.description, "Propagation good");
//! ```
//!
//! ### Classifying a single value
//!
//! ```
//! use swx_monitor::{classify, SeverityColor, Tier};
//!
//! let verdict = classify("K-Index", 4.0);
//! assert_eq!(verdict.tier, Tier::Poor);
//! assert_eq!(verdict.color, SeverityColor::Orange);
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod pipeline;
pub mod report;
pub mod schedule;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::{Overrides, Settings, ThemeChoice};
pub use data::{
    classify, classify_metric, extract, extract_with, Assessment, Condition, ConditionVerdict,
    Field, FieldCatalog, FieldValue, Metric, ParseError, Reading, SeverityColor, Snapshot, Tier,
};
pub use pipeline::{run_cycle, CycleError};
pub use schedule::{RefreshSchedule, DEFAULT_REFRESH_INTERVAL};
pub use source::{FeedSource, FetchError, HttpSource, StaticSource, FEED_URL};
