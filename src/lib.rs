//! A small, strongly typed library for near-Earth object (NEO) catalogs and
//! their close approaches to Earth. It loads the NEO catalog (CSV) and the
//! close-approach feed (JSON), links every approach to its NEO in an
//! in-memory database, selects approaches with composable filters, and writes
//! the results back out as CSV or JSON.
//!
//! # Features
//!
//! - **Loading** — Header-driven CSV parsing of the catalog and positional
//!   parsing of the JSON feed, with absent names and diameters kept as `None`
//! - **Linkage** — Designation and name indices, with approaches attached to
//!   their NEO in file order; unknown designations are tolerated
//! - **Querying** — Date, distance, velocity, diameter, and hazard filters
//!   plus a result limit
//! - **Serialization** — Fixed seven-column CSV and indented JSON output
//!
//! # Quick Start
//!
//! ```
//! use neo_db::{NeoDatabase, io};
//! use neo_db::query::{Criteria, create_filters, limit};
//!
//! let neos = io::read_neos(
//!     "pdes,name,pha,diameter\n433,Eros,Y,16.84\n2020 AB,,N,\n".as_bytes(),
//! )?;
//! let approaches = io::read_approaches(
//!     r#"{"data": [
//!         ["433", "1", "2", "2020-Jan-01 06:00", "0.09", "", "", "5.6"],
//!         ["2020 AB", "1", "2", "2020-Jan-02 07:30", "0.5", "", "", "12.0"],
//!         ["9999 ZZ", "1", "2", "2020-Jan-03 00:00", null, "", "", null]
//!     ]}"#
//!     .as_bytes(),
//! )?;
//!
//! let db = NeoDatabase::new(neos, approaches)?;
//!
//! let eros = db.get_neo_by_name("Eros").expect("Eros is in the catalog");
//! assert_eq!(eros.designation, "433");
//! assert_eq!(eros.approaches.len(), 1);
//!
//! // The third approach names an unknown NEO: kept, but not linked.
//! assert_eq!(db.get_approaches().len(), 3);
//! assert_eq!(db.unresolved_count(), 1);
//!
//! let criteria = Criteria { hazardous: Some(true), ..Default::default() };
//! let filters = create_filters(&criteria);
//!
//! let mut out = Vec::new();
//! let rows = io::write_csv(&mut out, limit(db.query(&filters), Some(10)))?;
//! assert_eq!(rows, 1);
//! assert!(String::from_utf8(out)?.ends_with("2020-01-01 06:00,0.09,5.6,433,Eros,16.84,True\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Catalog and feed loaders, CSV and JSON result writers
//! - [`query`] — [`Filter`](query::Filter), [`Criteria`](query::Criteria),
//!   [`create_filters`](query::create_filters), [`limit`](query::limit)
//! - [`NeoDatabase`] — Indices and approach linkage
//!
//! # Data Types
//!
//! - [`NearEarthObject`] — Designation, optional name and diameter, hazard flag
//! - [`CloseApproach`] — Designation, timestamp, distance (au), velocity (km/s)
//! - [`LinkedApproach`] — A close approach borrowed together with its NEO
//! - [`Timestamp`] — Minute-resolution approach time
//! - [`NeoId`] / [`ApproachId`] — Positions inside a [`NeoDatabase`]
//!
//! # Configuration
//!
//! - [`DatabaseConfig`] — Database construction settings
//! - [`DuplicatePolicy`] — Reject or overwrite repeated designations and names

mod database;
mod model;

pub mod io;
pub mod query;

pub use model::approach::{CloseApproach, LinkedApproach};
pub use model::neo::NearEarthObject;
pub use model::types::{ApproachId, NeoId, ParseTimestampError, Timestamp};

pub use database::{DatabaseConfig, DuplicatePolicy, NeoDatabase};

pub use database::Error as DatabaseError;
