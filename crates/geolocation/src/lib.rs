//! `geolocation`: points on a sphere and the two queries built on them.
//!
//! The bounding-box technique follows J. P. Matuschek, "Finding Points Within
//! a Distance of a Latitude/Longitude Using Bounding Coordinates".
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`location`]   | `GeoLocation`, range constants, factories             |
//! | [`distance`]   | great-circle distance (spherical law of cosines)      |
//! | [`bounds`]     | `BoundingBox`, `bounding_locations`                   |
//! | [`error`]      | `GeoError`, `GeoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! # Example
//!
//! ```
//! use geolocation::GeoLocation;
//!
//! let home = GeoLocation::from_degrees(26.062951, -80.238853)?;
//! let work = GeoLocation::from_degrees(26.060484, -80.207268)?;
//! assert!(home.distance_to(&work) < 5.0); // kilometres
//!
//! let bbox = home.bounding_locations(10.0)?;
//! assert!(bbox.contains(&work));
//! # Ok::<(), geolocation::GeoError>(())
//! ```

pub mod bounds;
pub mod distance;
pub mod error;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::BoundingBox;
pub use error::{GeoError, GeoResult};
pub use location::GeoLocation;
