//! `lm-map` — lane records, centerline geometry, and the loaded-map store.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`lane`]  | `Lane`, `CenterlineSample`, `LanePoint`; sampling and     |
//! |           | projection (`sample_at`, `project`, `nearest_point`)      |
//! | [`store`] | `LaneMap` (arena + R-tree), `LaneMapBuilder`, `LaneSpec`  |
//! | [`error`] | `MapError`, `MapResult<T>`                                |
//!
//! Loading and parsing the on-disk map format is out of scope: an external
//! loader hands fully-formed [`LaneSpec`] records to the builder.  After
//! `build()` the map is immutable and `Send + Sync`; all queries are pure
//! reads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.    |

pub mod error;
pub mod lane;
pub mod store;


pub use error::{MapError, MapResult};
pub use lane::{CenterlineSample, Lane, LanePoint};
pub use store::{LaneMap, LaneMapBuilder, LaneSpec};
