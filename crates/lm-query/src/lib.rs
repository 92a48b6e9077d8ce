//! `lm-query` — topological and spatial queries for motion prediction.
//!
//! Answers "where is this point relative to lane centerlines, and how do
//! nearby lanes relate to each other and to previously known lanes?" over a
//! loaded [`lm_map::LaneMap`].
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`engine`]   | `LaneQuery`: `on_lane`, `nearby_lanes`, geometry       |
//! |              | pass-throughs (`project`, `smooth_point_from_lane`, …) |
//! | [`relation`] | the five relation predicates (`is_left_neighbor`, …)   |
//! | [`config`]   | `QueryConfig` tunables                                 |
//!
//! # Concurrency
//!
//! All queries are synchronous pure reads over an immutable map; `LaneQuery`
//! is `Copy` and freely shared across threads.  Atomic whole-map replacement
//! on reload is the owning application's job (swap the `Arc` the queries
//! borrow from).
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public config types.  |

pub mod config;
pub mod engine;
pub mod relation;


pub use config::QueryConfig;
pub use engine::LaneQuery;
