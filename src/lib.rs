// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbit-style interactive camera controller for 3D viewports.
//!
//! The camera's eye is parameterized as a look-at target plus a spherical
//! offset, so dragging rotates the view around the target without changing
//! its distance. Wheel input zooms toward the surface under the cursor, and
//! the camera can be fitted to a bounding box under a fixed field of view.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the orbit controller and its drag state
//!   machine
//! - [`camera::SphericalCoordinate`] - radius/azimuth/polar orbit model
//! - [`camera::CameraPose`] - value-type pose handed to the renderer
//! - [`options::Options`] - tunables with TOML preset support
//!
//! # Collaborators
//!
//! The host delivers pointer and wheel events ([`input::InputEvent`]),
//! optionally answers ray-pick queries ([`picking::ScenePicker`]), and
//! consumes the camera and view matrices after every operation. Everything
//! runs synchronously on the caller's thread.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;

pub use camera::{CameraController, CameraPose, InteractionMode};
pub use error::OrbitError;
pub use options::{CameraOptions, Options};
