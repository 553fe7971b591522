//! Admin session-token types for the Folio backend.
//!
//! Provides JWT claims and validation, the `admin_token` cookie builders, and
//! the [`gate::AdminIdentity`] extractor that guards admin-only routes.

pub mod cookie;
pub mod gate;
pub mod token;
