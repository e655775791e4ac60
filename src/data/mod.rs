//! Data layer: the alignment table, parameter file loading, and filtering.
//!
//! Architecture:
//! ```text
//!      .param file
//!          │
//!          ▼
//!    ┌──────────┐
//!    │  loader   │  parse file → ParamSet
//!    └──────────┘
//!          │
//!          ▼
//!    ┌────────────────┐
//!    │ AlignmentTable  │  merge columns, classify rows
//!    └────────────────┘
//!          │
//!          ▼
//!    ┌──────────┐
//!    │  filter   │  name substring → visible row indices
//!    └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
