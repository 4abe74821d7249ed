//! RosterDB - an in-memory student registry over a red-black ordered index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           RosterDB                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Registry Layer (registry/)                  │   │
//! │  │    StudentRegistry: add / update / remove / find / iter  │   │
//! │  │    StudentRecord: validated name + grade vector          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Ordered Index (index/)                     │   │
//! │  │    RbTree<K, V>: red-black balanced, O(log n) ops        │   │
//! │  │    arena nodes + shared sentinel + rotation fixups       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Common (common/)                         │   │
//! │  │       StudentId, Error, Result, config constants         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (StudentId, Error, config)
//! - [`index`] - The red-black ordered index
//! - [`registry`] - Student-domain facade with explicit error policy
//!
//! # Quick Start
//! ```
//! use rosterdb::{StudentId, StudentRecord, StudentRegistry};
//!
//! let mut registry = StudentRegistry::new();
//!
//! let record = StudentRecord::new("Ada Lovelace", [92.5; 10]).unwrap();
//! registry.add(StudentId::new(7), record).unwrap();
//!
//! // Records come back in ascending id order.
//! for (id, record) in registry.iter() {
//!     println!("{id}: {}", record.name());
//! }
//! ```
//!
//! The console front end — menu loop, stdin parsing, result printing — is
//! deliberately not part of this crate; callers own all presentation.

// Core modules
pub mod common;
pub mod index;
pub mod registry;

// Re-export commonly used items at crate root for convenience
pub use common::config::{GRADE_COUNT, MAX_NAME_LEN};
pub use common::{Error, Result, StudentId};

pub use index::{Iter, RbTree};
pub use registry::{StudentRecord, StudentRegistry};
