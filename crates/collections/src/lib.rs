//! # tether-collections
//!
//! Thread-safe, generic, singly-linked containers with per-type instance
//! pooling.
//!
//! This crate provides:
//! - [`Stack`]: LIFO container
//! - [`Queue`]: FIFO container with head and tail tracking
//! - [`LinkedList`]: indexed insert/remove, search and snapshots
//! - [`pool`]: process-wide registry with one reusable-instance pool per
//!   container type
//!
//! Every container guards its chain with a read/write lock, so a container
//! can be shared by reference (usually through an `Arc`) across threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use tether_collections::prelude::*;
//!
//! let stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//!
//! let queue: Queue<_> = [1, 2, 3].into_iter().collect();
//! assert_eq!(queue.pop_all(), vec![1, 2, 3]);
//!
//! let list: LinkedList<_> = vec![1, 2, 3].into();
//! list.insert_at(1, 4)?;
//! assert_eq!(list.items(), vec![1, 4, 2, 3]);
//!
//! // Pooled instance, returned to the per-type pool on drop
//! let pooled = Stack::<u64>::acquire_scoped();
//! pooled.push(10);
//! # Ok::<(), tether_collections::CollectionError>(())
//! ```
//!
//! ## Architecture
//!
//! - Standalone error handling via [`error`]
//! - Structured logging through `tracing` (subscriber set up by the binary)
//! - Pool configuration via [`pool::PoolConfig`], overridable from the
//!   environment

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rust_2018_idioms)]

pub mod container;
pub mod error;
pub mod list;
pub(crate) mod node;
pub mod pool;
pub mod queue;
pub mod stack;

pub use crate::container::Container;
pub use crate::error::{CollectionError, CollectionResult, Result};
pub use crate::list::LinkedList;
pub use crate::queue::Queue;
pub use crate::stack::Stack;

// Public API exports
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.

    pub use crate::container::Container;
    pub use crate::error::{CollectionError, CollectionResult};
    pub use crate::list::LinkedList;
    pub use crate::pool::{PoolConfig, PoolExt, PoolRegistry, Pooled};
    pub use crate::queue::Queue;
    pub use crate::stack::Stack;
}
