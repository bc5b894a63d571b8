//! Copy-on-write value buffer over shared reference-counted storage.
//!
//! [`CowBuffer`] behaves like an owned `Vec`: mutating one handle is never
//! visible through another. Copies are O(1) and share storage until the
//! first divergent write, which clones the elements into a private
//! allocation. A handle that already owns its storage alone writes in place
//! and never allocates a second buffer.
//!
//! ```
//! use tether_cow::CowBuffer;
//!
//! let x: CowBuffer = vec![1, 2, 3].into();
//! let mut y = x.clone();
//! y.push(9).unwrap();
//! assert_eq!(x.snapshot(), vec![1, 2, 3]);
//! assert_eq!(y.snapshot(), vec![1, 2, 3, 9]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;

pub use buffer::CowBuffer;
pub use tether_core::CowError;
