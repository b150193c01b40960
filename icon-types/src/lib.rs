//! Common scalar data types used in TTIC icon files
//!
//! An icon file stores every coordinate as a [`TaggedF2Dot14`]: a 2.14
//! fixed-point value whose lowest bit has been given over to a structural
//! flag. Everything else in the format is built from these, plain 16-bit
//! integers, and the [`TTIC_MAGIC`] tag.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod fixed;
mod point;
mod tag;


pub use bbox::BoundingBox;
pub use fixed::TaggedF2Dot14;
pub use point::{Point, PointKind};
pub use tag::Tag;

/// The magic number at the start of every icon file.
pub const TTIC_MAGIC: Tag = Tag::new(b"TTIC");
