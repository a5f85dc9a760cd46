//! Generic helpers over maps, sets, and slices.
//!
//! Absence is expressed with [`Option`] and possible aliasing of inputs with
//! [`Cow`][`alloc::borrow::Cow`], so the difference between "no collection" and "an empty
//! collection" (and between "borrowed from an input" and "freshly allocated") is part of each
//! signature.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::cloned_instead_of_copied,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::from_iter_instead_of_collect,
    clippy::if_not_else,
    clippy::manual_ok_or,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::redundant_else,
    clippy::unreadable_literal,
    clippy::unused_self
)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod map;
pub mod set;
pub mod slice;

pub mod prelude {
    pub use crate::map::Mapping;
    pub use crate::set::Set;
    #[cfg(feature = "alloc")]
    pub use crate::slice::Stringy;
}
