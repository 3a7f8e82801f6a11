#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

//! Lazy, pull-based sequences.
//!
//! A [`Sequence`] owns exactly one [`Producer`], and every combinator wraps that producer by
//! value into a new one. Nothing runs until something pulls: [`Sequence::for_each`],
//! [`Sequence::collect_to`], [`Sequence::front`] and friends drive the whole chain one element at
//! a time, without materializing anything in between.
//!
//! ```
//! use lazyseq_core::{iota, unfold};
//!
//! let evens = iota(0u32).filter(|x| x % 2 == 0).take(4).collect_to::<Vec<_>>();
//! assert_eq!(evens, [0, 2, 4, 6]);
//!
//! let fibonacci = unfold((1u64, 1u64), |(a, b)| Some((a, (b, a + b))))
//! 	.take(10)
//! 	.collect_to::<Vec<_>>();
//! assert_eq!(fibonacci, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
//! ```

extern crate alloc;

mod combinators;
mod cursor;
mod error;
mod producer;
mod sequence;
mod signal;
mod source;

pub use self::{
	combinators::*, cursor::*, error::*, producer::*, sequence::*, signal::*, source::*,
};
