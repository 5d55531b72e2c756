#![cfg_attr(docsrs, doc = include_str!("../README.md"))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, deny(missing_docs))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_debug_implementations)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
pub(crate) mod util;

pub mod error;
pub mod family;
pub mod list;

#[cfg(test)]
pub(crate) mod track;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use family::{Family, Variant};
#[doc(inline)]
pub use list::PolyList;

#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
}
