//! Closed sets of named, ordered singleton values.
//!
//! Two flavours:
//! - [`Enumeration`]: a payload type whose members are `&'static Member<E>` singletons,
//!   created by one explicit [`Enumeration::initialize`] call. Declared with [`enumeration!`].
//! - [`OrdinalEnum`]: a fieldless Rust enum (usually `#[derive(OrdinalEnum)]`) whose variants
//!   are the members. No registry, no initialization.
//!
//! Members cannot be built, cloned, or deserialized from outside the registry:
//!
//! ```compile_fail
//! use enum_sigil::Member;
//! struct Action;
//! let rogue = Member { ordinal: 0, name: "view", value: Action };
//! ```
//!
//! ```compile_fail
//! use enum_sigil::{enumeration, Enumeration, Member};
//! struct Action;
//! enumeration!(Action { view => |_| Action });
//! Action::initialize().unwrap();
//! let copy: Member<Action> = Action::view().unwrap().clone();
//! ```
//!
//! ```compile_fail
//! use enum_sigil::Declaration;
//! struct Action;
//! let mut declaration = Declaration::<Action>::new();
//! ```

extern crate self as enum_sigil;

mod enumeration;
pub use enumeration::*;

mod error;
pub use error::*;

mod member;
pub use member::*;

mod ordinal_enum;
pub use ordinal_enum::*;

mod registry;
pub use registry::*;

pub mod utils;

#[cfg(feature = "derive")]
pub use proc_macros_sigil::OrdinalEnum;
