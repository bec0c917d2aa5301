//! Closed sets of named, ordered singleton values: registry-backed [`Enumeration`]s declared
//! with [`enumeration!`], and native fieldless enums via `#[derive(OrdinalEnum)]`.
//!
//! ```
//! use sigil::{enumeration, Enumeration, OrdinalEnum};
//!
//! pub struct Action;
//! enumeration!(Action { view => |_| Action, edit => |_| Action });
//!
//! #[derive(OrdinalEnum, Clone, Copy, PartialEq, Eq, Debug)]
//! #[ordinal_enum(crate = "sigil", rename_all = "camelCase")]
//! enum Flag { NoState = 1, Ok = 2, NotOk = 4, Unavailable = 8 }
//!
//! Action::initialize().unwrap();
//! assert_eq!(1, Action::edit().unwrap().ordinal());
//! assert_eq!(Ok(Flag::NotOk), Flag::value_of("notOk"));
//! ```
//!
//! The derive expands to paths under `::enum_sigil` unless told otherwise. Crates that only
//! depend on `sigil` point it here with `#[ordinal_enum(crate = "sigil")]`:
//!
//! ```
//! #[derive(sigil::OrdinalEnum, Clone, Copy, PartialEq, Eq, Debug)]
//! #[ordinal_enum(crate = "sigil")]
//! enum Season { Spring, Summer, Autumn, Winter }
//!
//! use sigil::OrdinalEnum as _;
//! assert_eq!(2, Season::Autumn.ordinal());
//! assert_eq!(Some(Season::Winter), Season::from_ordinal(3));
//! assert_eq!("Summer", Season::Summer.to_string());
//! ```

pub use enum_sigil::*;
