//! Dash-prefixed option parsing with typed, defaulting accessors.
//!
//! Arguments have the form `-name`, `--name`, `-name=value` or `--name=value`.
//! Parsing happens in two passes:
//! - [`build_raw`] records every flag; the first occurrence of a name wins.
//! - [`resolve_negations`] maps `-no<name>` onto `<name>` unless `<name>` was
//!   given directly.
//!
//! The resulting [`ArgumentStore`] is then read with [`ArgumentStore::get_string`],
//! [`ArgumentStore::get_int`] and [`ArgumentStore::get_bool`].
//!
//! # Example
//!
//! ```
//! use getarg::ArgumentStore;
//!
//! let args = ArgumentStore::parse(["-nolisten", "--datadir=/tmp/node", "-maxconnections=NaN"])?;
//! assert!(!args.get_bool("listen", true));
//! assert_eq!(args.get_string("datadir", "~/.node"), "/tmp/node");
//! assert_eq!(args.get_int("maxconnections", 125), 0);
//! assert_eq!(args.get_int("port", 8333), 8333);
//! # Ok::<(), getarg::TokenError>(())
//! ```
//!
//! Build the store once at startup and pass it by reference to whatever needs
//! option lookups; it is not mutated after construction apart from the
//! explicit [`ArgumentStore::soft_set`] overlays.

mod access;
mod negation;
mod store;
mod token;

pub use access::{interpret_bool, parse_int};
pub use negation::{negated_name, resolve_negations};
pub use store::{ArgumentStore, build_raw};
pub use token::{RawArgument, Token, TokenError, canonical_name, tokenize};
