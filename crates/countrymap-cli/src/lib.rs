//! countrymap-cli
//! ==============
//!
//! Command-line front-end for `countrymap-core`.
//!
//! This crate primarily provides a binary (`countrymap`). The library target
//! only exists so that docs.rs renders this overview. See the README for
//! full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! countrymap --help
//! countrymap continents
//! countrymap countries Europe
//! countrymap lookup Europe france --neighbor Belgium
//! countrymap export Europe france --neighbor Belgium --out exports/
//! countrymap map Europe france --out france.html
//! ```
//!
//! For programmatic access use the `countrymap-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
