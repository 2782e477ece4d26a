//! # Khulnasoft Defaults
//!
//! Resolves the secret-bearing variables a Khulnasoft container needs
//! before provisioning, then hands them to the external renderer.
//!
//! - HEC token: random UUID when unset
//! - Admin password: 24 random bytes, base64, when unset
//! - Indexer cluster pair: `IDXC_PASS4SYMMKEY` wins over `IDXC_SECRET`
//! - Search head cluster pair: `SHC_SECRET` wins over `SHC_PASS4SYMMKEY`
//!
//! Resolution itself is a pure function over [`DefaultsInput`]; reading and
//! writing the process environment happens only at the edges.
//!
//! ## Example
//!
//! ```
//! use khulnasoft_defaults::{resolve, DefaultsInput, SystemEntropy};
//!
//! let input = DefaultsInput {
//!     password: Some("fixed123".to_string()),
//!     ..Default::default()
//! };
//! let resolved = resolve(input, &mut SystemEntropy).unwrap();
//!
//! assert_eq!(resolved.password.value, "fixed123");
//! assert_eq!(resolved.idxc_secret.value, resolved.idxc_pass4symmkey.value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entropy;
pub mod input;
pub mod resolver;
pub mod validator;
pub mod output;
pub mod handoff;

pub use entropy::{generate_secret, generate_uuid, SystemEntropy, SECRET_BYTES};
pub use input::DefaultsInput;
pub use resolver::{resolve, ResolvedDefaults, ResolvedValue};
pub use validator::{validate, ValidationSummary};
pub use handoff::{provision, Provisioned, ProcessRenderer};
