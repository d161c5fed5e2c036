//! Shape-only input validation: address format and keypair file layout.
//!
//! Nothing in this module proves ownership or cryptographic validity; it
//! only answers "does this look like the right kind of input".

pub mod address;
pub mod keypair;

pub use address::{is_valid_address, BASE58_ALPHABET};
pub use keypair::{check_keypair_file, is_valid_keypair_file, KeypairFileError};
