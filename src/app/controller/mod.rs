use super::*;

include!("core.rs");
include!("checkout.rs");
