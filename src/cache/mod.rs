pub mod fingerprint;
pub mod layout_cache;
