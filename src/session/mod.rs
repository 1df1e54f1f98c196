pub mod morph_session;
