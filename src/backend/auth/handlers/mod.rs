//! Authentication and Profile Handlers

pub mod login;
pub mod me;
pub mod profile;
pub mod register;

pub use login::login;
pub use me::get_me;
pub use profile::update_profile;
pub use register::register;
