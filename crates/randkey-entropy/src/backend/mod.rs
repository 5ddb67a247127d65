//! Platform entropy backends. Exactly one is compiled per target.

#[cfg(unix)]
mod device;
#[cfg(unix)]
pub(crate) use device::{available, fill};

#[cfg(not(unix))]
mod os;
#[cfg(not(unix))]
pub(crate) use os::{available, fill};
