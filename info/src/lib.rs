//! Build metadata shared by the server and its helper binaries.

pub const NAME: &str = "camp-backend";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REVISION: Option<&str> = option_env!("CAMP_BACKEND_REVISION");

pub const BUILD_TIMESTAMP: Option<&str> = option_env!("CAMP_BACKEND_BUILD_TIMESTAMP");
