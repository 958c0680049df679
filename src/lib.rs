//! drush core: global service locator and layered configuration
//!
//! Two independent pieces, both consumed by the surrounding CLI:
//!
//! - [`locator`]: a process-wide slot holding the active
//!   [`container::ServiceContainer`], so legacy procedural code can
//!   reach services without constructor injection. Bootstrap sets the
//!   container once; everything else resolves through the locator.
//! - [`config`]: a layered configuration overlay with
//!   environment-derived accessors, including writable cache-directory
//!   resolution with a home-then-tmp fallback.
//!
//! [`version`] memoizes the tool version read from the `drush.info`
//! file. I/O goes through [`infrastructure::FileSystem`] so tests can
//! substitute mocks.

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod exitcode;
pub mod infrastructure;
pub mod locator;
pub mod logging;
pub mod util;
pub mod version;

pub use config::{ConfigOverlay, DrushConfig};
pub use container::ServiceContainer;
pub use error::{ConfigError, LocatorError, VersionError};
pub use logging::{Logger, TracingLogger};
pub use version::VersionInfo;
