//! Host platform implementations of the outbound ports.

mod desktop;

pub use desktop::DesktopUrlLauncher;
