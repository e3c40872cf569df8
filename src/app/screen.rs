// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A viewer session is open.
    Viewer,
    /// Nothing to show: no folder given, the folder failed to open, or the
    /// session was closed.
    Empty,
}
