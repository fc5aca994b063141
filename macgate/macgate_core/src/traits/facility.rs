//! MAC facility trait definitions.
//!
//! The facility is the operating system's mandatory-access-control
//! implementation: it labels transport endpoints and answers binary
//! access checks. Hosts provide one implementation per supported
//! facility; tests substitute mocks.

use crate::label::SecurityLabel;
use crate::rights::AccessRights;
use crate::traits::connection::EndpointHandle;
use std::io;

/// The operating system's MAC facility.
///
/// Implementations are shared across concurrently evaluated connections
/// (`Arc<dyn MacFacility>`), so the trait requires `Send + Sync`.
///
/// # Examples
///
/// ```
/// use macgate_core::traits::{EndpointHandle, MacFacility};
/// use macgate_core::{AccessRights, SecurityLabel};
/// use std::io;
///
/// /// A facility that labels every endpoint the same and allows
/// /// everything — only useful on systems without MAC enforcement.
/// struct PermissiveFacility;
///
/// impl MacFacility for PermissiveFacility {
///     fn endpoint_label(&self, _endpoint: EndpointHandle) -> io::Result<SecurityLabel> {
///         Ok(SecurityLabel::new("_"))
///     }
///
///     fn access_allowed(
///         &self,
///         _subject: &SecurityLabel,
///         _object: &SecurityLabel,
///         _rights: AccessRights,
///     ) -> bool {
///         true
///     }
/// }
/// ```
pub trait MacFacility: Send + Sync {
    /// Query the MAC label attached to a transport endpoint.
    ///
    /// Returns a freshly allocated label on success. Failure means the
    /// endpoint has no label, the facility is unsupported at runtime, or
    /// the underlying system call failed; the `io::Error` carries the
    /// OS-level cause.
    fn endpoint_label(&self, endpoint: EndpointHandle) -> io::Result<SecurityLabel>;

    /// Binary access check: may `subject` exercise `rights` on `object`?
    ///
    /// Denial is an expected, frequent outcome and is therefore a
    /// `bool`, not an error.
    fn access_allowed(
        &self,
        subject: &SecurityLabel,
        object: &SecurityLabel,
        rights: AccessRights,
    ) -> bool;
}
