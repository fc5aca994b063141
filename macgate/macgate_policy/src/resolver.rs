//! Label resolution for peer connections.
//!
//! The resolver turns a connection into the MAC label of its transport
//! endpoint. It performs no caching: a label is a property of the
//! OS-level socket credential, cheap to query and not guaranteed stable
//! across policy re-evaluations (a bus-name owner handoff, for example,
//! re-evaluates against a different connection entirely).

use macgate_core::error::LabelError;
use macgate_core::traits::{Connection, MacFacility};
use macgate_core::SecurityLabel;
use std::sync::Arc;
use tracing::trace;

/// Resolves the MAC label of a peer connection.
pub struct LabelResolver {
    /// The MAC facility to query.
    facility: Arc<dyn MacFacility>,
}

impl LabelResolver {
    /// Create a resolver backed by the given MAC facility.
    pub fn new(facility: Arc<dyn MacFacility>) -> Self {
        Self { facility }
    }

    /// Gets a reference to the MAC facility.
    pub fn facility(&self) -> &Arc<dyn MacFacility> {
        &self.facility
    }

    /// Resolve the MAC label of `connection`.
    ///
    /// Every call re-queries the transport; the returned label is a
    /// fresh value owned by the caller.
    ///
    /// # Arguments
    ///
    /// * `connection` - The connection whose label to resolve.
    ///
    /// # Returns
    ///
    /// * `Ok(SecurityLabel)` - The freshly resolved label.
    /// * `Err(LabelError::EndpointUnavailable)` - The connection's
    ///   transport exposes no endpoint.
    /// * `Err(LabelError::LabelUnavailable)` - The MAC facility could
    ///   not produce a label; the OS error is attached.
    pub fn resolve<C: Connection + ?Sized>(
        &self,
        connection: &C,
    ) -> Result<SecurityLabel, LabelError> {
        let endpoint = connection
            .transport_endpoint()
            .ok_or(LabelError::EndpointUnavailable)?;

        let label = self
            .facility
            .endpoint_label(endpoint)
            .map_err(|source| LabelError::LabelUnavailable { source })?;

        trace!(%endpoint, %label, "resolved peer label");
        Ok(label)
    }
}
