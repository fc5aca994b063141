//! Label lookup for named peers.
//!
//! Answers "what is the MAC label of the connection that owns bus name
//! N?" — the query the bus driver exposes to clients that want to make
//! their own policy decisions about a peer. The registry lookup and the
//! label resolution both happen at call time; nothing is cached, so an
//! owner handoff between two queries is always observed.

use macgate_core::error::ContextError;
use macgate_core::traits::ServiceDirectory;
use macgate_core::SecurityLabel;
use tracing::debug;

use crate::resolver::LabelResolver;

/// Resolve the label of the connection that currently owns `name`.
///
/// # Errors
///
/// * [`ContextError::NameHasNoOwner`] if no connection owns `name`.
/// * [`ContextError::Label`] if the owner's label cannot be resolved.
pub fn connection_context<D: ServiceDirectory>(
    directory: &D,
    resolver: &LabelResolver,
    name: &str,
) -> Result<SecurityLabel, ContextError> {
    debug!(name, "asked for label of connection");

    let owner = directory
        .primary_owner(name)
        .ok_or_else(|| ContextError::NameHasNoOwner(name.to_string()))?;

    Ok(resolver.resolve(owner)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macgate_core::traits::{Connection, EndpointHandle, MacFacility};
    use macgate_core::AccessRights;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Arc;

    struct LabelByEndpoint;

    impl MacFacility for LabelByEndpoint {
        fn endpoint_label(&self, endpoint: EndpointHandle) -> io::Result<SecurityLabel> {
            Ok(SecurityLabel::new(format!("Peer{}", endpoint.raw())))
        }

        fn access_allowed(
            &self,
            _subject: &SecurityLabel,
            _object: &SecurityLabel,
            _rights: AccessRights,
        ) -> bool {
            false
        }
    }

    struct StubConnection(Option<EndpointHandle>);

    impl Connection for StubConnection {
        fn transport_endpoint(&self) -> Option<EndpointHandle> {
            self.0
        }
    }

    struct StubDirectory {
        owners: HashMap<String, StubConnection>,
    }

    impl ServiceDirectory for StubDirectory {
        type Conn = StubConnection;

        fn primary_owner(&self, name: &str) -> Option<&StubConnection> {
            self.owners.get(name)
        }
    }

    fn directory() -> StubDirectory {
        let mut owners = HashMap::new();
        owners.insert(
            "org.example.Service".to_string(),
            StubConnection(Some(EndpointHandle::from_raw(9))),
        );
        owners.insert("org.example.Pipe".to_string(), StubConnection(None));
        StubDirectory { owners }
    }

    #[test]
    fn test_owned_name_resolves_to_owner_label() {
        let resolver = LabelResolver::new(Arc::new(LabelByEndpoint));
        let label = connection_context(&directory(), &resolver, "org.example.Service").unwrap();
        assert_eq!(label.as_str(), "Peer9");
    }

    #[test]
    fn test_unowned_name() {
        let resolver = LabelResolver::new(Arc::new(LabelByEndpoint));
        let err = connection_context(&directory(), &resolver, "org.example.Missing").unwrap_err();
        match err {
            ContextError::NameHasNoOwner(name) => assert_eq!(name, "org.example.Missing"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_owner_without_endpoint() {
        let resolver = LabelResolver::new(Arc::new(LabelByEndpoint));
        let err = connection_context(&directory(), &resolver, "org.example.Pipe").unwrap_err();
        assert!(matches!(
            err,
            ContextError::Label(macgate_core::error::LabelError::EndpointUnavailable)
        ));
    }
}
