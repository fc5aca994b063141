//! Service directory trait definitions.
//!
//! The bus keeps the authoritative mapping from well-known names to the
//! connections that own them. The policy layer only ever asks one
//! question of it: who is the primary owner of a name right now? The
//! answer is deliberately not cached anywhere in this layer, because
//! name ownership can change between queries.

use crate::traits::connection::Connection;

/// Read access to the bus's name registry.
pub trait ServiceDirectory {
    /// The connection type this directory hands out.
    type Conn: Connection;

    /// Returns the connection that is the primary owner of `name`, or
    /// `None` if the name currently has no owner.
    fn primary_owner(&self, name: &str) -> Option<&Self::Conn>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::connection::EndpointHandle;
    use std::collections::HashMap;

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

    #[test]
    fn test_primary_owner_lookup() {
        let mut owners = HashMap::new();
        owners.insert(
            "org.example.Service".to_string(),
            StubConnection(Some(EndpointHandle::from_raw(4))),
        );
        let directory = StubDirectory { owners };

        let owner = directory.primary_owner("org.example.Service");
        assert!(owner.is_some());
        assert_eq!(
            owner.unwrap().transport_endpoint(),
            Some(EndpointHandle::from_raw(4))
        );

        assert!(directory.primary_owner("org.example.Missing").is_none());
    }
}
