//! Connection trait definitions.
//!
//! A connection, as far as this layer is concerned, is only a possible
//! source of a transport endpoint. Message framing, authentication
//! state, and dispatch all live in the surrounding bus.

use std::fmt;

/// Handle to the OS-level transport endpoint backing a connection.
///
/// For socket transports this wraps the raw descriptor whose peer
/// credential carries the MAC label. The handle is only meaningful to
/// the [`MacFacility`](super::MacFacility) that the same host supplies;
/// this layer never reads from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointHandle(i32);

impl EndpointHandle {
    /// Wrap a raw descriptor.
    pub fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw descriptor.
    pub fn raw(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EndpointHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "endpoint:{}", self.0)
    }
}

/// A peer connection as seen by the policy layer.
pub trait Connection {
    /// Returns the endpoint handle of the underlying transport, or
    /// `None` if the transport kind exposes no endpoint (pipes,
    /// in-process transports).
    fn transport_endpoint(&self) -> Option<EndpointHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SocketConnection(EndpointHandle);

    impl Connection for SocketConnection {
        fn transport_endpoint(&self) -> Option<EndpointHandle> {
            Some(self.0)
        }
    }

    struct PipeConnection;

    impl Connection for PipeConnection {
        fn transport_endpoint(&self) -> Option<EndpointHandle> {
            None
        }
    }

    #[test]
    fn test_endpoint_handle_round_trip() {
        let handle = EndpointHandle::from_raw(7);
        assert_eq!(handle.raw(), 7);
        assert_eq!(handle.to_string(), "endpoint:7");
    }

    #[test]
    fn test_connection_endpoint() {
        let conn = SocketConnection(EndpointHandle::from_raw(3));
        assert_eq!(conn.transport_endpoint(), Some(EndpointHandle::from_raw(3)));

        let conn = PipeConnection;
        assert!(conn.transport_endpoint().is_none());
    }
}
