//! Session reuse with a liveness check.
//!
//! A [`SessionHandle`] owns a [`Cluster`] and the session created from it.
//! The session is handed out while it stays open and recreated once the
//! driver reports it closed. The handle is an ordinary value; share it or
//! keep several as the application needs.

use std::sync::Arc;

use cqlgen_core::{CqlError, DriverError, Result, Session};

/// Something that can open sessions, usually a configured driver cluster
pub trait Cluster {
    type Session: Session;

    fn create_session(&self) -> std::result::Result<Self::Session, DriverError>;
}

/// Lazily created, reusable session for one [`Cluster`]
#[derive(Debug)]
pub struct SessionHandle<C: Cluster> {
    cluster: C,
    session: Option<Arc<C::Session>>,
}

impl<C: Cluster> SessionHandle<C> {
    pub fn new(cluster: C) -> Self {
        Self {
            cluster,
            session: None,
        }
    }

    /// The current session, creating a new one if there is none or the
    /// previous one was closed
    pub fn session(&mut self) -> Result<Arc<C::Session>> {
        if let Some(session) = self.session.as_ref().filter(|s| !s.is_closed()) {
            return Ok(Arc::clone(session));
        }

        let session = Arc::new(self.cluster.create_session().map_err(CqlError::Session)?);
        self.session = Some(Arc::clone(&session));
        Ok(session)
    }

    #[inline]
    pub fn cluster(&self) -> &C {
        &self.cluster
    }
}
