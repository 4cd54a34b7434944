use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment with an isolated in-memory database and, on demand, a
/// session backed by the same database.
///
/// Each context owns its own `sqlite::memory:` connection, so tests never see
/// each other's rows. The session is created lazily because most data-layer
/// tests have no use for one.
pub struct TestContext {
    /// Connection to this test's private in-memory SQLite database.
    pub db: DatabaseConnection,

    /// Session instance, created on first call to `session()`.
    session: Option<Session>,
}

impl TestContext {
    /// Connects to a fresh in-memory database and creates the given tables.
    ///
    /// Called by `TestBuilder::build()`; statements run in the order given.
    pub(crate) async fn create(stmts: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(Self { db, session: None })
    }

    /// Returns the session, creating it on first call.
    ///
    /// Creation migrates the session store table into the context's database
    /// and applies the same 7-day inactivity expiry the server uses.
    /// Subsequent calls return the same session.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                // Share the context's SQLx pool with the session store
                let pool = self.db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store.migrate().await?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets the database connection and session together.
    ///
    /// Convenience for guard tests that need both; initializes the session if
    /// it does not exist yet.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        Ok((&self.db, self.session.as_ref().unwrap()))
    }
}
