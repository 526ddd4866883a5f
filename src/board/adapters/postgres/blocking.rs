//! Blocking operation helpers for the `PostgreSQL` repositories.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection handed to blocking closures.
pub(super) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Shared persistence cause carried by repository errors.
pub(super) type StoreFault = Arc<dyn std::error::Error + Send + Sync>;

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// Pool checkout and join failures are mapped through `persistence`, which
/// is normally the repository error's `Persistence` variant.
pub(super) async fn run_blocking<F, T, E, M>(
    pool: &BoardPgPool,
    persistence: M,
    f: F,
) -> Result<T, E>
where
    F: FnOnce(&mut PooledConn) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: Fn(StoreFault) -> E + Send + Copy + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(|err| persistence(Arc::new(err)))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| persistence(Arc::new(err)))?
}
