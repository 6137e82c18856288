use sqlx::PgPool;

/// Shared handler state. The pool is the only thing held between
/// requests; the search path itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
