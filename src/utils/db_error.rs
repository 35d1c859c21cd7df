//! Classification of `sqlx` errors into [`StoreError`] kinds.

use crate::domain::repositories::StoreError;

/// Name of the primary key constraint on `links.code`.
pub const LINKS_CODE_CONSTRAINT: &str = "links_pkey";

/// Returns true if `e` is a unique violation on the `links.code` column.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINKS_CODE_CONSTRAINT) | None)
}

/// Maps a `sqlx` error raised while operating on `code` to a [`StoreError`].
///
/// - unique violation on `links.code` → [`StoreError::DuplicateCode`]
/// - pool, I/O and TLS failures → [`StoreError::Unavailable`]
/// - everything else → [`StoreError::Query`]
pub fn map_sqlx_error(e: sqlx::Error, code: &str) -> StoreError {
    if is_unique_violation_on_code(&e) {
        return StoreError::DuplicateCode(code.to_string());
    }

    let message = e.to_string();

    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        _ => StoreError::Query(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut, "abc123");
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = map_sqlx_error(sqlx::Error::Io(io), "abc123");
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_is_query_error() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound, "abc123");
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolClosed));
    }
}
