/// Outcome of a favorite operation.
///
/// The favorite toggle is idempotent: repeating it never errors and never
/// moves the counter twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// Link was created and the club's favorites counter was incremented.
    Added,
    /// Link already existed; nothing changed.
    AlreadyFavorited,
}

/// Outcome of an unfavorite operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfavoriteOutcome {
    /// Link was removed and the counter decremented, floored at zero.
    Removed,
    /// No link existed; nothing changed.
    NotFavorited,
}
