/// Keeps session state alive between invocations of the front end.
pub trait SessionRepository<T> {
    /// Returns `None` when no session has been saved yet.
    fn load(&self) -> anyhow::Result<Option<T>>;

    fn save(&self, state: &T) -> anyhow::Result<()>;

    /// Discards the saved session. Returns `false` if there was none.
    fn clear(&self) -> anyhow::Result<bool>;
}
