#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A reading component was NaN or infinite. Missing fields are
    /// rejected at the HTTP boundary before the engine is involved.
    #[error("Invalid reading: {field} must be a finite number")]
    InvalidReading { field: &'static str },
}
