/// Required fields missing from a contact payload. User-correctable;
/// surfaces as a 400 without enumerating which fields are absent.
#[derive(Debug)]
pub struct ValidationError;

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required fields")
    }
}

impl std::error::Error for ValidationError {}

/// Persistence medium failure. Server-side; surfaces as a 500 with the
/// description embedded in the route's error message.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage unavailable: {e}"),
            StoreError::Corrupt(e) => write!(f, "stored submissions unreadable: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}
