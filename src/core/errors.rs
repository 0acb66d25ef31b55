use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantBuddyError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown plant: '{0}' is not in the catalog")]
    UnknownPlant(String),
}

impl From<std::io::Error> for PlantBuddyError {
    fn from(error: std::io::Error) -> Self {
        PlantBuddyError::Io(Box::new(error))
    }
}
