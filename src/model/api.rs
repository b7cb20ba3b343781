use serde::Serialize;

/// Standard error body returned by every failed API call.
#[derive(Serialize, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Standard confirmation body for operations that return no resource.
#[derive(Serialize, Debug)]
pub struct MessageDto {
    pub message: String,
}
