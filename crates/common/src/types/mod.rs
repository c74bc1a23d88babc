use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of the `GET /api` connectivity probe used by the frontend.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self { name: "Hello world".into() }
    }
}

/// Fixed-shape message body, e.g. `{"message": "Token is missing"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
