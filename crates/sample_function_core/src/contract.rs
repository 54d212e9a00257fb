use serde::{Deserialize, Serialize};

pub const OK_STATUS: u16 = 200;
pub const HELLO_MESSAGE: &str = "Hello world";

/// Opaque event handed over by the hosting runtime. The handler never looks inside.
pub type InvocationEvent = serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl ResponseEnvelope {
    fn ok(payload: MessageBody) -> Self {
        Self {
            status: OK_STATUS,
            body: serde_json::to_string(&payload).expect("response payload should serialize"),
        }
    }

    pub fn hello() -> Self {
        Self::ok(MessageBody {
            message: HELLO_MESSAGE.to_string(),
        })
    }
}
