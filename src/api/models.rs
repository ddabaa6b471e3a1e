use serde::{Deserialize, Serialize};

pub const PURCHASE_EVENT_NAME: &str = "Purchase";
pub const PURCHASE_EVENT_TIME: i64 = 1678886400;
pub const TEST_EVENT_CODE: &str = "TEST39893";

/// Request body for the conversions endpoint: a batch of server events under `data`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventPayload {
    pub data: Vec<ServerEvent>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerEvent {
    pub event_name: String,
    /// Unix timestamp, seconds.
    pub event_time: i64,
    pub user_data: UserData,
    pub custom_data: CustomData,
    /// Routes the event to the destination's test-mode pipeline.
    pub test_event_code: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserData {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomData {
    pub value: f64,
    pub currency: String,
}

impl EventPayload {
    /// The single synthetic purchase sent on every run.
    pub fn purchase() -> Self {
        Self {
            data: vec![ServerEvent {
                event_name: PURCHASE_EVENT_NAME.to_string(),
                event_time: PURCHASE_EVENT_TIME,
                user_data: UserData {
                    email: "test@example.com".to_string(),
                },
                custom_data: CustomData {
                    value: 100.00,
                    currency: "USD".to_string(),
                },
                test_event_code: TEST_EVENT_CODE.to_string(),
            }],
        }
    }
}
