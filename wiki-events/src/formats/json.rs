//! JSON event stream: an array of objects tagged by `"event"`.

use crate::error::ConvertError;
use crate::format::EventFormat;
use crate::ir::events::Event;

pub struct JsonFormat;

impl EventFormat for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Event stream as a JSON array"
    }

    fn write(&self, events: &[Event]) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(events).map_err(|err| ConvertError::Encode(err.to_string()))
    }
}
