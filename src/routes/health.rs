use serde_json::{json, Value};

use crate::reply::JsonReply;

pub async fn health_check() -> JsonReply<Value> {
    JsonReply::ok(json!({ "status": "ok" }))
}
