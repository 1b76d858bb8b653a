//! Canned request bodies sent by `post` and `put`.

use serde_json::{json, Value};

use crate::cli::args::Endpoint;

pub fn example_payload(endpoint: Endpoint) -> Value {
    match endpoint {
        Endpoint::Universities => json!({
            "name": "Tech University",
            "location": "Boston",
        }),
        Endpoint::Students => json!({
            "facultyNumber": "FN001",
            "firstName": "John",
            "middleName": "Michael",
            "lastName": "Doe",
            "universityId": 1,
        }),
    }
}
