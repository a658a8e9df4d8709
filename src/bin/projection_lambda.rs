//! AWS Lambda handler: POST a JSON plan, receive the yearly series
//!
//! Invalid plans are rejected with 400 and the validation message.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use serde::Serialize;
use wealth_projection::{project, ProjectionInput, YearlyDataPoint};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    input: ProjectionInput,
    points: Vec<YearlyDataPoint>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Turn a request body into a status code and JSON payload
fn handle_body(body: &[u8]) -> (u16, String) {
    let input: ProjectionInput = match serde_json::from_slice(body) {
        Ok(input) => input,
        Err(e) => return error_payload(format!("Malformed plan: {e}")),
    };

    if let Err(e) = input.validate() {
        log::info!("Rejected plan: {}", e);
        return error_payload(e.to_string());
    }

    let points = project(&input);
    match serde_json::to_string(&ProjectionResponse { input, points }) {
        Ok(json) => (200, json),
        Err(e) => {
            log::error!("Failed to serialize projection: {}", e);
            (500, r#"{"error":"internal error"}"#.to_string())
        }
    }
}

fn error_payload(message: String) -> (u16, String) {
    let json = serde_json::to_string(&ErrorResponse { error: message })
        .unwrap_or_else(|_| r#"{"error":"bad request"}"#.to_string());
    (400, json)
}

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let (status, payload) = handle_body(event.body());

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
