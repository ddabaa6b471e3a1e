use crate::api::client::{ApiClient, Outcome};
use crate::api::models::EventPayload;
use crate::error::SendError;
use std::io::Write;

pub const SUCCESS_MESSAGE: &str = "Request was successful";

/// Sends the purchase event and writes the two-line report to `out`.
/// On error nothing is written and the error is handed back to the caller.
pub async fn run<W: Write>(client: &ApiClient, out: &mut W) -> Result<Outcome, SendError> {
    let payload = EventPayload::purchase();
    let outcome = client.send_event(&payload).await?;
    write_report(&outcome, out)?;
    Ok(outcome)
}

pub fn write_report<W: Write>(outcome: &Outcome, out: &mut W) -> std::io::Result<()> {
    match outcome {
        Outcome::Success(json) => {
            writeln!(out, "{}", SUCCESS_MESSAGE)?;
            writeln!(out, "{}", json)?;
        }
        Outcome::Failure { status, body } => {
            writeln!(out, "Failed to make the request. Status code: {}", status)?;
            writeln!(out, "{}", body)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn render(outcome: &Outcome) -> String {
        let mut out = Vec::new();
        write_report(outcome, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn should_report_success_with_the_parsed_body() {
        let text = render(&Outcome::Success(json!({"result": "ok"})));
        assert_eq!("Request was successful\n{\"result\":\"ok\"}\n", text);
    }

    #[test]
    fn should_report_failure_with_status_and_raw_body() {
        let text = render(&Outcome::Failure { status: 400, body: "bad request".to_owned() });
        assert_eq!("Failed to make the request. Status code: 400\nbad request\n", text);
    }

    #[test]
    fn should_not_reparse_a_failure_body() {
        let text = render(&Outcome::Failure { status: 500, body: "{\"error\": 1}".to_owned() });
        assert!(text.ends_with("{\"error\": 1}\n"));
    }
}
