// SPDX-License-Identifier: MPL-2.0
//! Contact submissions against a throwaway local HTTP endpoint.

use essence_clinic::contact::{ContactClient, ContactForm};
use essence_clinic::content::catalog::treatment_option;
use essence_clinic::error::SubmitError;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Accepts one connection, answers with `status` and hands back the raw request.
async fn serve_once(status: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response =
            format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.expect("write response");
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{addr}/api/contact"), rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = socket.read(&mut chunk).await.expect("read request");
        if read == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&raw);
        if let Some((head, body)) = text.split_once("\r\n\r\n") {
            let length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if body.len() >= length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&raw).into_owned()
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_name("Ana Paula".to_string());
    form.set_whatsapp("11999998888".to_string());
    form.select_treatment(treatment_option("clareamento").expect("known option"));
    form
}

#[tokio::test]
async fn success_status_is_delivered() {
    let (endpoint, request) = serve_once("201 Created").await;
    let client = ContactClient::new(endpoint, Duration::from_secs(5)).expect("client builds");

    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    assert_eq!(client.submit(&submission).await, Ok(()));

    let request = request.await.expect("server saw request");
    assert!(request.starts_with("POST /api/contact"));
    let (_, body) = request.split_once("\r\n\r\n").expect("request has a body");
    let json: serde_json::Value = serde_json::from_str(body).expect("body is json");
    assert_eq!(json["name"], "Ana Paula");
    assert_eq!(json["whatsapp"], "11999998888");
    assert_eq!(json["treatment"], "clareamento");
    assert!(json.get("message").is_none());

    form.finish_submit(true);
    assert!(form.name().is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let (endpoint, _request) = serve_once("500 Internal Server Error").await;
    let client = ContactClient::new(endpoint, Duration::from_secs(5)).expect("client builds");

    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is valid");
    assert_eq!(client.submit(&submission).await, Err(SubmitError::Status(500)));

    form.finish_submit(false);
    assert_eq!(form.name(), "Ana Paula");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        listener.local_addr().expect("local addr")
    };
    let client = ContactClient::new(format!("http://{addr}/api/contact"), Duration::from_secs(5))
        .expect("client builds");

    let submission = filled_form().begin_submit().expect("form is valid");
    let result = client.submit(&submission).await;
    assert!(
        matches!(result, Err(SubmitError::Transport(_))),
        "unexpected result: {result:?}"
    );
}

#[test]
fn message_is_sent_only_when_written() {
    let mut form = filled_form();
    form.set_message("  Gostaria de saber valores  ".to_string());
    let submission = form.validate().expect("form is valid");
    let json = serde_json::to_value(&submission).expect("serializes");
    assert_eq!(json["message"], "Gostaria de saber valores");
}
