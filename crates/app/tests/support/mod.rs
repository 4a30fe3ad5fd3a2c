//! In-process stand-in for the remote create-user service.
//!
//! The rules below encode the behaviour the scenario table expects from the
//! real service, so the whole table can run without network access.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use probe_application::{CreateUser, HarnessConfig, ScenarioRunner};
use probe_domain::Credential;
use probe_infrastructure::ReqwestTransport;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const ENDPOINT_PATH: &str = "/create/user";
pub const ROLL_NUMBER: &str = "RA2211003010123";

#[derive(Default)]
struct Registry {
    phones: HashSet<String>,
    emails: HashSet<String>,
}

/// Stateful create-user responder: uniqueness on phone and e-mail only.
#[derive(Default, Clone)]
pub struct UserServiceStub {
    registry: Arc<Mutex<Registry>>,
}

impl UserServiceStub {
    pub fn user_count(&self) -> usize {
        self.registry.lock().unwrap().phones.len()
    }
}

fn reject(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "message": message }))
}

fn name(body: &Value, field: &str) -> Result<String, String> {
    let value = body
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("{field} is required"))?
        .trim();
    let len = value.chars().count();
    if !(2..=50).contains(&len) {
        return Err(format!("{field} must be 2-50 characters"));
    }
    if !value.chars().any(char::is_alphabetic) {
        return Err(format!("{field} must contain letters"));
    }
    if value.contains(['<', '>']) {
        return Err(format!("{field} contains markup"));
    }
    Ok(value.to_string())
}

fn phone(body: &Value) -> Result<String, String> {
    let digits = match body.get("phoneNumber") {
        Some(Value::Number(n)) => n.as_u64().map(|n| n.to_string()),
        Some(Value::String(s)) if s.bytes().all(|b| b.is_ascii_digit()) => Some(s.clone()),
        _ => None,
    }
    .ok_or("phoneNumber must be digits")?;
    if digits.len() != 10 {
        return Err("phoneNumber must be 10 digits".to_string());
    }
    Ok(digits)
}

fn email(body: &Value) -> Result<String, String> {
    let value = body
        .get("emailId")
        .and_then(Value::as_str)
        .ok_or("emailId is required")?
        .trim();
    if !value.is_ascii() || value.len() > 254 {
        return Err("emailId is invalid".to_string());
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("emailId is invalid".to_string());
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err("emailId is invalid".to_string());
    }
    Ok(value.to_ascii_lowercase())
}

impl Respond for UserServiceStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string()
        };

        let roll_number = header("roll-number");
        if roll_number.trim().is_empty() {
            return reject(401, "roll-number header is required");
        }
        if !(5..=50).contains(&roll_number.len()) {
            return reject(400, "roll-number is invalid");
        }
        if !header("content-type").starts_with("application/json") {
            return ResponseTemplate::new(415);
        }

        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return reject(400, "malformed JSON");
        };
        let validated = name(&body, "firstName")
            .and_then(|_| name(&body, "lastName"))
            .and_then(|_| phone(&body))
            .and_then(|phone| email(&body).map(|email| (phone, email)));
        let (phone, email) = match validated {
            Ok(fields) => fields,
            Err(message) => return reject(400, &message),
        };

        let mut registry = self.registry.lock().unwrap();
        if registry.phones.contains(&phone) {
            return reject(400, "phone number already exists");
        }
        if registry.emails.contains(&email) {
            return reject(400, "email already exists");
        }
        registry.phones.insert(phone);
        registry.emails.insert(email);

        ResponseTemplate::new(201).set_body_json(json!({ "message": "user created" }))
    }
}

/// Starts a mock server with a fresh stub mounted on the endpoint path.
pub async fn start_service() -> (MockServer, UserServiceStub) {
    let server = MockServer::start().await;
    let stub = UserServiceStub::default();
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(stub.clone())
        .mount(&server)
        .await;
    (server, stub)
}

pub fn harness_for(server: &MockServer) -> CreateUser<ReqwestTransport> {
    let config = HarnessConfig::parse(
        &format!("{}{ENDPOINT_PATH}", server.uri()),
        Credential::new(ROLL_NUMBER),
    )
    .unwrap();
    CreateUser::new(Arc::new(ReqwestTransport::new().unwrap()), config)
}

pub fn runner_for(server: &MockServer) -> ScenarioRunner<ReqwestTransport> {
    ScenarioRunner::new(harness_for(server))
}
