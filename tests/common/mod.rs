//! Shared test fixtures.
#![allow(dead_code)]

use std::cell::RefCell;

use serde_json::{json, Map, Value};
use vmanage_templates::transport::{Method, Response, Transport};
use vmanage_templates::Result;

#[derive(Default)]
struct State {
    /// (name, id) of every feature template.
    features: Vec<(String, String)>,
    /// Stored device template objects, each with a `templateId`.
    templates: Vec<Map<String, Value>>,
    next_id: u32,
    /// Template names whose create or update is refused.
    rejected: Vec<String>,
}

/// An in-memory vManage that remembers created, updated and deleted
/// device templates.
#[derive(Default)]
pub struct FakeVManage {
    state: RefCell<State>,
    calls: RefCell<Vec<(Method, String)>>,
}

impl FakeVManage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vManage holding feature templates with ids `f-<name>`.
    pub fn with_features(names: &[&str]) -> Self {
        let fake = Self::new();
        for name in names {
            fake.state
                .borrow_mut()
                .features
                .push((name.to_string(), format!("f-{}", name)));
        }
        fake
    }

    /// Answer every create or update of `name` with a 400.
    pub fn reject(&self, name: &str) {
        self.state.borrow_mut().rejected.push(name.to_string());
    }

    /// Store a device template object as if created earlier; returns its id.
    pub fn seed(&self, object: Value) -> String {
        let Value::Object(map) = object else {
            panic!("seeded template must be an object");
        };
        self.store(map)
    }

    /// The stored object named `name`.
    pub fn object_named(&self, name: &str) -> Option<Value> {
        self.state
            .borrow()
            .templates
            .iter()
            .find(|t| t.get("templateName") == Some(&json!(name)))
            .map(|t| Value::Object(t.clone()))
    }

    pub fn template_count(&self) -> usize {
        self.state.borrow().templates.len()
    }

    /// Requests other than reads and input dry-runs.
    pub fn mutations(&self) -> Vec<(Method, String)> {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, p)| *m != Method::Get && p != "template/device/config/input")
            .cloned()
            .collect()
    }

    fn store(&self, mut map: Map<String, Value>) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = format!("d-{}", state.next_id);
        map.insert("templateId".to_string(), json!(id));
        state.templates.push(map);
        id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.state
            .borrow()
            .templates
            .iter()
            .position(|t| t.get("templateId") == Some(&json!(id)))
    }

    fn is_rejected(&self, body: Option<&Value>) -> bool {
        let name = body.and_then(|b| b.get("templateName")).and_then(Value::as_str);
        name.is_some_and(|n| self.state.borrow().rejected.iter().any(|r| r == n))
    }

    fn not_found(path: &str) -> Response {
        Response::with_status(
            404,
            json!({"error": {"message": "Not found", "details": path}}),
        )
    }
}

impl Transport for FakeVManage {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        self.calls.borrow_mut().push((method, path.to_string()));

        let submission = matches!(method, Method::Post | Method::Put)
            && path != "template/device/config/input";
        if submission && self.is_rejected(body) {
            return Ok(Response::with_status(
                400,
                json!({"error": {
                    "message": "Failed to save device template",
                    "details": "Invalid template definition"
                }}),
            ));
        }

        let response = match (method, path) {
            (Method::Get, "template/feature") => {
                let rows: Vec<Value> = self
                    .state
                    .borrow()
                    .features
                    .iter()
                    .map(|(name, id)| {
                        json!({"templateId": id, "templateName": name, "factoryDefault": false})
                    })
                    .collect();
                Response::ok(json!({ "data": rows }))
            }
            (Method::Get, "template/device") => {
                let rows: Vec<Value> = self
                    .state
                    .borrow()
                    .templates
                    .iter()
                    .map(|t| {
                        json!({
                            "templateId": t["templateId"],
                            "templateName": t["templateName"],
                            "factoryDefault": t.get("factoryDefault").cloned().unwrap_or(json!(false)),
                        })
                    })
                    .collect();
                Response::ok(json!({ "data": rows }))
            }
            (Method::Get, p) if p.starts_with("template/device/object/") => {
                let id = &p["template/device/object/".len()..];
                match self.position(id) {
                    Some(i) => Response::ok(Value::Object(self.state.borrow().templates[i].clone())),
                    None => Response::ok(json!({})),
                }
            }
            (Method::Get, p) if p.starts_with("template/device/config/attached/") => {
                Response::ok(json!({"data": []}))
            }
            (Method::Post, "template/device/config/input") => {
                Response::ok(json!({"header": {"columns": []}, "data": []}))
            }
            (Method::Post, "template/device/feature" | "template/device/cli") => {
                match body {
                    Some(Value::Object(map)) => {
                        let id = self.store(map.clone());
                        Response::ok(json!({ "templateId": id }))
                    }
                    _ => Response::with_status(400, json!({"error": {"message": "No body"}})),
                }
            }
            (Method::Put, p) if p.starts_with("template/device/") => {
                let id = &p["template/device/".len()..];
                match (self.position(id), body) {
                    (Some(i), Some(Value::Object(map))) => {
                        let mut map = map.clone();
                        map.insert("templateId".to_string(), json!(id));
                        self.state.borrow_mut().templates[i] = map;
                        Response::ok(json!({}))
                    }
                    _ => Self::not_found(p),
                }
            }
            (Method::Delete, p) if p.starts_with("template/device/") => {
                let id = &p["template/device/".len()..];
                match self.position(id) {
                    Some(i) => {
                        self.state.borrow_mut().templates.remove(i);
                        Response::empty(200)
                    }
                    None => Self::not_found(p),
                }
            }
            (_, p) => Self::not_found(p),
        };

        Ok(response)
    }
}
