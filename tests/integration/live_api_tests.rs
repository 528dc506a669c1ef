//! End-to-end tests against a running server
//!
//! Start the server with a database before running:
//! `cargo test --test live_api_tests -- --ignored`

use reqwest::{multipart, Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:5000/api";

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..8])
}

async fn create_tool(client: &Client, name: &str, serial: &str) -> reqwest::Response {
    let form = multipart::Form::new()
        .text("name", name.to_string())
        .text("type", "portable")
        .text("serial_number", serial.to_string())
        .text("specs", r#"{"frequency":"136-174 MHz","power":"5W","channels":32}"#)
        .part(
            "photo",
            multipart::Part::bytes(b"fake-jpeg".to_vec()).file_name("radio.jpg"),
        );

    client
        .post(format!("{}/tools", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore]
async fn test_readiness() {
    let client = Client::new();
    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_login_flow() {
    let client = Client::new();
    let login = unique("operator");

    let response = client
        .post(format!("{}/soldiers", BASE_URL))
        .json(&json!({
            "login": login,
            "password": "secret",
            "role": "operator",
            "full_name": "Petro Ivanenko",
            "rank": "Sergeant"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let soldier: Value = response.json().await.expect("Failed to parse response");
    assert!(soldier.get("password").is_none());
    let soldier_id = soldier["_id"].as_str().expect("missing _id").to_string();

    // Correct credentials
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": login, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], login.as_str());
    assert_eq!(body["role"], "operator");
    assert_eq!(body["fullName"], "Petro Ivanenko");

    // Wrong password
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": login, "password": "nope" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown login
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": unique("ghost"), "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Password change, then login with the new one
    let response = client
        .put(format!("{}/me/password", BASE_URL))
        .json(&json!({ "login": login, "oldPassword": "secret", "newPassword": "fresh" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": login, "password": "fresh" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!("{}/soldiers/{}", BASE_URL, soldier_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_login_is_rejected() {
    let client = Client::new();
    let login = unique("dup");
    let payload = json!({ "login": login, "password": "pw", "role": "admin" });

    let first = client
        .post(format!("{}/soldiers", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{}/soldiers", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_tool_lifecycle() {
    let client = Client::new();
    let serial = unique("SN");
    let unit = unique("Alpha");

    let response = create_tool(&client, "Motorola DP4400", &serial).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let tool: Value = response.json().await.expect("Failed to parse response");
    let tool_id = tool["_id"].as_str().expect("missing _id").to_string();
    assert_eq!(tool["status"], "in-storage");
    assert_eq!(tool["specs"]["channels"].as_f64(), Some(32.0));
    assert!(tool["photo_path"]
        .as_str()
        .is_some_and(|p| p.starts_with(&format!("/uploads/{}-", serial)) && p.ends_with(".jpg")));

    // Same serial number again
    let response = create_tool(&client, "Motorola DP4400", &serial).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Fresh tools are unassigned
    let unassigned: Vec<Value> = client
        .get(format!("{}/tools/unassigned", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(unassigned.iter().any(|t| t["_id"] == tool_id.as_str()));

    // Assign to a unit
    let response = client
        .post(format!("{}/tools/assign", BASE_URL))
        .json(&json!({ "unitName": unit, "toolIds": [tool_id] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["updated"], 1);

    let tool: Value = client
        .get(format!("{}/tools/{}", BASE_URL, tool_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(tool["assigned_to"], unit.as_str());
    assert_eq!(tool["status"], "on-assignment");

    let unit_tools: Vec<Value> = client
        .get(format!("{}/units/{}/tools", BASE_URL, unit))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(unit_tools.len(), 1);

    let counts: Vec<Value> = client
        .get(format!("{}/analytics/tools-by-unit", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let entry = counts
        .iter()
        .find(|c| c["unitName"] == unit.as_str())
        .expect("unit missing from analytics");
    assert_eq!(entry["count"], 1);

    // Send to repair and clear the unit
    let form = multipart::Form::new()
        .text("status", "in-repair")
        .text("assigned_to", "");
    let response = client
        .put(format!("{}/tools/{}", BASE_URL, tool_id))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let tool: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(tool["status"], "in-repair");
    assert!(tool["assigned_to"].is_null());
    assert_eq!(tool["name"], "Motorola DP4400");
}

#[tokio::test]
#[ignore]
async fn test_unit_delete_leaves_tools_assigned() {
    let client = Client::new();
    let name = unique("Bravo");

    let response = client
        .post(format!("{}/units", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let unit: Value = response.json().await.expect("Failed to parse response");
    let unit_id = unit["_id"].as_str().expect("missing _id").to_string();

    let response = client
        .post(format!("{}/units", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let tool: Value = create_tool(&client, "Kenwood NX-1300", &unique("SN"))
        .await
        .json()
        .await
        .expect("Failed to parse response");
    client
        .post(format!("{}/tools/assign", BASE_URL))
        .json(&json!({ "unitName": name, "toolIds": [tool["_id"]] }))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .delete(format!("{}/units/{}", BASE_URL, unit_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    // The name stays on the tool after its unit is gone
    let unit_tools: Vec<Value> = client
        .get(format!("{}/units/{}/tools", BASE_URL, name))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(unit_tools.len(), 1);

    let response = client
        .delete(format!("{}/units/{}", BASE_URL, unit_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn get_json<T: serde::de::DeserializeOwned>(client: &Client, path: &str) -> T {
    client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

async fn create_soldier(client: &Client, login: &str, password: &str) -> Value {
    let response = client
        .post(format!("{}/soldiers", BASE_URL))
        .json(&json!({
            "login": login,
            "password": password,
            "role": "operator",
            "full_name": "Olena Kovalenko",
            "rank": "Corporal",
            "unit": "Alpha"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

fn is_unassigned(tool: &Value) -> bool {
    tool["assigned_to"].is_null() || tool["assigned_to"] == ""
}

#[tokio::test]
#[ignore]
async fn test_assignment_touches_only_listed_tools() {
    let client = Client::new();
    let unit = unique("Alpha");

    let mut ids = Vec::new();
    for name in ["Hytera PD785", "Hytera PD785", "Baofeng UV-5R"] {
        let tool: Value = create_tool(&client, name, &unique("SN"))
            .await
            .json()
            .await
            .expect("Failed to parse response");
        ids.push(tool["_id"].as_str().expect("missing _id").to_string());
    }
    let (first, second, bystander) = (&ids[0], &ids[1], &ids[2]);
    let before: Value = get_json(&client, &format!("/tools/{}", bystander)).await;

    let response = client
        .post(format!("{}/tools/assign", BASE_URL))
        .json(&json!({ "unitName": unit, "toolIds": [first, second] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["updated"], 2);

    for id in [first, second] {
        let tool: Value = get_json(&client, &format!("/tools/{}", id)).await;
        assert_eq!(tool["assigned_to"], unit.as_str());
        assert_eq!(tool["status"], "on-assignment");
    }

    let after: Value = get_json(&client, &format!("/tools/{}", bystander)).await;
    assert_eq!(after, before);

    // Unassigned list holds only tools without a unit
    let unassigned: Vec<Value> = get_json(&client, "/tools/unassigned").await;
    assert!(unassigned.iter().all(is_unassigned));
    assert!(unassigned.iter().any(|t| t["_id"] == bystander.as_str()));
    assert!(!unassigned
        .iter()
        .any(|t| t["_id"] == first.as_str() || t["_id"] == second.as_str()));

    let all: Vec<Value> = get_json(&client, "/tools").await;
    let free_in_all = all
        .iter()
        .filter(|t| is_unassigned(t))
        .any(|t| t["_id"] == bystander.as_str());
    assert!(free_in_all);
}

#[tokio::test]
#[ignore]
async fn test_analytics_skip_tools_without_unit() {
    let client = Client::new();
    let unit = unique("Alpha");

    let mut assigned = Vec::new();
    for _ in 0..2 {
        let tool: Value = create_tool(&client, "Motorola DP4400", &unique("SN"))
            .await
            .json()
            .await
            .expect("Failed to parse response");
        assigned.push(tool["_id"].clone());
    }

    // Empty unit on the form is stored as no unit
    let form = multipart::Form::new()
        .text("name", "Motorola DP4400")
        .text("serial_number", unique("SN"))
        .text("assigned_to", "");
    let response = client
        .post(format!("{}/tools", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let loose: Value = response.json().await.expect("Failed to parse response");
    assert!(loose["assigned_to"].is_null());

    client
        .post(format!("{}/tools/assign", BASE_URL))
        .json(&json!({ "unitName": unit, "toolIds": assigned }))
        .send()
        .await
        .expect("Failed to send request");

    let counts: Vec<Value> = get_json(&client, "/analytics/tools-by-unit").await;
    let entry = counts
        .iter()
        .find(|c| c["unitName"] == unit.as_str())
        .expect("unit missing from analytics");
    assert_eq!(entry["count"], 2);
    assert!(counts
        .iter()
        .all(|c| c["unitName"].as_str().is_some_and(|name| !name.is_empty())));

    let names: Vec<&str> = counts.iter().filter_map(|c| c["unitName"].as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
#[ignore]
async fn test_soldier_update_rules() {
    let client = Client::new();
    let taken = unique("taken");
    let login = unique("editor");

    create_soldier(&client, &taken, "pw-one").await;
    let soldier = create_soldier(&client, &login, "pw-two").await;
    let id = soldier["_id"].as_str().expect("missing _id").to_string();

    // Login of another soldier
    let response = client
        .put(format!("{}/soldiers/{}", BASE_URL, id))
        .json(&json!({ "login": taken }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Own login plus a stray password field
    let response = client
        .put(format!("{}/soldiers/{}", BASE_URL, id))
        .json(&json!({ "login": login, "rank": "Lieutenant", "password": "hijack" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["rank"], "Lieutenant");
    assert_eq!(updated["full_name"], "Olena Kovalenko");
    assert!(updated.get("password").is_none());

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": login, "password": "pw-two" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "login": login, "password": "hijack" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(format!("{}/soldiers/{}", BASE_URL, Uuid::new_v4()))
        .json(&json!({ "rank": "Major" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_profile_lookup() {
    let client = Client::new();
    let login = unique("profile");
    create_soldier(&client, &login, "secret").await;

    let response = client
        .post(format!("{}/me", BASE_URL))
        .json(&json!({ "login": login }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let profile: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(profile["login"], login.as_str());
    assert_eq!(profile["role"], "operator");
    assert_eq!(profile["rank"], "Corporal");
    assert_eq!(profile["unit"], "Alpha");
    assert!(profile.get("password").is_none());

    let response = client
        .post(format!("{}/me", BASE_URL))
        .json(&json!({ "login": unique("ghost") }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
