// Integration tests for the Eventbook API
// Run with: cargo test --test integration_test -- --ignored
// Requires a running server (DATABASE_URL + `cargo run`) at API_BASE_URL.

use serde_json::{json, Value};

const API_BASE_URL: &str = "http://localhost:8080";

fn unique_email(tag: &str) -> String {
    // Keyed by pid so repeated runs against one database don't collide
    format!("{tag}-{}@integration.test", std::process::id())
}

async fn register(client: &reqwest::Client, email: &str, role: &str) -> reqwest::Response {
    client
        .post(format!("{API_BASE_URL}/api/auth/register"))
        .json(&json!({
            "email": email,
            "password": "s3cret-pass",
            "firstName": "Test",
            "lastName": "Account",
            "role": role,
        }))
        .send()
        .await
        .expect("Failed to call register")
}

async fn login(client: &reqwest::Client, email: &str) -> Value {
    let response = client
        .post(format!("{API_BASE_URL}/api/auth/login"))
        .json(&json!({"email": email, "password": "s3cret-pass"}))
        .send()
        .await
        .expect("Failed to call login");
    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse login response")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test integration_test -- --ignored
async fn test_full_event_lifecycle() {
    let client = reqwest::Client::new();

    // Step 1: Register a vendor and an admin
    let vendor_email = unique_email("vendor");
    let admin_email = unique_email("admin");
    assert_eq!(register(&client, &vendor_email, "VENDOR").await.status(), 200);
    assert_eq!(register(&client, &admin_email, "ADMIN").await.status(), 200);

    // Registering the same email twice fails with a field map
    let duplicate = register(&client, &vendor_email, "VENDOR").await;
    assert_eq!(duplicate.status(), 400);
    let errors: Value = duplicate.json().await.unwrap();
    assert!(errors.get("email").is_some());

    // Step 2: Login
    let vendor = login(&client, &vendor_email).await;
    let vendor_token = vendor["token"].as_str().unwrap().to_string();
    assert_eq!(vendor["role"], "VENDOR");
    assert_eq!(vendor["username"], vendor_email);

    let admin = login(&client, &admin_email).await;
    let admin_token = admin["token"].as_str().unwrap().to_string();

    // Wrong password is a generic 401
    let bad = client
        .post(format!("{API_BASE_URL}/api/auth/login"))
        .json(&json!({"email": vendor_email, "password": "wrong-pass"}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), 401);

    // Step 3: Profile requires a token
    let anonymous = client
        .get(format!("{API_BASE_URL}/api/users/profile"))
        .send()
        .await
        .unwrap();
    assert_eq!(anonymous.status(), 401);

    let profile: Value = client
        .get(format!("{API_BASE_URL}/api/users/profile"))
        .bearer_auth(&vendor_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["email"], vendor_email);
    assert!(profile.get("password").is_none());
    assert!(profile.get("passwordHash").is_none());

    // Step 4: Vendor creates an event; it starts PENDING
    let created: Value = {
        let response = client
            .post(format!("{API_BASE_URL}/api/vendor/events"))
            .bearer_auth(&vendor_token)
            .json(&json!({
                "title": "Tech Conference",
                "description": "Talks in the main conference hall",
                "category": "tech",
                "location": "Phoenix",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
        response.json().await.unwrap()
    };
    let event_id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    // Pending events are invisible publicly, by id and by search
    let missing = client
        .get(format!("{API_BASE_URL}/api/public/events/{event_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    let search: Vec<Value> = client
        .get(format!("{API_BASE_URL}/api/public/events/search"))
        .query(&[("query", "conference")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(search.iter().all(|e| e["id"] != created["id"]));

    // But the vendor sees their own pending event
    let own: Vec<Value> = client
        .get(format!("{API_BASE_URL}/api/vendor/events"))
        .bearer_auth(&vendor_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(own.iter().any(|e| e["id"] == created["id"]));

    // Step 5: Vendors cannot moderate; admins can
    let forbidden = client
        .put(format!("{API_BASE_URL}/api/admin/events/{event_id}/status"))
        .bearer_auth(&vendor_token)
        .json(&json!({"status": "APPROVED"}))
        .send()
        .await
        .unwrap();
    assert_eq!(forbidden.status(), 403);

    let approved: Value = {
        let response = client
            .put(format!("{API_BASE_URL}/api/admin/events/{event_id}/status"))
            .bearer_auth(&admin_token)
            .json(&json!({"status": "APPROVED"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    };
    assert_eq!(approved["status"], "APPROVED");

    // Step 6: Now the public surface shows it
    let detail: Value = client
        .get(format!("{API_BASE_URL}/api/public/events/{event_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail["title"], "Tech Conference");

    let search: Vec<Value> = client
        .get(format!("{API_BASE_URL}/api/public/events/search"))
        .query(&[("query", "conf")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(search.iter().any(|e| e["id"] == detail["id"]));

    let by_location: Vec<Value> = client
        .get(format!("{API_BASE_URL}/api/public/events/location"))
        .query(&[("location", "phoenix")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(by_location.iter().any(|e| e["id"] == detail["id"]));

    // Update preserves createdAt and advances updatedAt
    let updated: Value = client
        .put(format!("{API_BASE_URL}/api/vendor/events/{event_id}"))
        .bearer_auth(&vendor_token)
        .json(&json!({"description": "Expanded program"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    // Step 7: Delete is owner-gated, then idempotent at the store level
    let gone = client
        .delete(format!("{API_BASE_URL}/api/vendor/events/{event_id}"))
        .bearer_auth(&vendor_token)
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), 204);

    let again = client
        .delete(format!("{API_BASE_URL}/api/vendor/events/{event_id}"))
        .bearer_auth(&vendor_token)
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_health_endpoints() {
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{API_BASE_URL}/api/health"))
        .send()
        .await
        .expect("Failed to call health")
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "UP");
    assert_eq!(health["service"], "event-booking-backend");
    assert_eq!(health["database"], "Connected");

    let simple: Value = client
        .get(format!("{API_BASE_URL}/api/simple-health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(simple["status"], "UP");
}
