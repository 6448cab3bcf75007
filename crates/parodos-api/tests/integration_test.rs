// Integration tests for the Parodos API
// Run with: cargo test --test integration_test

use parodos_core::{Group, GroupDetails, Workflow};

const API_BASE_URL: &str = "http://localhost:8080";

#[tokio::test]
#[ignore] // Run with: cargo test --test integration_test -- --ignored
async fn test_workflow_catalog_walkthrough() {
    let client = reqwest::Client::new();

    println!("🧪 Testing the workflow catalog...");

    // Step 1: List groups
    println!("\n📋 Step 1: Listing groups...");
    let list_response = client
        .get(format!("{}/v1/groups", API_BASE_URL))
        .send()
        .await
        .expect("Failed to list groups");

    assert_eq!(list_response.status(), 200);

    let groups: Vec<Group> = list_response.json().await.expect("Failed to parse groups");
    println!("✅ Found {} group(s)", groups.len());
    assert!(groups.iter().any(|g| g.name == "parodos"));
    assert!(groups.iter().any(|g| g.name == "parodos-service"));

    // Step 2: Get a group with its workflows
    println!("\n🔍 Step 2: Getting group details...");
    let get_response = client
        .get(format!("{}/v1/groups/parodos-service", API_BASE_URL))
        .send()
        .await
        .expect("Failed to get group");

    assert_eq!(get_response.status(), 200);
    let details: GroupDetails = get_response.json().await.expect("Failed to parse group");
    println!(
        "✅ Fetched group {} with {} workflow(s)",
        details.group.name,
        details.workflows.len()
    );
    assert_eq!(details.group.name, "parodos-service");
    assert_eq!(details.workflows.len(), 2);

    // Step 3: List workflows of a group
    println!("\n📋 Step 3: Listing workflows...");
    let workflows_response = client
        .get(format!(
            "{}/v1/groups/parodos-service/workflows",
            API_BASE_URL
        ))
        .send()
        .await
        .expect("Failed to list workflows");

    assert_eq!(workflows_response.status(), 200);
    let workflows: Vec<Workflow> = workflows_response
        .json()
        .await
        .expect("Failed to parse workflows");
    println!("✅ Found {} workflow(s)", workflows.len());
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[0].name, "test1");
    assert_eq!(workflows[1].name, "test2");

    // Step 4: Get a single workflow
    println!("\n🔎 Step 4: Getting a workflow...");
    let workflow_response = client
        .get(format!(
            "{}/v1/groups/parodos/workflows/fahrenheit_to_celsius",
            API_BASE_URL
        ))
        .send()
        .await
        .expect("Failed to get workflow");

    assert_eq!(workflow_response.status(), 200);
    let workflow: Workflow = workflow_response
        .json()
        .await
        .expect("Failed to parse workflow");
    println!("✅ Fetched workflow: {}", workflow.name);
    assert_eq!(workflow.name, "fahrenheit_to_celsius");
    assert_eq!(workflow.input_arguments["fahrenheit"], 100);

    println!("\n🎉 All tests passed!");
}

#[tokio::test]
#[ignore]
async fn test_unknown_group_returns_not_found() {
    let client = reqwest::Client::new();

    println!("🕳️  Testing an unknown group...");
    let response = client
        .get(format!("{}/v1/groups/no-such-group", API_BASE_URL))
        .send()
        .await
        .expect("Failed to get group");

    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    println!("✅ Error body: {:?}", body);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], r#"Group "no-such-group" not found"#);
}

#[tokio::test]
#[ignore]
async fn test_health_endpoint() {
    let client = reqwest::Client::new();

    println!("🏥 Testing health endpoint...");
    let response = client
        .get(format!("{}/health", API_BASE_URL))
        .send()
        .await
        .expect("Failed to call health endpoint");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    println!("✅ Health check: {:?}", body);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
#[ignore]
async fn test_openapi_spec() {
    let client = reqwest::Client::new();

    println!("📖 Testing OpenAPI spec endpoint...");
    let response = client
        .get(format!("{}/api-doc/openapi.json", API_BASE_URL))
        .send()
        .await
        .expect("Failed to get OpenAPI spec");

    assert_eq!(response.status(), 200);
    let spec: serde_json::Value = response.json().await.expect("Failed to parse spec");
    println!("✅ OpenAPI spec title: {}", spec["info"]["title"]);
    assert_eq!(spec["info"]["title"], "Parodos API Documentation");
}
