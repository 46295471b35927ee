use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

fn cfn_graph() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("cfn-graph").unwrap()
}

fn demo_payload() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/lambda-update.json")
}

fn write_payload(dir: &TempDir, name: &str, payload: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(payload).unwrap()).unwrap();
    path
}

fn minimal_payload(parameters: Value, changes: Value) -> Value {
    json!({
        "ChangeSetId": "cs-1",
        "ChangeSetName": "cs",
        "StackId": "stack-1",
        "StackName": "app",
        "Status": "CREATE_COMPLETE",
        "CreationTime": "2021-06-01T09:00:00Z",
        "Capabilities": [],
        "NotificationARNs": [],
        "Parameters": parameters,
        "Changes": changes
    })
}

#[test]
fn render_demo_to_stdout() {
    let output = cfn_graph()
        .arg("render")
        .arg(demo_payload())
        .output()
        .unwrap();
    assert!(output.status.success());
    let dot = String::from_utf8(output.stdout).unwrap();

    assert!(dot.starts_with("strict digraph \"Graph for lambda-update on orders-api\" {"));
    assert!(dot.contains("subgraph \"cluster_OrdersFunction\""));
    assert!(dot.contains("subgraph \"cluster_BastionHost\""));
    assert!(dot.contains("\"OrdersFunction-Template\" -> \"OrdersFunction-Code\";"));
    assert!(dot.contains("\"OrdersTable.Arn\" -> \"OrdersFunction-Environment\";"));
    assert!(dot.contains("\"LatestAmi\" -> \"BastionHost-ImageId\";"));
    assert!(dot.contains("amzn2-ami-hvm-x86_64-gp2 ⇒ ami-0a1b2c3d4e5f67890"));
    assert!(!dot.contains("AlarmEmail"));
}

#[test]
fn render_is_reproducible() {
    let first = cfn_graph().arg("render").arg(demo_payload()).output().unwrap();
    let second = cfn_graph().arg("render").arg(demo_payload()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn render_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("graphs/lambda-update.dot");

    cfn_graph()
        .arg("render")
        .arg(demo_payload())
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicates::str::contains("Wrote"));

    let dot = std::fs::read_to_string(&out).unwrap();
    assert!(dot.contains("cluster_OrdersFunction"));
}

#[test]
fn render_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("render.toml");
    std::fs::write(&config, "rankdir = \"TB\"\nstrict = false\n").unwrap();

    let output = cfn_graph()
        .arg("render")
        .arg(demo_payload())
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    let dot = String::from_utf8(output.stdout).unwrap();
    assert!(dot.starts_with("digraph "));
    assert!(dot.contains("rankdir=TB;"));
}

#[test]
fn render_with_config_from_env() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("render.toml");
    std::fs::write(&config, "rankdir = \"BT\"\n").unwrap();

    cfn_graph()
        .arg("render")
        .arg(demo_payload())
        .env("CFN_GRAPH_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicates::str::contains("rankdir=BT;"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("render.toml");
    std::fs::write(&config, "rankdir = \"diagonal\"\n").unwrap();

    cfn_graph()
        .arg("render")
        .arg(demo_payload())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicates::str::contains("render config"));
}

#[test]
fn graph_json_has_expected_shape() {
    let output = cfn_graph().arg("graph").arg(demo_payload()).output().unwrap();
    assert!(output.status.success());
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(v["fingerprint"].as_str().unwrap().len(), 64);
    let graph = &v["graph"];
    assert_eq!(graph["clusters"].as_array().unwrap().len(), 2);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 11);
    assert_eq!(graph["edges"].as_array().unwrap().len(), 5);
    assert_eq!(graph["clusters"][0]["id"], "OrdersFunction");
    assert_eq!(graph["clusters"][0]["color"], "green");
    assert_eq!(graph["clusters"][1]["color"], "red");
}

#[test]
fn graph_fingerprint_is_stable() {
    let fingerprint = || {
        let output = cfn_graph().arg("graph").arg(demo_payload()).output().unwrap();
        let v: Value = serde_json::from_slice(&output.stdout).unwrap();
        v["fingerprint"].as_str().unwrap().to_string()
    };
    assert_eq!(fingerprint(), fingerprint());
}

#[test]
fn params_lists_causing_parameters_in_order() {
    let output = cfn_graph().arg("params").arg(demo_payload()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<_> = stdout
        .lines()
        .map(|l| l.split(" = ").next().unwrap())
        .collect();
    assert_eq!(keys, vec!["Stage", "MemorySize", "LatestAmi"]);
}

#[test]
fn params_json() {
    let output = cfn_graph()
        .args(["params", "--json"])
        .arg(demo_payload())
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    let params = v.as_array().unwrap();
    assert_eq!(params.len(), 3);
    assert_eq!(params[2]["ResolvedValue"], "ami-0a1b2c3d4e5f67890");
}

#[test]
fn params_none() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(
        &dir,
        "cs.json",
        &minimal_payload(json!([{"ParameterKey": "Env", "ParameterValue": "prod"}]), json!([])),
    );
    cfn_graph()
        .arg("params")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicates::str::contains("No parameter causes any change"));
}

#[test]
fn show_summary() {
    cfn_graph()
        .arg("show")
        .arg(demo_payload())
        .assert()
        .success()
        .stdout(predicates::str::contains("Stack:     orders-api"))
        .stdout(predicates::str::contains("Status:    CREATE_COMPLETE"))
        .stdout(predicates::str::contains("Execution: AVAILABLE"))
        .stdout(predicates::str::contains("Capabilities: CAPABILITY_IAM"))
        .stdout(predicates::str::contains("Modify  2"))
        .stdout(predicates::str::contains(
            "Modify BastionHost (AWS::EC2::Instance, replacement: True)",
        ))
        .stdout(predicates::str::contains(
            "Causing parameters: Stage, MemorySize, LatestAmi",
        ));
}

#[test]
fn show_json_round_trips_wire_names() {
    let output = cfn_graph()
        .args(["show", "--json"])
        .arg(demo_payload())
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["StackName"], "orders-api");
    assert_eq!(v["Status"], "CREATE_COMPLETE");
    assert_eq!(v["Capabilities"][0], "CAPABILITY_IAM");
    assert_eq!(v["Changes"][0]["ResourceChange"]["Action"], "Modify");
}

#[test]
fn paginated_payload_fails() {
    let dir = TempDir::new().unwrap();
    let mut payload = minimal_payload(json!([]), json!([]));
    payload["NextToken"] = json!("page-2");
    let path = write_payload(&dir, "cs.json", &payload);

    cfn_graph()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("multiple pages"));
}

#[test]
fn unknown_action_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_payload(
        &dir,
        "cs.json",
        &minimal_payload(
            json!([]),
            json!([{"Type": "Resource", "ResourceChange": {
                "Action": "Dynamic",
                "LogicalResourceId": "X",
                "ResourceType": "AWS::SQS::Queue",
                "Scope": []
            }}]),
        ),
    );

    cfn_graph()
        .arg("graph")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown value 'Dynamic' for field 'Action'"));
}

fn previous_value_cause_payload(dir: &TempDir) -> PathBuf {
    write_payload(
        dir,
        "cs.json",
        &minimal_payload(
            json!([{"ParameterKey": "Env", "ParameterValue": "prod", "UsePreviousValue": true}]),
            json!([{"Type": "Resource", "ResourceChange": {
                "Action": "Modify",
                "LogicalResourceId": "Db",
                "Replacement": "False",
                "ResourceType": "AWS::RDS::DBInstance",
                "Scope": ["Properties"],
                "Details": [{
                    "ChangeSource": "ParameterReference",
                    "Evaluation": "Static",
                    "CausingEntity": "Env",
                    "Target": {"Attribute": "Properties", "Name": "DBName", "RequiresRecreation": "Always"}
                }]
            }}]),
        ),
    )
}

#[test]
fn previous_value_cause_fails() {
    let dir = TempDir::new().unwrap();
    let path = previous_value_cause_payload(&dir);

    cfn_graph()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicates::str::contains("parameter 'Env' uses its previous value"));
}

#[test]
fn params_previous_value_cause_fails() {
    let dir = TempDir::new().unwrap();
    let path = previous_value_cause_payload(&dir);

    cfn_graph()
        .arg("params")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("parameter 'Env' uses its previous value"));
}

#[test]
fn show_previous_value_cause_fails() {
    let dir = TempDir::new().unwrap();
    let path = previous_value_cause_payload(&dir);

    cfn_graph()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("parameter 'Env' uses its previous value"));
}

#[test]
fn missing_file_fails() {
    cfn_graph()
        .args(["render", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot read"));
}
