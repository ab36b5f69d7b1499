use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "7"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert!(v["probes"].as_u64().unwrap() >= 20);
    assert!(v["team1"]["score"].is_number());
    assert!(v["team2"]["score"].is_number());
    assert!(v["winner"].is_string() || v["winner"].is_null());
}
