use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn digraph() -> Command {
    let mut cmd = cargo_bin_cmd!("digraph");
    cmd.env_remove("DIGRAPH_CONFIG")
        .env_remove("DIGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Global flags for the three-vertex example plus an isolated vertex 4
#[allow(dead_code)]
pub fn sample_graph_args() -> Vec<&'static str> {
    vec![
        "-n", "4", "-e", "1,2,1", "-e", "2,3,1", "-e", "1,3,5",
    ]
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}
