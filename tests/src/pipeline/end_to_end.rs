#![cfg(test)]
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use homenet_core::output::OutputPlan;
use homenet_core::pipeline;
use homenet_core::policy::AddressPolicy;
use tempfile::TempDir;

const CONFIG: &str = "# homenets.cfg\n10.0.0.0/24\nEXCLUDE 10.0.0.5\n";

const HEADER: &str = "#separator \\x09\n#set_separator\t,\n#fields\tts\tuid\tid.orig_h\tid.orig_p\tid.resp_h\tid.resp_p\tproto\tservice\tduration\torig_bytes\tresp_bytes\tconn_state\n";

fn conn_line(src: &str, src_port: &str, dst: &str, dst_port: &str, proto: &str, service: &str, state: &str) -> String {
    format!("1558364400.0\tCabc\t{src}\t{src_port}\t{dst}\t{dst_port}\t{proto}\t{service}\t-\t-\t-\t{state}\t\n")
}

/// Writes the config and log into a fresh directory and runs the graph build.
fn run(log_body: &str) -> (TempDir, HashSet<String>) {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("homenets.cfg");
    let log_path = tmp.path().join("conn.log");
    fs::write(&config_path, CONFIG).unwrap();
    fs::write(&log_path, format!("{HEADER}{log_body}")).unwrap();

    let policy = AddressPolicy::from_path(&config_path).unwrap();
    let (edges, _) = pipeline::build_graph(&policy, &log_path).unwrap();
    (tmp, edges)
}

#[test]
fn internal_http_flow() {
    let (_tmp, edges) = run(&conn_line("10.0.0.1", "12345", "10.0.0.2", "80", "tcp", "http", "SF"));

    let expected: HashSet<String> =
        [r#""10.0.0.1" -> "10.0.0.2" [label="dpt:80/tcp/http SF", color="blue"]"#.to_string()]
            .into_iter()
            .collect();
    assert_eq!(edges, expected);
}

#[test]
fn excluded_destination_is_dropped() {
    let (_tmp, edges) = run(&conn_line("10.0.0.1", "12345", "10.0.0.5", "80", "tcp", "http", "SF"));
    assert!(edges.is_empty());
}

#[test]
fn external_source_is_dropped() {
    let (_tmp, edges) = run(&conn_line("172.16.0.1", "12345", "10.0.0.2", "80", "tcp", "http", "SF"));
    assert!(edges.is_empty());
}

#[test]
fn mixed_log() {
    let log = [
        conn_line("10.0.0.1", "12345", "10.0.0.2", "80", "tcp", "http", "SF"),
        conn_line("10.0.0.1", "12346", "10.0.0.2", "80", "tcp", "http", "SF"),
        conn_line("10.0.0.3", "40000", "10.0.0.2", "443", "tcp", "ssl", "SF"),
        conn_line("10.0.0.3", "40001", "10.0.0.4", "22", "tcp", "ssh", "S0"),
        conn_line("10.0.0.3", "5353", "10.0.0.4", "53", "udp", "dns", "SF"),
        conn_line("10.0.0.3", "8", "10.0.0.4", "0", "icmp", "-", "OTH"),
        "garbage line without tabs\n".to_string(),
        conn_line("-", "0", "10.0.0.4", "0", "tcp", "-", "OTH"),
        "#close\t2019-05-20-16-00-00\n".to_string(),
    ]
    .concat();

    let (_tmp, edges) = run(&log);

    // The two http flows only differ in source port, which is not drawn.
    assert_eq!(edges.len(), 5);
    for (label, color) in [
        ("dpt:80/tcp/http SF", "blue"),
        ("dpt:443/tcp/ssl SF", "cyan"),
        ("dpt:22/tcp/ssh S0", "red"),
        ("dpt:53/udp/dns SF", "orange"),
        ("dpt:8:0/icmp/- OTH", "purple"),
    ] {
        let attrs = format!("[label=\"{label}\", color=\"{color}\"]");
        assert!(edges.iter().any(|e| e.ends_with(&attrs)), "missing {attrs}");
    }
}

#[test]
fn dot_document_on_disk() {
    let (tmp, edges) = run(&conn_line("10.0.0.1", "12345", "10.0.0.2", "80", "tcp", "http", "SF"));
    let out_dir: PathBuf = tmp.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    let plan = OutputPlan::new(&out_dir, "1558364400");
    plan.ensure_dir().unwrap();
    let dot_file = pipeline::write_dot(&edges, &plan).unwrap();

    assert_eq!(dot_file, out_dir.join("homenet-graph-1558364400-DOTFILE.dot"));
    assert_eq!(
        fs::read_to_string(dot_file).unwrap(),
        "digraph output {\nnode[shape = Mrecord];\nfontsize=16;\nnodesep=1.5;\nranksep=1;\nrankdir=LR;\n\
         \"10.0.0.1\" -> \"10.0.0.2\" [label=\"dpt:80/tcp/http SF\", color=\"blue\"];\n\n}"
    );
}
