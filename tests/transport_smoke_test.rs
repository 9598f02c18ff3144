// End-to-end smoke test for the length-prefixed JSON transport
// stand-in: spawn the real binary, read its one `PORT=<port>` stdout
// line, then drive a request/response pair over the socket.

use aws_public_pricing::ResourceDescriptor;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};

struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn read_frame(stream: &mut TcpStream) -> Vec<u8> {
    let mut len_bytes = [0u8; 4];
    stream.read_exact(&mut len_bytes).expect("reading frame length");
    let len = u32::from_be_bytes(len_bytes) as usize;
    let mut body = vec![0u8; len];
    stream.read_exact(&mut body).expect("reading frame body");
    body
}

fn write_frame(stream: &mut TcpStream, body: &[u8]) {
    stream.write_all(&(body.len() as u32).to_be_bytes()).expect("writing frame length");
    stream.write_all(body).expect("writing frame body");
}

#[test]
fn plugin_serves_a_projected_cost_over_the_wire() {
    let mut child = ChildGuard(
        Command::new(env!("CARGO_BIN_EXE_aws-public-plugin"))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("plugin binary spawns"),
    );

    let stdout = child.0.stdout.take().expect("stdout piped");
    let mut lines = BufReader::new(stdout);
    let mut first_line = String::new();
    lines.read_line(&mut first_line).expect("reading PORT line");
    let port: u16 = first_line
        .trim()
        .strip_prefix("PORT=")
        .expect("startup line is PORT=<port>")
        .parse()
        .expect("port is numeric");

    let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connecting to plugin");

    let descriptor = ResourceDescriptor {
        provider: "aws".to_string(),
        resource_type: "ec2".to_string(),
        sku: "t3.micro".to_string(),
        region: "us-east-1".to_string(),
        ..Default::default()
    };
    write_frame(&mut stream, &serde_json::to_vec(&descriptor).unwrap());

    let body = read_frame(&mut stream);
    let value: serde_json::Value = serde_json::from_slice(&body).expect("response is valid JSON");
    assert_eq!(value["status"], "ok");
    assert_eq!(value["unit_price"], 0.0104);
}

#[test]
fn plugin_reports_region_mismatch_as_a_wire_error() {
    let mut child = ChildGuard(
        Command::new(env!("CARGO_BIN_EXE_aws-public-plugin"))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("plugin binary spawns"),
    );

    let stdout = child.0.stdout.take().expect("stdout piped");
    let mut lines = BufReader::new(stdout);
    let mut first_line = String::new();
    lines.read_line(&mut first_line).expect("reading PORT line");
    let port: u16 = first_line.trim().strip_prefix("PORT=").unwrap().parse().unwrap();

    let mut stream = TcpStream::connect(("127.0.0.1", port)).expect("connecting to plugin");
    let descriptor = ResourceDescriptor {
        provider: "aws".to_string(),
        resource_type: "ec2".to_string(),
        sku: "t3.micro".to_string(),
        region: "eu-west-1".to_string(),
        ..Default::default()
    };
    write_frame(&mut stream, &serde_json::to_vec(&descriptor).unwrap());

    let body = read_frame(&mut stream);
    let value: serde_json::Value = serde_json::from_slice(&body).expect("response is valid JSON");
    assert_eq!(value["status"], "err");
    assert_eq!(value["id"], "UNSUPPORTED_REGION");
}
