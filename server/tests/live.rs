//! CRUD round-trip over a real socket.
//!
//! Starts the server on a random port in a background thread and talks to
//! it with ureq, so the listener and serving path are exercised end-to-end.

use todo_server::{app, Todo};

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, app()).await
        })
    });

    format!("http://{addr}")
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

#[test]
fn crud_over_http() {
    let base = spawn_server();
    let agent = agent();

    let mut resp = agent
        .post(&format!("{base}/todos"))
        .content_type("application/json")
        .send(r#"{"task":"walk dog"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let created: Todo = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(created.task, "walk dog");

    let mut resp = agent
        .patch(&format!("{base}/todos/{}", created.id))
        .content_type("application/json")
        .send(r#"{"task":"walk cat","is_done":true}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Todo = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert!(updated.is_done);
    assert!(updated.updated_at >= created.updated_at);

    let resp = agent
        .delete(&format!("{base}/todos/{}", created.id))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = agent
        .get(&format!("{base}/todos/{}", created.id))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let mut resp = agent.get(&format!("{base}/todos")).call().unwrap();
    let todos: Vec<Todo> = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(todos.len(), 1);
}
