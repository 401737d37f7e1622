use crate::common::{client, create_test_config, spawn_server};
use safecookie::cookie::encode_value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[tokio::test]
async fn test_set_then_get_round_trip() {
    let addr = spawn_server(create_test_config()).await;
    let client = client();

    let resp = client
        .get(format!("http://{addr}/set"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(resp.text().await.unwrap(), "cookie set!");

    let pair = set_cookie.split(';').next().unwrap();
    let (name, value) = pair.split_once('=').unwrap();
    assert_eq!(name, "exampleCookie");
    assert_eq!(value, encode_value("Hello Zoë!!".as_bytes()));
    assert!(set_cookie.contains("; Path=/"));
    assert!(set_cookie.contains("; Max-Age=3600"));
    assert!(set_cookie.contains("; HttpOnly"));
    assert!(set_cookie.contains("; Secure"));
    assert!(set_cookie.contains("; SameSite=Lax"));

    let resp = client
        .get(format!("http://{addr}/get"))
        .header("Cookie", pair)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Hello Zoë!!");
}

#[tokio::test]
async fn test_get_without_cookie() {
    let addr = spawn_server(create_test_config()).await;

    let resp = client()
        .get(format!("http://{addr}/get"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert!(resp.text().await.unwrap().contains("cookie not found"));
}

#[tokio::test]
async fn test_get_with_tampered_cookie() {
    let addr = spawn_server(create_test_config()).await;

    let resp = client()
        .get(format!("http://{addr}/get"))
        .header("Cookie", "exampleCookie=SGVsbG8gWm_DqyE")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert_eq!(resp.text().await.unwrap(), "server error\n");
}

#[tokio::test]
async fn test_unknown_path() {
    let addr = spawn_server(create_test_config()).await;

    let resp = client()
        .get(format!("http://{addr}/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_response_closes_connection() {
    let addr = spawn_server(create_test_config()).await;
    let mut stream = TcpStream::connect(addr).await.unwrap();

    stream
        .write_all(b"GET /set HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    let reply = String::from_utf8(out).unwrap();

    assert!(reply.contains("Connection: close\r\n"));
    assert!(reply.contains("Content-Length: 11\r\n"));
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let addr = spawn_server(create_test_config()).await;
    let client = client();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let req = client.get(format!("http://{addr}/get"));
            let req = if i % 2 == 0 {
                req.header("Cookie", "exampleCookie=SGVsbG8gWm_DqyEh")
            } else {
                req
            };
            req.send().await.unwrap().status().as_u16()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { 200 } else { 400 };
        assert_eq!(handle.await.unwrap(), expected);
    }
}
