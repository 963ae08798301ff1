use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tiny::echo::{EchoHandler, echo, relay_lines};
use tiny::server::listener::serve;

#[tokio::test]
async fn test_echo_returns_lines_unmodified() {
    let (mut client, mut server) = tokio::io::duplex(1024);

    let server_task = tokio::spawn(async move { echo(&mut server).await.unwrap() });

    client.write_all(b"hello\n").await.unwrap();
    let mut buf = [0u8; 6];
    client.read_exact(&mut buf).await.unwrap();
    assert_eq!(&buf, b"hello\n");

    client.shutdown().await.unwrap();
    let mut rest = Vec::new();
    client.read_to_end(&mut rest).await.unwrap();
    assert!(rest.is_empty());

    assert_eq!(server_task.await.unwrap(), 6);
}

#[tokio::test]
async fn test_echo_passes_partial_last_line() {
    let (mut client, mut server) = tokio::io::duplex(1024);

    let server_task = tokio::spawn(async move { echo(&mut server).await.unwrap() });

    client.write_all(b"a\nno newline").await.unwrap();
    client.shutdown().await.unwrap();
    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();

    assert_eq!(out, b"a\nno newline");
    assert_eq!(server_task.await.unwrap(), 12);
}

#[tokio::test]
async fn test_echo_server_over_tcp_serves_clients_in_turn() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, EchoHandler));

    for word in ["first", "second"] {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let input = format!("{}\nhello\n", word);
        let mut output: Vec<u8> = Vec::new();

        relay_lines(input.as_bytes(), &mut stream, &mut output).await.unwrap();
        assert_eq!(output, format!("{}\nhello\n", word).into_bytes());
    }
}
