//! Fake IRC server.
//!
//! Accepts a single bot connection and lets a test script the server side
//! line by line.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

/// A listening fake server.
pub struct FakeServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl FakeServer {
    /// Bind on an ephemeral localhost port.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        Ok(Self { listener, addr })
    }

    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Wait for the bot to connect.
    pub async fn accept(&self) -> anyhow::Result<FakeConnection> {
        let (stream, _) = timeout(Duration::from_secs(5), self.listener.accept()).await??;
        Ok(FakeConnection::new(stream))
    }
}

/// The server end of one bot connection.
pub struct FakeConnection {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl FakeConnection {
    fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        }
    }

    /// Send a raw line, appending CRLF.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\r\n").await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line from the bot, without its CRLF.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed");
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Assert the bot sends nothing for `dur`.
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match self.recv_timeout(dur).await {
            Ok(line) => anyhow::bail!("unexpected line from bot: {line:?}"),
            Err(_) => Ok(()),
        }
    }

    /// Complete registration for `nick` and consume the JOINs for `channels`.
    pub async fn register(&mut self, nick: &str, channels: &[&str]) -> anyhow::Result<()> {
        anyhow::ensure!(self.recv().await? == format!("NICK {nick}"), "expected NICK");
        let user = self.recv().await?;
        anyhow::ensure!(user.starts_with("USER "), "expected USER, got {user:?}");
        self.send(&format!(":irc.test 001 {nick} :Welcome to the test network"))
            .await?;
        for channel in channels {
            let join = self.recv().await?;
            anyhow::ensure!(join == format!("JOIN {channel}"), "expected JOIN, got {join:?}");
        }
        Ok(())
    }
}
