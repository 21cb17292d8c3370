//! One connection to the IRC server: register, join, then feed the module.

use std::future::Future;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout_at};
use tokio_util::codec::Framed;
use tracing::{Instrument, debug, info, trace, warn};

use crate::config::{Config, ServerConfig};
use crate::dispatch::Event;
use crate::error::SessionError;
use crate::irc::{IrcCodec, IrcLine, Outgoing};
use crate::module::MiniSed;
use crate::telemetry::spans;

const QUIT_MESSAGE: &str = "minised shutting down";

/// How a session that did not fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The server closed the connection.
    Closed,
    /// The shutdown signal fired and QUIT was sent.
    Shutdown,
}

/// A framed connection to the server.
pub struct Session {
    framed: Framed<TcpStream, IrcCodec>,
    nick: String,
}

impl Session {
    pub async fn connect(server: &ServerConfig) -> Result<Self, SessionError> {
        let stream = TcpStream::connect(&server.address)
            .await
            .map_err(|source| SessionError::Connect {
                address: server.address.clone(),
                source,
            })?;
        info!(address = %server.address, "connected");

        Ok(Self {
            framed: Framed::new(stream, IrcCodec::new()),
            nick: server.nick.clone(),
        })
    }

    async fn send(&mut self, msg: Outgoing) -> Result<(), SessionError> {
        trace!(line = %msg, "send");
        self.framed.send(msg).await?;
        Ok(())
    }

    async fn next_line(&mut self) -> Result<Option<IrcLine>, SessionError> {
        match self.framed.next().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    /// Send PASS/NICK/USER, wait for RPL_WELCOME, then join channels.
    ///
    /// PINGs are answered while waiting and a taken nickname is retried
    /// with a trailing underscore.
    pub async fn register(&mut self, server: &ServerConfig) -> Result<(), SessionError> {
        if let Some(password) = &server.password {
            self.send(Outgoing::Pass(password.clone())).await?;
        }
        self.send(Outgoing::Nick(self.nick.clone())).await?;
        self.send(Outgoing::User {
            username: server.username().to_string(),
            realname: server.realname.clone(),
        })
        .await?;

        let deadline = Instant::now() + Duration::from_secs(server.registration_timeout_secs);
        loop {
            let line = timeout_at(deadline, self.next_line())
                .await
                .map_err(|_| SessionError::RegistrationTimeout(server.registration_timeout_secs))??
                .ok_or(SessionError::ClosedDuringRegistration)?;

            match Event::from_line(&line) {
                Event::Welcome => break,
                Event::Ping(token) => self.send(Outgoing::Pong(token)).await?,
                Event::NickInUse => {
                    self.nick.push('_');
                    warn!(nick = %self.nick, "nickname in use, retrying");
                    self.send(Outgoing::Nick(self.nick.clone())).await?;
                }
                Event::ServerError(reason) => return Err(SessionError::Server(reason)),
                _ => trace!(command = %line.command, "ignored during registration"),
            }
        }
        info!(nick = %self.nick, "registered");

        for channel in &server.channels {
            self.send(Outgoing::Join(channel.clone())).await?;
            info!(channel = %channel, "joining");
        }
        Ok(())
    }

    /// Feed inbound events to `module` until the connection ends or
    /// `shutdown` completes.
    pub async fn run<F>(&mut self, module: &mut MiniSed, shutdown: F) -> Result<SessionEnd, SessionError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut outbox: Vec<Outgoing> = Vec::new();

        loop {
            let next = tokio::select! {
                _ = &mut shutdown => Next::Shutdown,
                line = self.next_line() => match line? {
                    Some(line) => Next::Line(line),
                    None => Next::Closed,
                },
            };

            let line = match next {
                Next::Line(line) => line,
                Next::Closed => {
                    info!("connection closed by server");
                    return Ok(SessionEnd::Closed);
                }
                Next::Shutdown => {
                    info!("shutdown requested");
                    self.send(Outgoing::Quit(Some(QUIT_MESSAGE.to_string())))
                        .await?;
                    return Ok(SessionEnd::Shutdown);
                }
            };

            let event = Event::from_line(&line);
            match &event {
                Event::Ping(token) => self.send(Outgoing::Pong(token.clone())).await?,
                Event::ServerError(reason) => return Err(SessionError::Server(reason.clone())),
                Event::ChannelText {
                    channel, speaker, ..
                } => {
                    let handled = spans::channel(channel, speaker)
                        .in_scope(|| module.handle(&event, &mut outbox));
                    trace!(?handled, "channel line handled");
                }
                Event::PrivateText { .. } => {
                    module.handle(&event, &mut outbox);
                }
                _ => trace!(command = %line.command, "ignored"),
            }

            for msg in outbox.drain(..) {
                debug!(line = %msg, "reply");
                self.framed.feed(msg).await?;
            }
            self.framed.flush().await?;
        }
    }
}

enum Next {
    Line(IrcLine),
    Closed,
    Shutdown,
}

/// Run one full session: reset module state, connect, register, serve.
pub async fn run_session<F>(
    config: &Config,
    module: &mut MiniSed,
    shutdown: F,
) -> Result<SessionEnd, SessionError>
where
    F: Future<Output = ()>,
{
    module.reset();
    let span = spans::session(&config.server.address, &config.server.nick);

    async {
        let mut session = Session::connect(&config.server).await?;
        session.register(&config.server).await?;
        session.run(module, shutdown).await
    }
    .instrument(span)
    .await
}
