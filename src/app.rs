//! Input loop
//!
//! `App::start` primes the session with the persona instruction, then
//! `App::run` reads one line at a time until end of input. Only a failed
//! send of a user line is recoverable; it is reported and the prompt
//! comes back.

use crate::core::session::{ChatSession, Reply};
use crate::error::AppError;
use crate::format::render_reply;
use crate::utils::{print_banner, print_error, print_prompt, Theme};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub struct App<S> {
    session: S,
    theme: Theme,
}

impl<S: ChatSession> App<S> {
    /// Send `persona` as the first turn of `session`. Failure here is fatal.
    pub async fn start(mut session: S, persona: &str, theme: Theme) -> Result<Self, AppError> {
        session
            .send_message(persona)
            .await
            .map_err(AppError::InitialSend)?;

        tracing::info!("Persona instruction accepted");
        Ok(Self { session, theme })
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Drive the prompt loop until `input` is exhausted.
    pub async fn run<R, O, E>(
        &mut self,
        mut input: R,
        out: &mut O,
        err: &mut E,
    ) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        print_banner(out, &self.theme).map_err(AppError::Output)?;

        let mut buf = Vec::new();
        loop {
            print_prompt(out, &self.theme).map_err(AppError::Output)?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .map_err(AppError::InputStream)?;
            if read == 0 {
                tracing::debug!("End of input");
                return Ok(());
            }

            // Invalid UTF-8 is replaced rather than treated as a read fault
            let line = String::from_utf8_lossy(&buf);
            let text = line.trim();
            if text.is_empty() {
                continue;
            }

            match self.session.send_message(text).await {
                Ok(reply) => self.show_reply(out, &reply).map_err(AppError::Output)?,
                Err(e) => {
                    tracing::debug!("Send failed: {:?}", e);
                    print_error(err, &self.theme, &format!("Error getting response: {}", e))
                        .map_err(AppError::Output)?;
                }
            }
        }
    }

    fn show_reply(&self, out: &mut impl Write, reply: &Reply) -> std::io::Result<()> {
        writeln!(out)?;
        for fragment in &reply.fragments {
            render_reply(out, &self.theme, fragment)?;
        }
        writeln!(out)?;
        out.flush()
    }
}
