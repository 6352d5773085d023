//! Interactive prompts
//!
//! Reads answers line by line. Generic over the reader and writer so the
//! prompts can be driven from scripted input in tests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::error::PromptError;
use crate::models::PostContent;

/// Line based prompter
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter on the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a prompter over any reader/writer pair
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer (tests inspect what was printed)
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` and read one line, without its terminator
    async fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(PromptError::Eof);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Ask until a non-empty answer is given; the answer is returned as typed
    pub async fn required(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(&format!("{}: ", prompt)).await?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Ask a yes/no question until the answer is one of y, yes, n, no
    pub async fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.ask(&format!("{} (y/n)? ", prompt)).await?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
        }
    }

    /// Gather the four parts of a link post
    pub async fn post_content(&mut self) -> Result<PostContent, PromptError> {
        let description = self
            .required(r##"Main text of the post, e.g., "Nice article found in the Computer History Museum!""##)
            .await?;
        let hashtags = self
            .required(r##"The hashtags that you want to use, e.g., "#computerhistory #computers #internet #museum""##)
            .await?;
        let url = self
            .required("The URL of the linked article, e.g., https://computerhistory.org/blog/postscript-a-digital-printing-press/")
            .await?;
        let title = self
            .required(r##"The title of the linked article, e.g., "PostScript: A digital printing press""##)
            .await?;

        Ok(PostContent {
            description,
            hashtags,
            url,
            title,
        })
    }
}
