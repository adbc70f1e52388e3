use reqwest::blocking::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::catalog::KeywordEntry;
use crate::config::ApiSettings;
use crate::error::RequestError;

const SYSTEM_PROMPT: &str = "You are an expert baby sleep consultant and SEO content writer. \
Write helpful, empathetic articles for exhausted parents.";

const MAX_ERROR_BODY: usize = 200;

/// Anything that can turn a keyword into raw article HTML.
///
/// `None` means the article could not be produced; the caller skips it.
pub trait ArticleSource {
    fn generate(&mut self, entry: &KeywordEntry) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub fn build_prompt(keyword: &str) -> String {
    format!(
        r#"Write a comprehensive, SEO-optimized blog article about "{keyword}".

REQUIREMENTS:
- Title: Compelling H1 title including the keyword
- Length: 1800-2200 words
- Structure: Use H2 and H3 subheadings
- Tone: Empathetic, helpful, parent-to-parent advice
- Include: Practical tips, science-backed advice, real examples
- SEO: Use keyword naturally 5-7 times
- Format: HTML with proper tags (<h2>, <h3>, <p>, <ul>, <ol>)
- Add a FAQ section at the end with 5 questions

DO NOT include: Opening/closing HTML tags, just the article body content.
Start directly with the H1 title tag.

Make it helpful, engaging, and valuable for exhausted parents searching for sleep solutions."#
    )
}

/// Pulls the first completion's text out of a chat-completions body.
pub fn parse_completion(body: &str) -> Result<String, RequestError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RequestError::MalformedResponse("no choices in response".to_string()))?;
    choice
        .message
        .content
        .ok_or_else(|| RequestError::MalformedResponse("first choice has no content".to_string()))
}

/// Blocking chat-completions client. One request per article, no retries.
pub struct Requester {
    client: Client,
    settings: ApiSettings,
}

impl Requester {
    pub fn new(settings: ApiSettings) -> anyhow::Result<Requester> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Requester { client, settings })
    }

    pub fn chat_request(&self, keyword: &str) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(build_prompt(keyword))],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    pub fn request_article(&self, keyword: &str) -> Result<String, RequestError> {
        let url = &self.settings.url;
        let body = self.chat_request(keyword);

        let response = self
            .client
            .post(url)
            .bearer_auth(self.settings.api_key.expose_secret())
            .json(&body)
            .send()
            .map_err(|source| RequestError::Transport { url: url.clone(), source })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|source| RequestError::Transport { url: url.clone(), source })?;
        log::debug!("{} returned {} ({} bytes)", url, status, text.len());

        if !status.is_success() {
            return Err(RequestError::Status {
                url: url.clone(),
                status,
                body: excerpt(&text),
            });
        }

        parse_completion(&text)
    }
}

impl ArticleSource for Requester {
    fn generate(&mut self, entry: &KeywordEntry) -> Option<String> {
        log::debug!("requesting {:?} ({} monthly searches)", entry.keyword, entry.monthly_searches);
        match self.request_article(&entry.keyword) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("error generating article for {:?}: {}", entry.keyword, err);
                None
            }
        }
    }
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
