use crate::{
    completion::{ChatRequest, Completion},
    config::Config,
    error::Result,
    index::IndexText,
    prompt,
};
use tracing::info;

pub struct ChapterClassifier<C: Completion> {
    cfg: Config,
    client: C,
    index: IndexText,
}

impl<C: Completion> ChapterClassifier<C> {
    pub fn new(cfg: &Config, client: C, index: IndexText) -> Self {
        Self {
            cfg: cfg.clone(),
            client,
            index,
        }
    }

    pub fn index(&self) -> &IndexText {
        &self.index
    }

    pub fn request(&self, question: &str) -> ChatRequest {
        build_request(&self.cfg, &self.index, question)
    }

    /// Returns the model's free-text answer for `question`, unparsed.
    pub fn classify(&self, question: &str) -> Result<String> {
        let req = self.request(question);
        let resp = self.client.complete(&req)?;
        let answer = resp.first_text()?;
        info!(
            "classified question chars={} choices={} answer_chars={}",
            question.chars().count(),
            resp.choices.len(),
            answer.chars().count()
        );
        Ok(answer)
    }
}

pub fn build_request(cfg: &Config, index: &IndexText, question: &str) -> ChatRequest {
    ChatRequest {
        model: cfg.llm.model.clone(),
        messages: prompt::build_messages(index.as_str(), question),
        temperature: cfg.llm.temperature,
        max_tokens: cfg.llm.max_tokens,
    }
}
