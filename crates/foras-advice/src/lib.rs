//! Career-advice client for the in-app advisor widget.
//!
//! Sends a free-text query plus the fixed role prompt to the Gemini
//! `generateContent` endpoint. Replies are always Arabic regardless of
//! the UI locale, and every failure degrades to a canned apology string
//! — callers never see an error.

use serde::{Deserialize, Serialize};
use tracing::error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Shown when the model returns no usable text.
pub const FALLBACK_EMPTY: &str = "عذراً، لم أتمكن من معالجة طلبك حالياً. حاول مرة أخرى.";
/// Shown when the call itself fails.
pub const FALLBACK_ERROR: &str = "حدث خطأ في الاتصال بالمستشار الذكي. يرجى المحاولة لاحقاً.";

pub struct AdviceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AdviceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Ask the advisor. Infallible from the caller's perspective: any
    /// transport, HTTP, or decode failure becomes the canned apology.
    /// No timeout is applied; a slow upstream just takes its time.
    pub async fn career_advice(&self, query: &str, context: Option<&str>) -> String {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: build_prompt(query, context) }],
            }],
        };

        let resp = match self.http.post(url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Advice request failed: {}", e);
                return FALLBACK_ERROR.to_string();
            }
        };

        if !resp.status().is_success() {
            error!("Advice request failed: HTTP {}", resp.status());
            return FALLBACK_ERROR.to_string();
        }

        match resp.json::<GenerateContentResponse>().await {
            Ok(body) => extract_text(body).unwrap_or_else(|| FALLBACK_EMPTY.to_string()),
            Err(e) => {
                error!("Advice response decode failed: {}", e);
                FALLBACK_ERROR.to_string()
            }
        }
    }
}

/// The fixed role-establishing template: the advisor persona of the
/// "فرص" platform, answering in Arabic.
fn build_prompt(query: &str, context: Option<&str>) -> String {
    format!(
        "أنت مستشار مهني وتعليمي ذكي في منصة تسمى \"فرص\".\n\
         دورك هو مساعدة المستخدمين في العثور على الفرص المناسبة لهم، سواء كانت وظائف، تدريب، أو منح دراسية.\n\
         \n\
         سياق المستخدم الحالي (إن وجد): {}\n\
         \n\
         سؤال المستخدم: {}\n\
         \n\
         أجب باللغة العربية بأسلوب ودود، محفز، ومختصر. قدم نصائح عملية واقترح خطوات تالية.\n\
         لا تذكر أنك نموذج ذكاء اصطناعي، تصرف كجزء من فريق منصة \"فرص\".",
        context.unwrap_or("لا يوجد سياق محدد"),
        query
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// First non-empty text part of the first candidate, if any.
fn extract_text(resp: GenerateContentResponse) -> Option<String> {
    resp.candidates
        .into_iter()
        .find_map(|candidate| candidate.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .find(|text| !text.trim().is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_query_and_context() {
        let prompt = build_prompt("كيف أجد تدريباً صيفياً؟", Some("طالب حاسب، سنة ثالثة"));
        assert!(prompt.contains("كيف أجد تدريباً صيفياً؟"));
        assert!(prompt.contains("طالب حاسب، سنة ثالثة"));
        assert!(prompt.contains("فرص"));
    }

    #[test]
    fn missing_context_uses_the_placeholder() {
        let prompt = build_prompt("سؤال", None);
        assert!(prompt.contains("لا يوجد سياق محدد"));
    }

    #[test]
    fn extract_text_picks_the_first_non_empty_part() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "" }, { "text": "جرب التقديم مبكراً" } ] } }
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(resp).as_deref(), Some("جرب التقديم مبكراً"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(resp).is_none());
    }
}
