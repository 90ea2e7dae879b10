//! Conversation (question and answer) endpoints.

use super::ReevooClient;
use crate::error::Result;
use reqwest::Response;
use serde::Serialize;
use urlencoding::encode;

impl ReevooClient {
    /// Lists the conversations associated with a product.
    pub async fn conversation_list(
        &self,
        trkref: &str,
        locale: &str,
        sku: &str,
    ) -> Result<Response> {
        let path = format!(
            "/v4/organisations/{}/conversations?locale={}&sku={}",
            encode(trkref),
            encode(locale),
            encode(sku)
        );
        self.get(&path).await
    }

    /// Fetches a single conversation by ID.
    pub async fn conversation_detail(
        &self,
        conversation_id: &str,
        trkref: &str,
    ) -> Result<Response> {
        let path = format!(
            "/v4/conversations/{}?trkref={}",
            encode(conversation_id),
            encode(trkref)
        );
        self.get(&path).await
    }

    /// Creates a new conversation question.
    pub async fn create_conversation<T: Serialize + ?Sized>(
        &self,
        trkref: &str,
        conversation: &T,
    ) -> Result<Response> {
        let path = format!("/v4/organisations/{}/conversations", encode(trkref));
        self.post_json(&path, conversation).await
    }

    /// Increments the helpful count of a conversation question.
    pub async fn upvote_question(&self, question_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/conversations/{}/increment_helpful?trkref={}",
            encode(question_id),
            encode(trkref)
        );
        self.post(&path).await
    }

    /// Increments the unhelpful count of a conversation question.
    pub async fn downvote_question(&self, question_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/conversations/{}/increment_unhelpful?trkref={}",
            encode(question_id),
            encode(trkref)
        );
        self.post(&path).await
    }

    /// Increments the helpful count of a conversation answer.
    pub async fn upvote_answer(&self, answer_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/conversation_answers/{}/increment_helpful?trkref={}",
            encode(answer_id),
            encode(trkref)
        );
        self.post(&path).await
    }

    /// Increments the unhelpful count of a conversation answer.
    pub async fn downvote_answer(&self, answer_id: &str, trkref: &str) -> Result<Response> {
        let path = format!(
            "/v4/conversation_answers/{}/increment_unhelpful?trkref={}",
            encode(answer_id),
            encode(trkref)
        );
        self.post(&path).await
    }
}
