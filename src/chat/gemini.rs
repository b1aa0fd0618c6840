use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;

const PERSONA_PREAMBLE: &str = "Você é um assistente de vendas e suporte de alta performance da \
    plataforma Habilit (startup de conexão aluno-instrutor). Seja persuasivo, empático e rápido.";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub fn build_prompt(question: &str) -> String {
    format!("{PERSONA_PREAMBLE} Perg: {question}")
}

/// One generateContent round trip. `Ok(None)` means the service answered
/// but produced no usable text; the caller decides what to show for that.
pub async fn generate(
    config: &AssistantConfig,
    question: &str,
) -> Result<Option<String>, gloo_net::Error> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        config.api_base_url, config.model
    );
    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(question),
            }],
        }],
    };

    let response = Request::post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(&body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "generateContent returned status {}",
            response.status()
        )));
    }

    let parsed: GenerateContentResponse = response.json().await?;
    Ok(extract_text(parsed))
}

/// First non-empty part of the first candidate, if any.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find(|part| !part.text.is_empty()))
        .map(|part| part.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_question_in_persona_template() {
        let prompt = build_prompt("Quanto custa?");
        assert!(prompt.starts_with(PERSONA_PREAMBLE));
        assert!(prompt.ends_with("Perg: Quanto custa?"));
    }

    #[test]
    fn request_body_matches_wire_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "pergunta".to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "pergunta" }] }]
            })
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "primeira" }] } },
                    { "content": { "parts": [{ "text": "segunda" }] } }
                ],
                "modelVersion": "ignored"
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(parsed), Some("primeira".to_string()));
    }

    #[test]
    fn skips_empty_parts_within_a_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{ "content": { "parts": [{ "text": "" }, { "text": "útil" }] } }]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(parsed), Some("útil".to_string()));
    }

    #[test]
    fn missing_or_empty_candidates_yield_none() {
        let no_candidates: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(no_candidates), None);

        let empty_text: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{ "content": { "parts": [{ "text": "" }] } }]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(empty_text), None);

        let no_content: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(extract_text(no_content), None);
    }
}
